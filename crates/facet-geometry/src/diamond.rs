//! Faceted double-pyramid ("diamond") generator.
//!
//! Two apex points on the vertical axis are joined by triangle fans to a ring
//! of equatorial points. Point positions are a deterministic function of the
//! parameters; only the per-point colors consume the caller's random source.

use glam::Vec3;
use rand::Rng;

use crate::mesh::Mesh;
use crate::random::random_vec3;

/// Shape parameters for [`DiamondGeometry`].
///
/// `width` is the diameter of the equatorial ring, `height` the pole-to-pole
/// distance, `facets` the number of equatorial vertices. Values below 3 facets
/// are clamped up rather than rejected; the one real caller (the gallery UI)
/// never exercises that range, and degenerate numeric input yields a
/// structurally valid mesh with zero visual extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiamondParams {
    pub width: f32,
    pub height: f32,
    pub facets: u32,
}

impl Default for DiamondParams {
    fn default() -> Self {
        Self { width: 1.0, height: 1.0, facets: 3 }
    }
}

impl DiamondParams {
    /// Builds params from raw control values; `facets` is floored, then
    /// clamped to the minimum of 3.
    pub fn from_controls(width: f32, height: f32, facets: f32) -> Self {
        let facets = if facets.is_finite() && facets >= 0.0 { facets.floor() as u32 } else { 0 };
        Self { width, height, facets }
    }

    /// Effective facet count after clamping.
    #[inline]
    pub fn effective_facets(&self) -> u32 {
        self.facets.max(3)
    }
}

/// A diamond solid described by its parameters.
///
/// The value itself is immutable and cheap to copy; call [`mesh`](Self::mesh)
/// to produce a fresh triangulated buffer pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiamondGeometry {
    params: DiamondParams,
}

impl DiamondGeometry {
    pub fn new(params: DiamondParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> DiamondParams {
        self.params
    }

    /// Triangulates the solid into a flat position/color buffer pair.
    ///
    /// Output layout, in order:
    /// - top fan: `facets - 1` consecutive-pair triangles `(top, ring[i],
    ///   ring[i+1])`, then one closing triangle `(top, ring[last], ring[0])`
    /// - bottom fan: the same walk against the bottom apex
    ///
    /// Total `2 * facets` triangles, `18 * facets` floats per stream. One
    /// random color is drawn per distinct point (two apexes + ring), not per
    /// vertex occurrence, so shared vertices keep their color across
    /// triangles.
    pub fn mesh(&self, rng: &mut impl Rng) -> Mesh {
        let facets = self.params.effective_facets() as usize;
        let step = std::f32::consts::TAU / facets as f32;
        let half_width = self.params.width / 2.0;
        let half_height = self.params.height / 2.0;

        let top = Vec3::new(0.0, half_height, 0.0);
        let bottom = Vec3::new(0.0, -half_height, 0.0);
        let top_color = random_vec3(rng);
        let bottom_color = random_vec3(rng);

        let ring: Vec<Vec3> = (0..facets)
            .map(|i| {
                let angle = i as f32 * step;
                Vec3::new(angle.cos() * half_width, 0.0, angle.sin() * half_width)
            })
            .collect();
        let ring_colors: Vec<Vec3> = ring.iter().map(|_| random_vec3(rng)).collect();

        let mut mesh = Mesh {
            positions: Vec::with_capacity(18 * facets),
            colors: Vec::with_capacity(18 * facets),
        };

        for (apex, apex_color) in [(top, top_color), (bottom, bottom_color)] {
            for i in 0..facets - 1 {
                push_triangle(
                    &mut mesh,
                    [apex, ring[i], ring[i + 1]],
                    [apex_color, ring_colors[i], ring_colors[i + 1]],
                );
            }
            // Closing triangle wraps the last ring point back to the first.
            push_triangle(
                &mut mesh,
                [apex, ring[facets - 1], ring[0]],
                [apex_color, ring_colors[facets - 1], ring_colors[0]],
            );
        }

        debug_assert!(mesh.is_structurally_valid());
        mesh
    }
}

fn push_triangle(mesh: &mut Mesh, points: [Vec3; 3], colors: [Vec3; 3]) {
    for p in points {
        mesh.positions.extend_from_slice(&p.to_array());
    }
    for c in colors {
        mesh.colors.extend_from_slice(&c.to_array());
    }
}

/// Convenience wrapper: generates a mesh with the thread-local rng.
pub fn generate(width: f32, height: f32, facets: u32) -> Mesh {
    DiamondGeometry::new(DiamondParams { width, height, facets }).mesh(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f32 = 1e-5;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn mesh_for(width: f32, height: f32, facets: u32) -> Mesh {
        DiamondGeometry::new(DiamondParams { width, height, facets }).mesh(&mut rng())
    }

    #[test]
    fn stream_lengths_match_facet_count() {
        for facets in 3..=9 {
            let m = mesh_for(1.0, 1.0, facets);
            assert_eq!(m.positions.len(), 18 * facets as usize);
            assert_eq!(m.colors.len(), m.positions.len());
        }
    }

    #[test]
    fn facets_below_three_are_clamped() {
        let base = mesh_for(1.0, 1.0, 3);
        for facets in [0, 1, 2] {
            let m = mesh_for(1.0, 1.0, facets);
            assert_eq!(m.positions.len(), base.positions.len());
            assert_eq!(m.positions, base.positions);
        }
    }

    #[test]
    fn positions_are_deterministic_across_calls() {
        let geometry = DiamondGeometry::new(DiamondParams { width: 1.4, height: 0.6, facets: 5 });
        let a = geometry.mesh(&mut rand::thread_rng());
        let b = geometry.mesh(&mut rand::thread_rng());
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.positions.len(), b.colors.len());
    }

    #[test]
    fn fan_apexes_sit_on_the_vertical_axis() {
        let height = 1.5;
        let m = mesh_for(1.0, height, 6);
        let triangles = m.triangle_count();
        for t in 0..triangles {
            let apex = &m.positions[t * 9..t * 9 + 3];
            let expected_y = if t < triangles / 2 { height / 2.0 } else { -height / 2.0 };
            assert_eq!(apex[0], 0.0);
            assert!((apex[1] - expected_y).abs() < EPS);
            assert_eq!(apex[2], 0.0);
        }
    }

    #[test]
    fn ring_points_lie_on_the_equator_at_half_width() {
        let width = 1.8;
        let m = mesh_for(width, 1.0, 7);
        let r2 = (width / 2.0) * (width / 2.0);
        // Vertices 1 and 2 of every triangle are ring points.
        for t in 0..m.triangle_count() {
            for v in 1..3 {
                let p = &m.positions[t * 9 + v * 3..t * 9 + v * 3 + 3];
                assert_eq!(p[1], 0.0);
                assert!((p[0] * p[0] + p[2] * p[2] - r2).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn triangle_count_is_twice_facets() {
        for facets in 3..=9 {
            assert_eq!(mesh_for(1.0, 1.0, facets).triangle_count(), 2 * facets as usize);
        }
    }

    #[test]
    fn each_fan_covers_every_ring_edge_once() {
        for facets in [3usize, 5, 8] {
            let m = mesh_for(1.0, 1.0, facets as u32);
            let step = std::f32::consts::TAU / facets as f32;
            // Ring points are placed at multiples of `step`, so the angle of a
            // vertex identifies its ring index.
            let ring_index = |x: f32, z: f32| -> usize {
                let angle = z.atan2(x).rem_euclid(std::f32::consts::TAU);
                ((angle / step).round() as usize) % facets
            };

            let per_fan = m.triangle_count() / 2;
            for fan in 0..2 {
                let mut edges: Vec<(usize, usize)> = (fan * per_fan..(fan + 1) * per_fan)
                    .map(|t| {
                        let a = &m.positions[t * 9 + 3..t * 9 + 6];
                        let b = &m.positions[t * 9 + 6..t * 9 + 9];
                        (ring_index(a[0], a[2]), ring_index(b[0], b[2]))
                    })
                    .collect();
                edges.sort_unstable();

                let mut expected: Vec<(usize, usize)> =
                    (0..facets).map(|i| (i, (i + 1) % facets)).collect();
                expected.sort_unstable();

                assert_eq!(edges, expected, "fan {fan} with {facets} facets");
            }
        }
    }

    #[test]
    fn unit_diamond_scenario() {
        let m = mesh_for(1.0, 1.0, 3);
        assert_eq!(m.triangle_count(), 6);
        assert_eq!(m.positions.len(), 54);

        // Ring at angles 0°, 120°, 240°, radius 0.5. ring[0] is vertex 1 of
        // the first triangle; ring[1] is vertex 2; ring[2] is vertex 1 of the
        // closing triangle (index before wrap).
        let ring0 = &m.positions[3..6];
        assert!((ring0[0] - 0.5).abs() < EPS && ring0[1] == 0.0 && ring0[2].abs() < EPS);
        let ring1 = &m.positions[6..9];
        assert!((ring1[0] - 0.5 * (120f32).to_radians().cos()).abs() < EPS);
        assert!((ring1[2] - 0.5 * (120f32).to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn wide_diamond_scenario() {
        let m = mesh_for(2.0, 1.0, 4);
        assert_eq!(m.triangle_count(), 8);
        let apex = &m.positions[0..3];
        assert!((apex[1] - 0.5).abs() < EPS);
        let ring0 = &m.positions[3..6];
        assert!((ring0[0] - 1.0).abs() < EPS);
    }

    #[test]
    fn minimum_control_values_stay_finite() {
        let m = mesh_for(0.1, 0.1, 3);
        assert!(m.is_structurally_valid());
        assert!(m.positions.iter().any(|v| *v != 0.0));
    }

    #[test]
    fn colors_are_normalized_and_shared_per_point() {
        let m = mesh_for(1.0, 1.0, 4);
        assert!(m.colors.iter().all(|c| (0.0..1.0).contains(c)));
        // The top apex is vertex 0 of each top-fan triangle; its color must
        // repeat across the fan.
        let apex_color = &m.colors[0..3];
        for t in 1..m.triangle_count() / 2 {
            assert_eq!(&m.colors[t * 9..t * 9 + 3], apex_color);
        }
    }

    #[test]
    fn from_controls_floors_the_facet_slider() {
        assert_eq!(DiamondParams::from_controls(1.0, 1.0, 5.9).facets, 5);
        assert_eq!(DiamondParams::from_controls(1.0, 1.0, 1.2).effective_facets(), 3);
        assert_eq!(DiamondParams::from_controls(1.0, 1.0, f32::NAN).effective_facets(), 3);
    }
}
