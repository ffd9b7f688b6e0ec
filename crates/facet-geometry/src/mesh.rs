/// Flattened triangle-list mesh: parallel position and color streams.
///
/// `positions` holds `(x, y, z)` triples grouped into triangles; `colors`
/// holds one `(r, g, b)` triple per vertex, index-aligned with `positions`.
///
/// Invariant: `positions.len() == colors.len()` and both are divisible by 9
/// (three vertices per triangle, three components per vertex). A `Mesh` has no
/// identity beyond structural equality and is produced fresh on every
/// generator call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl Mesh {
    /// Number of vertex occurrences (`positions.len() / 3`).
    ///
    /// This is the count to pass to a non-indexed draw call.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 9
    }

    /// Checks the structural invariant: aligned streams, whole triangles,
    /// finite components.
    pub fn is_structurally_valid(&self) -> bool {
        self.positions.len() == self.colors.len()
            && self.positions.len() % 9 == 0
            && self.positions.iter().all(|v| v.is_finite())
            && self.colors.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mesh_is_valid() {
        let m = Mesh::default();
        assert!(m.is_structurally_valid());
        assert_eq!(m.vertex_count(), 0);
        assert_eq!(m.triangle_count(), 0);
    }

    #[test]
    fn misaligned_streams_are_invalid() {
        let m = Mesh { positions: vec![0.0; 9], colors: vec![0.0; 6] };
        assert!(!m.is_structurally_valid());
    }

    #[test]
    fn partial_triangle_is_invalid() {
        let m = Mesh { positions: vec![0.0; 6], colors: vec![0.0; 6] };
        assert!(!m.is_structurally_valid());
    }

    #[test]
    fn nan_component_is_invalid() {
        let mut m = Mesh { positions: vec![0.0; 9], colors: vec![0.0; 9] };
        m.positions[4] = f32::NAN;
        assert!(!m.is_structurally_valid());
    }
}
