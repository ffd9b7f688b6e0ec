//! Parametric heart-curve outline.
//!
//! Produces a closed polyline as flat `(x, y)` pairs for a line-strip draw.
//! The curve is the classic sine/cosine heart with every coefficient exposed
//! as a parameter so the gallery controls can deform it live.

/// Curve parameters. The defaults draw a recognizable heart centered slightly
/// above the origin in NDC.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeartParams {
    /// Extra phase added per sample as `π / offset_radian`; skews the curve.
    pub offset_radian: f32,
    pub x_ratio: f32,
    pub y_ratio: f32,
    pub x_multiple: f32,
    pub y_multiple: f32,
    /// Number of samples around the curve; the outline repeats the first
    /// sample at the end to close the strip.
    pub points: u32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for HeartParams {
    fn default() -> Self {
        Self {
            offset_radian: 4.0,
            x_ratio: 0.1,
            y_ratio: 0.24,
            x_multiple: 3.0,
            y_multiple: 2.0,
            points: 48,
            offset_x: 0.0,
            offset_y: 0.1,
        }
    }
}

/// Samples the outline. Output length is `2 * (points + 1)`: `points` samples
/// plus the repeated first point closing the loop.
pub fn outline(params: HeartParams) -> Vec<f32> {
    let points = params.points.max(1) as usize;
    let step = std::f32::consts::TAU / points as f32;
    let phase = std::f32::consts::PI / params.offset_radian;

    let mut xy = Vec::with_capacity(2 * (points + 1));
    for i in 0..points {
        let rad = (step + phase) * i as f32;
        let x = params.x_ratio
            * (params.x_multiple * rad.sin() - (params.x_multiple * rad).sin())
            + params.offset_x;
        let y = params.y_ratio
            * (params.y_multiple * rad.cos() - (params.y_multiple * rad).cos())
            + params.offset_y;
        xy.push(x);
        xy.push(y);
    }
    xy.push(xy[0]);
    xy.push(xy[1]);
    xy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_length_closes_the_strip() {
        let params = HeartParams { points: 48, ..HeartParams::default() };
        assert_eq!(outline(params).len(), 2 * 49);
    }

    #[test]
    fn first_point_is_repeated_last() {
        let xy = outline(HeartParams::default());
        let n = xy.len();
        assert_eq!(xy[0], xy[n - 2]);
        assert_eq!(xy[1], xy[n - 1]);
    }

    #[test]
    fn first_sample_sits_at_the_offset() {
        // At i = 0 the sine terms vanish and the cosine terms cancel the
        // multiples, so the sample is (offset_x, offset_y + y_ratio*(m - 1)).
        let p = HeartParams::default();
        let xy = outline(p);
        assert!((xy[0] - p.offset_x).abs() < 1e-6);
        let expected_y = p.y_ratio * (p.y_multiple - 1.0) + p.offset_y;
        assert!((xy[1] - expected_y).abs() < 1e-6);
    }

    #[test]
    fn samples_stay_finite_across_the_control_ranges() {
        for points in [4u32, 64, 128] {
            let params = HeartParams { points, offset_radian: 1.0, ..HeartParams::default() };
            assert!(outline(params).iter().all(|v| v.is_finite()));
        }
    }
}
