use glam::Vec3;
use rand::Rng;

/// Three independent uniform draws in `[0, 1)`, used as an RGB color.
pub fn random_vec3(rng: &mut impl Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn components_stay_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = random_vec3(&mut rng);
            for c in v.to_array() {
                assert!((0.0..1.0).contains(&c));
            }
        }
    }
}
