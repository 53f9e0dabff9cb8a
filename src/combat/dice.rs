//! Dice throws

use rand::Rng;

/// One throw of a six-sided die
pub fn roll_die(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_roll_stays_on_the_die() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let roll = roll_die(&mut rng);
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    fn test_roll_is_deterministic_under_a_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(roll_die(&mut a), roll_die(&mut b));
        }
    }
}
