//! Message flag bitmask generation.

use rand::Rng;

pub const FLAG_READ: u32 = 1;
pub const FLAG_EDITED: u32 = 1 << 1;
pub const FLAG_DELETED: u32 = 1 << 2;
pub const FLAG_FORWARDED: u32 = 1 << 3;
pub const FLAG_REPLY: u32 = 1 << 4;

/// All bits a generated bitmask may carry.
pub const FLAG_MASK: u32 = FLAG_READ | FLAG_EDITED | FLAG_DELETED | FLAG_FORWARDED | FLAG_REPLY;

/// Sample a message flag bitmask, each bit set independently with a
/// probability matching observed message traffic.
pub fn random_flags<R: Rng>(rng: &mut R) -> u32 {
    let mut flags = 0;
    if rng.gen_bool(0.80) {
        flags |= FLAG_READ;
    }
    if rng.gen_bool(0.10) {
        flags |= FLAG_EDITED;
    }
    if rng.gen_bool(0.02) {
        flags |= FLAG_DELETED;
    }
    if rng.gen_bool(0.15) {
        flags |= FLAG_FORWARDED;
    }
    if rng.gen_bool(0.30) {
        flags |= FLAG_REPLY;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_flags_within_mask() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let flags = random_flags(&mut rng);
            assert_eq!(flags & !FLAG_MASK, 0);
        }
    }

    #[test]
    fn test_read_flag_is_common() {
        let mut rng = StdRng::seed_from_u64(42);

        let read_count = (0..1_000)
            .filter(|_| random_flags(&mut rng) & FLAG_READ != 0)
            .count();
        // 80% expected; leave generous slack for the sample size
        assert!((700..=900).contains(&read_count), "read count {read_count}");
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(random_flags(&mut rng1), random_flags(&mut rng2));
        }
    }
}
