//! Integer-list field generators.

use rand::Rng;
use std::ops::Range;

/// Pool of message ids a forwarded message may reference.
const FORWARDED_ID_RANGE: Range<i64> = 1_000_000..10_000_000;

/// Most ids a single message forwards.
pub const MAX_FORWARDED_IDS: usize = 3;

/// Most users a single message mentions.
pub const MAX_MARKED_USERS: usize = 5;

/// Ids of forwarded source messages; most rows forward nothing.
pub fn random_forwarded_ids<R: Rng>(rng: &mut R) -> Vec<i64> {
    if !rng.gen_bool(0.15) {
        return Vec::new();
    }
    let len = rng.gen_range(1..=MAX_FORWARDED_IDS);
    (0..len).map(|_| rng.gen_range(FORWARDED_ID_RANGE)).collect()
}

/// Mentioned user ids drawn from `pool`, distinct from each other and
/// from the author; most rows mention nobody.
pub fn random_marked_users<R: Rng>(rng: &mut R, author_id: i64, pool: Range<i64>) -> Vec<i64> {
    if !rng.gen_bool(0.20) {
        return Vec::new();
    }
    let len = rng.gen_range(1..=MAX_MARKED_USERS);
    let mut users = Vec::with_capacity(len);
    while users.len() < len {
        let candidate = rng.gen_range(pool.clone());
        if candidate != author_id && !users.contains(&candidate) {
            users.push(candidate);
        }
    }
    users
}
