//! Epoch timestamp and TTL generators.

use chrono::{TimeZone, Utc};
use rand::Rng;

/// Width of the message date window in seconds (three years).
const WINDOW_SECONDS: i64 = 3 * 365 * 24 * 3600;

/// TTLs a message may carry: 1 hour, 1 day, 1 week, 30 days.
const TTL_CHOICES: [u32; 4] = [3_600, 86_400, 604_800, 2_592_000];

/// Upper bound of the generated date window, as epoch seconds.
fn window_end() -> i64 {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp())
        .unwrap_or(1_577_836_800)
}

/// Random message date: uniform epoch seconds within the three-year
/// window ending at the fixed base date.
pub fn random_message_date<R: Rng>(rng: &mut R) -> i64 {
    let end = window_end();
    rng.gen_range(end - WINDOW_SECONDS..=end)
}

/// Update time for a message posted at `date`.
///
/// Most messages are never edited and keep `update_time == date`; a
/// small share gets bumped by up to an hour.
pub fn random_update_time<R: Rng>(rng: &mut R, date: i64) -> i64 {
    if rng.gen_bool(0.10) {
        date + rng.gen_range(60..=3_600)
    } else {
        date
    }
}

/// TTL in seconds; 0 (no expiry) for all but a small share of messages.
pub fn random_ttl<R: Rng>(rng: &mut R) -> u32 {
    if rng.gen_bool(0.05) {
        TTL_CHOICES[rng.gen_range(0..TTL_CHOICES.len())]
    } else {
        0
    }
}
