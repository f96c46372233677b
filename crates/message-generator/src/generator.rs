//! Main generator producing message records.

use crate::generators::{flags, list, text, timestamp};
use crate::record::MessageRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::ops::Range;

/// Pool of author/user ids messages are attributed to.
pub const USER_ID_RANGE: Range<i64> = 1_000..1_000_000;

/// Pool of chat ids rows are distributed across.
pub const CHAT_ID_RANGE: Range<i64> = 1_000..500_000;

/// Rows per partition bucket: `bucket = chat_msg_local_id / ROWS_PER_BUCKET`.
pub const ROWS_PER_BUCKET: i64 = 1_000;

/// Message record generator.
///
/// Each generated row draws a chat id from [`CHAT_ID_RANGE`] (or uses a
/// pinned one) and takes the next local id for that chat, so the
/// `(chat_id, bucket, chat_msg_local_id)` key is unique across the whole
/// run regardless of how rows spread over partitions.
///
/// The RNG is seeded: the same seed produces the same sequence of
/// records.
pub struct MessageGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
    /// When set, every row lands in this single chat partition
    fixed_chat_id: Option<i64>,
    /// Next clustering id per chat
    next_local_id: HashMap<i64, i64>,
    /// Total records emitted so far
    rows_generated: u64,
}

impl MessageGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            fixed_chat_id: None,
            next_local_id: HashMap::new(),
            rows_generated: 0,
        }
    }

    /// Pin every generated row to a single chat partition.
    pub fn with_chat_id(mut self, chat_id: i64) -> Self {
        self.fixed_chat_id = Some(chat_id);
        self
    }

    /// Number of records emitted so far.
    pub fn rows_generated(&self) -> u64 {
        self.rows_generated
    }

    /// Generate the next message record.
    pub fn next_record(&mut self) -> MessageRecord {
        let chat_id = match self.fixed_chat_id {
            Some(id) => id,
            None => self.rng.gen_range(CHAT_ID_RANGE),
        };

        let counter = self.next_local_id.entry(chat_id).or_insert(0);
        let chat_msg_local_id = *counter;
        *counter += 1;

        let author_id = self.rng.gen_range(USER_ID_RANGE);
        let date = timestamp::random_message_date(&mut self.rng);

        let record = MessageRecord {
            chat_id,
            bucket: chat_msg_local_id / ROWS_PER_BUCKET,
            chat_msg_local_id,
            flags: flags::random_flags(&mut self.rng),
            date,
            update_time: timestamp::random_update_time(&mut self.rng, date),
            author_id,
            text: text::random_text(&mut self.rng),
            kludges: text::random_kludges(&mut self.rng),
            forwarded: self.rng.gen_bool(0.15),
            forwarded_message_ids: list::random_forwarded_ids(&mut self.rng),
            mentions: text::random_mentions(&mut self.rng),
            marked_users: list::random_marked_users(&mut self.rng, author_id, USER_ID_RANGE),
            ttl: timestamp::random_ttl(&mut self.rng),
            deleted_for_all: self.rng.gen_bool(0.01),
        };

        self.rows_generated += 1;
        record
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: u64) -> MessageRecordIterator<'_> {
        MessageRecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates message records.
pub struct MessageRecordIterator<'a> {
    generator: &'a mut MessageGenerator,
    remaining: u64,
}

impl Iterator for MessageRecordIterator<'_> {
    type Item = MessageRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MessageRecordIterator<'_> {}
