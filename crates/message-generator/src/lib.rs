//! Synthetic chat-message generator for storage growth benchmarking.
//!
//! This crate produces `MessageRecord` rows shaped like a wide-column
//! messages table, with realistic field distributions, for bulk loading
//! at increasing record counts. The generator uses a seeded RNG so the
//! same seed and count reproduce the same dataset.
//!
//! # Architecture
//!
//! ```text
//! seed
//!   │
//!   ▼
//! ┌────────────────────┐
//! │  MessageGenerator  │
//! │                    │
//! │  - rng (StdRng)    │
//! │  - per-chat        │
//! │    local-id        │
//! │    counters        │
//! └─────────┬──────────┘
//!           │
//!           ▼
//!   MessageRecord { chat_id, bucket, chat_msg_local_id, ... }
//! ```
//!
//! `(chat_id, bucket, chat_msg_local_id)` is unique across every record a
//! generator instance emits: local ids increment per chat and buckets are
//! derived from them.
//!
//! # Example
//!
//! ```rust
//! use message_generator::MessageGenerator;
//!
//! let mut generator = MessageGenerator::new(42);
//! let record = generator.next_record();
//! assert_eq!(record.bucket, record.chat_msg_local_id / 1_000);
//! ```

pub mod generator;
pub mod generators;
pub mod record;

// Re-exports for convenience
pub use generator::{MessageGenerator, MessageRecordIterator, CHAT_ID_RANGE, USER_ID_RANGE};
pub use record::MessageRecord;
