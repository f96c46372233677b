//! The message record model.

/// One synthetic chat message, shaped like a row of a wide-column
/// messages table.
///
/// `chat_id` and `bucket` form the partition key; `chat_msg_local_id` is
/// the clustering column, unique within its partition. `date`,
/// `update_time` and `ttl` are epoch seconds. `flags` is a bitmask (see
/// [`crate::generators::flags`]). `kludges` and `mentions` are opaque
/// text as far as this crate is concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    pub chat_id: i64,
    pub bucket: i64,
    pub chat_msg_local_id: i64,
    pub flags: u32,
    pub date: i64,
    pub update_time: i64,
    pub author_id: i64,
    pub text: String,
    pub kludges: String,
    pub forwarded: bool,
    pub forwarded_message_ids: Vec<i64>,
    pub mentions: String,
    pub marked_users: Vec<i64>,
    /// Seconds until expiry; 0 means the message never expires.
    pub ttl: u32,
    pub deleted_for_all: bool,
}

impl MessageRecord {
    /// The full primary key of this row.
    pub fn key(&self) -> (i64, i64, i64) {
        (self.chat_id, self.bucket, self.chat_msg_local_id)
    }
}
