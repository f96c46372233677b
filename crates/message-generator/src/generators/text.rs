//! Text-bearing field generators.
//!
//! Message bodies are short word-pool phrases; `kludges` is a compact
//! opaque attachment blob carried by a share of messages; `mentions` is
//! a weighted label. All outputs are bounded in length so the average
//! row size stays realistic.

use rand::seq::SliceRandom;
use rand::Rng;

/// Word pool for message bodies.
const WORD_POOL: &[&str] = &[
    "hi", "hello", "thanks", "ok", "maybe", "today", "tomorrow", "yesterday", "work", "home",
    "friends", "meeting", "project", "task", "urgent", "important", "file", "link", "call",
    "later", "sure", "sorry", "great", "done",
];

const PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Mention targets with their sampling weights.
const MENTION_KINDS: &[(&str, f64)] = &[("none", 0.7), ("all", 0.1), ("online", 0.1), ("user", 0.1)];

const ATTACHMENT_KINDS: &[&str] = &["photo", "video", "document", "audio", "voice", "sticker"];

/// Generate a message body: 1-2 pool words, sometimes capitalized,
/// usually ending with punctuation.
pub fn random_text<R: Rng>(rng: &mut R) -> String {
    let words = rng.gen_range(1..=2);
    let mut out = String::new();

    for i in 0..words {
        let word = *WORD_POOL.choose(rng).unwrap();
        if i > 0 {
            out.push(' ');
        }
        if rng.gen_bool(0.30) {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push_str(word);
        }
    }

    if rng.gen_bool(0.70) {
        out.push(*PUNCTUATION.choose(rng).unwrap());
    }
    out
}

/// Generate the `kludges` blob: 30% of messages carry compact attachment
/// metadata, the rest carry nothing.
pub fn random_kludges<R: Rng>(rng: &mut R) -> String {
    if !rng.gen_bool(0.30) {
        return String::new();
    }

    let kind = *ATTACHMENT_KINDS.choose(rng).unwrap();
    let id: u64 = rng.gen();
    let size: u64 = rng.gen_range(1_024..50 * 1_024 * 1_024);
    let token: u32 = rng.gen();
    format!(
        r#"{{"type":"{kind}","id":"{id:016x}","size":{size},"url":"https://cdn.example.com/{kind}/{token:08x}"}}"#
    )
}

/// Weighted choice over mention kinds.
pub fn random_mentions<R: Rng>(rng: &mut R) -> String {
    MENTION_KINDS
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(kind, _)| (*kind).to_string())
        .unwrap_or_else(|_| "none".to_string())
}
