/// Outcome of the moderation gate for one inbound message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Banned,
    Filtered,
    Allowed,
}

/// Word filter for inbound messages.
///
/// Matching is case-sensitive substring containment against the configured
/// list, not tokenized: "spam" also matches "spammer".
#[derive(Clone, Debug, Default)]
pub struct ModerationGate {
    banned_words: Vec<String>,
}

impl ModerationGate {
    pub fn new(banned_words: Vec<String>) -> Self {
        Self { banned_words }
    }

    /// The ban check always precedes the word filter, so a banned user gets
    /// `Banned` even when their text would also be filtered.
    pub fn decide(&self, sender_banned: bool, text: &str) -> Decision {
        if sender_banned {
            return Decision::Banned;
        }
        if self.banned_words.iter().any(|w| text.contains(w.as_str())) {
            return Decision::Filtered;
        }
        Decision::Allowed
    }
}
