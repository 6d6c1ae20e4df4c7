//! Rolling commentary history.
//!
//! Holds only the announcer/color lines the loop has actually spoken.
//! Scene descriptions and prompts never enter it. Entries are appended
//! in pairs and trimmed from the oldest end so the history never exceeds
//! its retention count.

use crate::Message;

/// Label prefixed to the play-by-play line when it is stored.
pub const ANNOUNCER_LABEL: &str = "Play-by-play announcer:";
/// Label prefixed to the color line when it is stored.
pub const COLOR_LABEL: &str = "Color commentator:";

/// Ordered, bounded log of committed commentary turns.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    entries: Vec<Message>,
    retention: usize,
}

impl ConversationHistory {
    pub fn new(retention: usize) -> Self {
        Self {
            entries: Vec::with_capacity(retention + 2),
            retention,
        }
    }

    /// Append one announcer/color pair (both assistant turns, announcer
    /// first) and drop the oldest entries beyond the retention count.
    pub fn commit_commentary(&mut self, announcer: &str, color: &str) {
        self.entries
            .push(Message::assistant(format!("{ANNOUNCER_LABEL} {announcer}")));
        self.entries
            .push(Message::assistant(format!("{COLOR_LABEL} {color}")));

        let excess = self.entries.len().saturating_sub(self.retention);
        if excess > 0 {
            self.entries.drain(..excess);
        }
    }

    /// Retained turns, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.entries
    }

    pub fn retention(&self) -> usize {
        self.retention
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
