//! Transcript-related types.

use std::ops::Deref;

use medscan_chat_model::{Message, Sender};
use serde::Serialize;

/// The conversation shown in the widget, oldest message first.
///
/// Messages are only ever appended. The whole transcript is dropped on a
/// widget reset, and nothing is persisted.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    #[inline]
    pub(crate) fn push(&mut self, msg: Message) {
        self.messages.push(msg);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the most recent message from `sender`, if any.
    pub fn last_from(&self, sender: Sender) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.sender() == sender)
    }

    /// Exports the transcript as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        // A list of plain string pairs always serializes.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Deref for Transcript {
    type Target = [Message];

    #[inline]
    fn deref(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_from() {
        let mut transcript = Transcript::default();
        transcript.push(Message::bot("Hello!"));
        transcript.push(Message::user("banana"));
        transcript.push(Message::bot("Sorry."));

        assert_eq!(transcript.len(), 3);
        let last_user = transcript.last_from(Sender::User).unwrap();
        assert_eq!(last_user.text(), "banana");
        assert_eq!(transcript.last_from(Sender::Bot).unwrap().text(), "Sorry.");

        let json: serde_json::Value =
            serde_json::from_str(&transcript.to_json()).unwrap();
        assert_eq!(json[1]["sender"], "user");
    }
}
