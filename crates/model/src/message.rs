use serde::{Deserialize, Serialize};

/// Who a transcript entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The widget itself.
    Bot,
    /// The person typing into the widget.
    User,
}

/// One transcript entry. Its text never changes after creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    /// Creates a message from the bot.
    #[inline]
    pub fn bot<S: Into<String>>(text: S) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    /// Creates a message from the user.
    #[inline]
    pub fn user<S: Into<String>>(text: S) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// Returns who sent this message.
    #[inline]
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Returns the message text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the bot sent this message.
    #[inline]
    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let msg = Message::user("how accurate is the detection");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sender": "user",
                "text": "how accurate is the detection",
            })
        );

        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
        assert!(!back.is_bot());
    }
}
