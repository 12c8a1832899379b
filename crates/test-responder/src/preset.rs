use std::time::Duration;

use medscan_chat_model::{NavigationTarget, Reply};
use serde::{Deserialize, Serialize};

/// A canned reply for one scripted input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetReply {
    /// The bot message text.
    pub text: String,
    /// Where the page should go, if anywhere.
    #[serde(default)]
    pub navigation: Option<NavigationTarget>,
    /// Typing delay override in milliseconds.
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

impl PresetReply {
    /// Creates a preset with the given text.
    #[inline]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            navigation: None,
            delay_ms: None,
        }
    }

    /// Makes the reply navigate to `target`.
    #[inline]
    pub fn with_navigation(mut self, target: NavigationTarget) -> Self {
        self.navigation = Some(target);
        self
    }

    /// Overrides the typing delay of this reply.
    #[inline]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms =
            Some(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub(crate) fn to_reply(&self) -> Reply {
        Reply {
            text: self.text.clone(),
            navigation: self.navigation,
            typing_delay: self.delay_ms.map(Duration::from_millis),
        }
    }
}
