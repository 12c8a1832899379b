use std::time::Duration;

use crate::NavigationTarget;

/// What the bot says back, and where the page should go, if anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reply {
    /// The bot message text.
    pub text: String,
    /// A page-location change to perform alongside the reply.
    pub navigation: Option<NavigationTarget>,
    /// How long the bot should appear to type before the reply shows up.
    /// `None` defers to the widget's configured delay.
    pub typing_delay: Option<Duration>,
}

impl Reply {
    /// Creates a plain text reply.
    #[inline]
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            navigation: None,
            typing_delay: None,
        }
    }

    /// Creates a reply that also moves the page to `target`.
    #[inline]
    pub fn navigate<S: Into<String>>(
        text: S,
        target: NavigationTarget,
    ) -> Self {
        Self {
            text: text.into(),
            navigation: Some(target),
            typing_delay: None,
        }
    }

    /// Overrides the typing delay for this reply.
    #[inline]
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = Some(delay);
        self
    }
}

/// Turns user input into a reply.
///
/// Implementations must be total: every input gets some reply. The input
/// handed over is already trimmed and never empty.
pub trait Responder: Send + Sync {
    /// Computes the reply for `input`.
    fn respond(&self, input: &str) -> Reply;
}
