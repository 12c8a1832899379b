use std::time::Duration;

use crate::greeting::DEFAULT_GREETINGS;

/// How long the bot appears to type before a reply shows up.
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(500);

/// Builder for [`WidgetConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct WidgetConfigBuilder {
    typing_delay: Option<Duration>,
    greetings: Vec<String>,
}

impl WidgetConfigBuilder {
    /// Creates a builder with every option unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delay between a submission and its reply.
    #[inline]
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = Some(delay);
        self
    }

    /// Replaces the greeting set. An empty set keeps the default one.
    #[inline]
    pub fn with_greetings<I, S>(mut self, greetings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.greetings = greetings.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> WidgetConfig {
        let greetings = if self.greetings.is_empty() {
            DEFAULT_GREETINGS.iter().map(|g| (*g).to_owned()).collect()
        } else {
            self.greetings
        };
        WidgetConfig {
            typing_delay: self.typing_delay.unwrap_or(DEFAULT_TYPING_DELAY),
            greetings,
        }
    }
}

/// Presentation settings of a chat widget.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidgetConfig {
    pub(crate) typing_delay: Duration,
    pub(crate) greetings: Vec<String>,
}

impl WidgetConfig {
    /// Returns the default typing delay.
    #[inline]
    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }

    /// Returns the greeting set, never empty.
    #[inline]
    pub fn greetings(&self) -> &[String] {
        &self.greetings
    }
}

impl Default for WidgetConfig {
    #[inline]
    fn default() -> Self {
        WidgetConfigBuilder::new().build()
    }
}
