use medscan_chat_model::{Message, Navigator, Responder};

use super::{ChatWidget, IdleCallback, MessageCallback};
use crate::config::WidgetConfig;
use crate::keyword::KeywordResponder;
use crate::navigation::LogNavigator;

/// [`ChatWidget`] builder.
///
/// Without further setup the widget answers from the built-in knowledge
/// table and only logs navigation requests.
pub struct ChatWidgetBuilder {
    pub(crate) config: WidgetConfig,
    pub(crate) responder: Box<dyn Responder>,
    pub(crate) navigator: Box<dyn Navigator>,
    pub(crate) on_message: Option<MessageCallback>,
    pub(crate) on_idle: Option<IdleCallback>,
}

impl ChatWidgetBuilder {
    /// Creates a builder with the default responder and configuration.
    #[inline]
    pub fn new() -> Self {
        Self {
            config: WidgetConfig::default(),
            responder: Box::new(KeywordResponder::default()),
            navigator: Box::new(LogNavigator),
            on_message: None,
            on_idle: None,
        }
    }

    /// Sets the configuration.
    #[inline]
    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets what answers the visitor's questions.
    #[inline]
    pub fn with_responder<R: Responder + 'static>(
        mut self,
        responder: R,
    ) -> Self {
        self.responder = Box::new(responder);
        self
    }

    /// Sets what carries out page-location changes.
    #[inline]
    pub fn with_navigator<N: Navigator + 'static>(
        mut self,
        navigator: N,
    ) -> Self {
        self.navigator = Box::new(navigator);
        self
    }

    /// Attaches a callback invoked for every message added to the
    /// transcript.
    #[inline]
    pub fn on_message(
        mut self,
        on_message: impl Fn(&Message) + Send + Sync + 'static,
    ) -> Self {
        self.on_message = Some(Box::new(on_message));
        self
    }

    /// Attaches a callback invoked when the last pending reply has shown
    /// up.
    #[inline]
    pub fn on_idle(
        mut self,
        on_idle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.on_idle = Some(Box::new(on_idle));
        self
    }

    /// Builds the widget and starts it on the current tokio runtime.
    #[inline]
    pub fn build(self) -> ChatWidget {
        ChatWidget::spawn_from_builder(self)
    }
}

impl Default for ChatWidgetBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
