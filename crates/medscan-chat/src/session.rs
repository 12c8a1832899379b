use std::path::PathBuf;
use std::time::Duration;

use medscan_chat_core::knowledge::{KnowledgeError, KnowledgeTable};
use medscan_chat_core::navigation::NavigationRules;
use medscan_chat_core::{
    ActorDeadError, ChatWidget, ChatWidgetBuilder, KeywordResponder,
    WidgetConfigBuilder, WidgetSnapshot,
};
use medscan_chat_model::Message;
use thiserror::Error;
use url::Url;

use crate::location::PageLocation;

/// The page the widget is embedded in, unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/";

/// An error that occurred while building a [`Session`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// The page URL could not be parsed.
    #[error("invalid page URL `{url}`")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The knowledge table could not be loaded.
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
}

/// A session builder.
///
/// See [`Session`].
pub struct SessionBuilder {
    base_url: String,
    knowledge_path: Option<PathBuf>,
    config: WidgetConfigBuilder,
    widget_builder: ChatWidgetBuilder,
    on_navigate: Option<Box<dyn Fn(&Url) + Send + Sync>>,
}

impl SessionBuilder {
    /// Creates a builder for a page at [`DEFAULT_BASE_URL`] that answers
    /// from the built-in knowledge table.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            knowledge_path: None,
            config: WidgetConfigBuilder::new(),
            widget_builder: ChatWidgetBuilder::new(),
            on_navigate: None,
        }
    }

    /// Sets the URL of the page hosting the widget.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Answers from the JSON table at `path` instead of the built-in one.
    #[inline]
    pub fn with_knowledge_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.knowledge_path = Some(path.into());
        self
    }

    /// Sets the delay before replies show up.
    #[inline]
    pub fn with_typing_delay(mut self, delay: Duration) -> Self {
        self.config = self.config.with_typing_delay(delay);
        self
    }

    /// Attaches a callback to be invoked when a message is added to the
    /// transcript.
    #[inline]
    pub fn on_message(
        mut self,
        on_message: impl Fn(&Message) + Send + Sync + 'static,
    ) -> Self {
        self.widget_builder = self.widget_builder.on_message(on_message);
        self
    }

    /// Attaches a callback to be invoked when every reply has shown up.
    #[inline]
    pub fn on_idle(
        mut self,
        on_idle: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.widget_builder = self.widget_builder.on_idle(on_idle);
        self
    }

    /// Attaches a callback to be invoked after the page location changed.
    #[inline]
    pub fn on_navigate(
        mut self,
        on_navigate: impl Fn(&Url) + Send + Sync + 'static,
    ) -> Self {
        self.on_navigate = Some(Box::new(on_navigate));
        self
    }

    /// Builds a new session. Must be called within a tokio runtime.
    pub fn build(self) -> Result<Session, SessionError> {
        let SessionBuilder {
            base_url,
            knowledge_path,
            config,
            widget_builder,
            on_navigate,
        } = self;

        let base = Url::parse(&base_url).map_err(|source| {
            SessionError::InvalidBaseUrl {
                url: base_url.clone(),
                source,
            }
        })?;
        let table = match knowledge_path {
            Some(path) => KnowledgeTable::load(path)?,
            None => KnowledgeTable::builtin(),
        };
        info!(entries = table.len(), %base, "starting chat session");

        let mut location = PageLocation::new(base);
        if let Some(on_navigate) = on_navigate {
            location = location.on_change(on_navigate);
        }
        let responder =
            KeywordResponder::new(table, NavigationRules::default());
        let widget = widget_builder
            .with_config(config.build())
            .with_responder(responder)
            .with_navigator(location.clone())
            .build();

        Ok(Session { widget, location })
    }
}

impl Default for SessionBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A chat session: the widget plus the page it lives on.
///
/// It is basically a wrapper around [`ChatWidget`] that wires the widget's
/// navigation to a [`PageLocation`].
pub struct Session {
    widget: ChatWidget,
    location: PageLocation,
}

impl Session {
    /// Opens or closes the widget.
    #[inline]
    pub fn toggle(&self) {
        self.widget.toggle();
    }

    /// Sends a message to the widget.
    #[inline]
    pub fn send_message(&self, message: &str) {
        self.widget.submit(message);
    }

    /// Resets the widget.
    #[inline]
    pub fn reset(&self) {
        self.widget.reset();
    }

    /// Returns the current widget state.
    #[inline]
    pub async fn snapshot(&self) -> Result<WidgetSnapshot, ActorDeadError> {
        self.widget.snapshot().await
    }

    /// Returns the current page location.
    #[inline]
    pub fn location(&self) -> String {
        self.location.href()
    }

    /// Returns the underlying widget.
    #[inline]
    pub fn widget(&self) -> &ChatWidget {
        &self.widget
    }
}
