//! Core logic of the chat widget: the widget actor, its knowledge table,
//! navigation overrides and configuration.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod config;
mod greeting;
mod keyword;
pub mod knowledge;
pub mod navigation;
pub mod transcript;
mod widget;

pub use config::{DEFAULT_TYPING_DELAY, WidgetConfig, WidgetConfigBuilder};
pub use greeting::DEFAULT_GREETINGS;
pub use keyword::{FALLBACK_REPLY, KeywordResponder};
pub use medscan_actor::ActorDeadError;
pub use widget::{ChatWidget, ChatWidgetBuilder, WidgetSnapshot};
