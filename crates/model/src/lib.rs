//! Shared vocabulary for the chat widget.
//!
//! This crate defines what flows through the widget (messages and replies)
//! and the two seams the widget talks to: a [`Responder`] that turns user
//! input into a reply, and a [`Navigator`] that carries out page-location
//! changes.
//!
//! Types in this crate don't define any matching or scheduling behavior,
//! that lives in `medscan-chat-core`.

#![deny(missing_docs)]

mod message;
mod navigation;
mod responder;

pub use message::*;
pub use navigation::*;
pub use responder::*;
