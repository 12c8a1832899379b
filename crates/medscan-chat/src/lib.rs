//! An out-of-the-box MedScan.AI chat widget, wired to a page location.
//!
//! The crate includes a CLI tool that plays the page in the terminal. You
//! can also use it as a library to embed the widget into your own host.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod location;
mod session;

pub use location::PageLocation;
pub use session::{DEFAULT_BASE_URL, Session, SessionBuilder, SessionError};

/// Re-exports of [`medscan_chat_core`] crate.
pub mod core {
    pub use medscan_chat_core::*;
}
