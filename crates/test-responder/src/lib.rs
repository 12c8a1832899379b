//! A scripted responder for testing purpose.

mod preset;

use std::sync::{Arc, Mutex};

use medscan_chat_model::{Reply, Responder};

pub use preset::*;

/// The reply given to any input that is not in the script.
pub const UNSCRIPTED_REPLY: &str = "(unscripted)";

/// A responder that answers from a fixed script.
///
/// Inputs are matched exactly against the script, and every input the
/// responder sees is recorded so tests can check what reached it. Clones
/// share the record.
#[derive(Clone, Default)]
pub struct ScriptedResponder {
    script: Vec<(String, PresetReply)>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl ScriptedResponder {
    /// Adds a preset reply for `input`.
    #[inline]
    pub fn add_reply<S: Into<String>>(
        &mut self,
        input: S,
        preset: PresetReply,
    ) {
        self.script.push((input.into(), preset));
    }

    /// Returns every input seen so far, in order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Responder for ScriptedResponder {
    fn respond(&self, input: &str) -> Reply {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(input.to_owned());
        }
        self.script
            .iter()
            .find(|(scripted, _)| scripted == input)
            .map(|(_, preset)| preset.to_reply())
            .unwrap_or_else(|| Reply::plain(UNSCRIPTED_REPLY))
    }
}
