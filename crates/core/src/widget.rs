mod builder;
mod state;

use std::collections::VecDeque;

use medscan_actor::{Actor, ActorDeadError};
use medscan_chat_model::{Message, Navigator, Responder};

pub use builder::ChatWidgetBuilder;
use state::{PendingReply, Reset, SetDraft, Submit, SubmitDraft, Toggle};

use crate::config::WidgetConfig;
use crate::transcript::Transcript;

type MessageCallback = Box<dyn Fn(&Message) + Send + Sync>;
type IdleCallback = Box<dyn Fn() + Send + Sync>;

/// State owned by the widget's actor.
///
/// Every request to the widget is a message handled to completion before
/// the next one, so the user message of a submission is always in the
/// transcript before any later request is looked at.
pub(crate) struct WidgetState {
    config: WidgetConfig,
    responder: Box<dyn Responder>,
    navigator: Box<dyn Navigator>,
    open: bool,
    draft: String,
    transcript: Transcript,
    pending_replies: VecDeque<PendingReply>,
    next_seq: u64,

    on_message: Option<MessageCallback>,
    on_idle: Option<IdleCallback>,
}

/// A floating chat widget.
///
/// The widget answers through its [`Responder`] and performs page-location
/// changes through its [`Navigator`]. Replies appear after a typing delay,
/// always in the order the questions were submitted.
///
/// Cloning gives another handle to the same widget.
#[derive(Clone)]
pub struct ChatWidget {
    handle: Actor<WidgetState>,
}

impl ChatWidget {
    /// Opens the widget if it is closed and closes it otherwise.
    ///
    /// Opening a widget with an empty transcript greets the visitor.
    pub fn toggle(&self) {
        self.post(Toggle);
    }

    /// Submits `text` as if it had been typed and sent.
    ///
    /// Blank input is ignored.
    pub fn submit<S: Into<String>>(&self, text: S) {
        self.post(Submit(text.into()));
    }

    /// Replaces the contents of the input box.
    pub fn set_draft<S: Into<String>>(&self, text: S) {
        self.post(SetDraft(text.into()));
    }

    /// Submits whatever is in the input box.
    pub fn submit_draft(&self) {
        self.post(SubmitDraft);
    }

    /// Closes the widget, clears its transcript and input box, and drops
    /// every reply that has not shown up yet.
    pub fn reset(&self) {
        self.post(Reset);
    }

    /// Returns the current state of the widget.
    pub async fn snapshot(&self) -> Result<WidgetSnapshot, ActorDeadError> {
        self.handle
            .query(|state| WidgetSnapshot {
                open: state.open,
                draft: state.draft.clone(),
                transcript: state.transcript.clone(),
                pending_replies: state.pending_replies.len(),
            })
            .await
    }

    /// Returns a copy of the transcript.
    pub async fn transcript(&self) -> Result<Transcript, ActorDeadError> {
        self.handle.query(|state| state.transcript.clone()).await
    }

    fn post<M: medscan_actor::Message<WidgetState>>(&self, msg: M) {
        if self.handle.send(msg).is_err() {
            warn!("chat widget has stopped, dropping the request");
        }
    }

    fn spawn_from_builder(builder: ChatWidgetBuilder) -> Self {
        Self {
            handle: Actor::spawn(
                WidgetState::new(builder),
                Some("chat widget"),
            ),
        }
    }
}

impl WidgetState {
    fn new(builder: ChatWidgetBuilder) -> Self {
        let ChatWidgetBuilder {
            config,
            responder,
            navigator,
            on_message,
            on_idle,
        } = builder;

        Self {
            config,
            responder,
            navigator,
            open: false,
            draft: String::new(),
            transcript: Transcript::default(),
            pending_replies: VecDeque::new(),
            next_seq: 1,
            on_message,
            on_idle,
        }
    }
}

/// A point-in-time copy of the widget state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetSnapshot {
    /// Whether the conversation panel is shown.
    pub open: bool,
    /// Contents of the input box.
    pub draft: String,
    /// The conversation so far.
    pub transcript: Transcript,
    /// Replies computed but not shown yet.
    pub pending_replies: usize,
}

impl WidgetSnapshot {
    /// Returns the caption of the open/close button.
    #[inline]
    pub fn toggle_label(&self) -> &'static str {
        if self.open { "Close Chat" } else { "Chat with us" }
    }
}
