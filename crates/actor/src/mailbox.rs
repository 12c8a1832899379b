use std::fmt::Debug;

use tokio::sync::{mpsc, watch};

use crate::{Actor, ActorDeadError};

/// Object-safe shim so that messages can travel through the mailbox as
/// `Box<dyn Message<S>>` while still being consumed by value.
pub trait BoxMessage<S>: Send + Debug + 'static {
    fn handle_box(self: Box<Self>, state: &mut S, handle: &Actor<S>);
}

/// A message that an actor with state `S` can handle.
///
/// Handlers run one at a time on the actor's task, with exclusive access
/// to the state. They must not block: long-running work belongs in a
/// spawned task that reports back with another message.
pub trait Message<S>: BoxMessage<S> {
    /// Handles the message with mutable access to the actor's state.
    fn handle(self, state: &mut S, handle: &Actor<S>);
}

impl<S, M: Message<S>> BoxMessage<S> for M {
    #[inline]
    fn handle_box(self: Box<Self>, state: &mut S, handle: &Actor<S>) {
        (*self).handle(state, handle)
    }
}

impl<S, M: Message<S> + ?Sized> Message<S> for Box<M> {
    #[inline]
    fn handle(self, state: &mut S, handle: &Actor<S>) {
        self.handle_box(state, handle)
    }
}

pub(crate) type BoxedMessage<S> = Box<dyn Message<S>>;

/// The receiving half of a mailbox, owned by the scheduler.
pub(crate) struct Inbox<S> {
    pub msg_rx: mpsc::UnboundedReceiver<BoxedMessage<S>>,
    pub stop_rx: watch::Receiver<bool>,
}

/// The sending half of a mailbox, shared by every handle of one actor.
pub(crate) struct Mailbox<S> {
    msg_tx: mpsc::UnboundedSender<BoxedMessage<S>>,
    stop_tx: watch::Sender<bool>,
}

impl<S: Send + Sync + 'static> Mailbox<S> {
    pub fn open() -> (Self, Inbox<S>) {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);
        (Mailbox { msg_tx, stop_tx }, Inbox { msg_rx, stop_rx })
    }

    #[inline]
    pub fn post(&self, msg: BoxedMessage<S>) -> Result<(), ActorDeadError> {
        self.msg_tx.send(msg).map_err(|_| ActorDeadError)
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.msg_tx.is_closed()
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop_tx.send(true).ok();
    }
}
