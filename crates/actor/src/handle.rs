use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::sleep;
use tracing::Instrument;

use crate::delayed::Delayed;
use crate::mailbox::Mailbox;
use crate::query::Query;
use crate::scheduler::run_actor;
use crate::{ActorDeadError, Message};

/// Handle to an actor.
///
/// Handles are cheap to clone. The actor keeps running for as long as at
/// least one handle exists, or until [`Actor::stop`] is called.
pub struct Actor<S> {
    mailbox: Arc<Mailbox<S>>,
}

impl<S: Send + Sync + 'static> Actor<S> {
    /// Spawns a new actor owning `state` on the current tokio runtime.
    ///
    /// The `label` only shows up in tracing spans.
    pub fn spawn(state: S, label: Option<&str>) -> Self {
        let (mailbox, inbox) = Mailbox::open();
        let mailbox = Arc::new(mailbox);
        tokio::spawn(
            run_actor(Arc::downgrade(&mailbox), state, inbox)
                .instrument(debug_span!("actor", label)),
        );
        Self { mailbox }
    }

    #[inline]
    pub(crate) fn from_mailbox(mailbox: Arc<Mailbox<S>>) -> Self {
        Self { mailbox }
    }

    /// Sends a message to the actor.
    ///
    /// Messages sent from one handle are handled in the order they were
    /// sent.
    #[inline]
    pub fn send<M: Message<S>>(&self, msg: M) -> Result<(), ActorDeadError> {
        self.mailbox.post(Box::new(msg))
    }

    /// Sends a message to the actor once `delay` has elapsed.
    ///
    /// The pending delivery does not keep the actor alive, and it can be
    /// called off with [`Delayed::cancel`] any time before it is due.
    pub fn send_after<M: Message<S>>(
        &self,
        delay: Duration,
        msg: M,
    ) -> Delayed {
        let mailbox = Arc::downgrade(&self.mailbox);
        let task = tokio::spawn(async move {
            sleep(delay).await;
            let Some(mailbox) = mailbox.upgrade() else {
                trace!("actor is gone, dropping delayed {msg:?}");
                return;
            };
            if mailbox.post(Box::new(msg)).is_err() {
                trace!("actor stopped before a delayed message was due");
            }
        });
        Delayed::new(task)
    }

    /// Runs `f` against the actor's state and returns its result.
    ///
    /// The query is queued like any other message, so it observes every
    /// message sent before it from the same handle.
    pub async fn query<F, R>(&self, f: F) -> Result<R, ActorDeadError>
    where
        F: FnOnce(&S) -> R + Send + 'static,
        R: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        self.send(Query::<S, F, R>::new(f, tx))?;
        rx.await.map_err(|_| ActorDeadError)
    }

    /// Returns `true` if the actor is no longer accepting messages.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.mailbox.is_closed()
    }

    /// Asks the actor to stop.
    ///
    /// The actor finishes the message it is currently handling, if any,
    /// and then quits without handling anything else.
    #[inline]
    pub fn stop(&self) {
        self.mailbox.request_stop();
    }
}

impl<S> Clone for Actor<S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            mailbox: Arc::clone(&self.mailbox),
        }
    }
}
