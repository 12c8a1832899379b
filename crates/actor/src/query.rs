use std::fmt::{self, Debug};
use std::marker::PhantomData;

use tokio::sync::oneshot;

use crate::{Actor, Message};

/// A read-only closure run against the actor's state, answered through a
/// oneshot channel.
pub(crate) struct Query<S, F, R> {
    f: F,
    reply_tx: oneshot::Sender<R>,
    _state: PhantomData<fn(&S)>,
}

impl<S, F, R> Query<S, F, R> {
    #[inline]
    pub fn new(f: F, reply_tx: oneshot::Sender<R>) -> Self {
        Self {
            f,
            reply_tx,
            _state: PhantomData,
        }
    }
}

impl<S, F, R> Debug for Query<S, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query").finish_non_exhaustive()
    }
}

impl<S, F, R> Message<S> for Query<S, F, R>
where
    S: 'static,
    F: FnOnce(&S) -> R + Send + 'static,
    R: Send + 'static,
{
    fn handle(self, state: &mut S, _handle: &Actor<S>) {
        // The asker may have given up waiting; that's fine.
        self.reply_tx.send((self.f)(state)).ok();
    }
}
