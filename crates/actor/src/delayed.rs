use tokio::task::JoinHandle;

/// A message scheduled with [`crate::Actor::send_after`].
///
/// Dropping this value does not cancel the delivery.
#[derive(Debug)]
pub struct Delayed {
    task: JoinHandle<()>,
}

impl Delayed {
    #[inline]
    pub(crate) fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    /// Calls off the delivery. Has no effect if it already happened.
    #[inline]
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Returns `true` once the message has been delivered or cancelled.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
