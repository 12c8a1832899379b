//! A lightweight actor runtime.
//!
//! Every actor owns its state exclusively and handles one message at a time
//! on its own tokio task. Besides plain sends, a handle can deliver a message
//! after a delay (cancellable) and run read-only queries against the state.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod delayed;
mod error;
mod handle;
mod mailbox;
mod query;
mod scheduler;

pub use delayed::Delayed;
pub use error::ActorDeadError;
pub use handle::Actor;
pub use mailbox::Message;

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::sleep;

    use super::*;

    #[derive(Default)]
    struct Tally {
        values: Vec<u32>,
    }

    #[derive(Debug)]
    struct Push(u32);

    impl Message<Tally> for Push {
        fn handle(self, state: &mut Tally, _handle: &Actor<Tally>) {
            state.values.push(self.0);
        }
    }

    #[derive(Debug)]
    struct PushTwice(u32);

    impl Message<Tally> for PushTwice {
        fn handle(self, state: &mut Tally, handle: &Actor<Tally>) {
            state.values.push(self.0);
            handle.send(Push(self.0)).unwrap();
        }
    }

    #[tokio::test]
    async fn test_send_and_query() {
        let actor = Actor::spawn(Tally::default(), None);
        actor.send(Push(1)).unwrap();
        actor.send(Push(2)).unwrap();

        let values = actor.query(|s| s.values.clone()).await.unwrap();
        assert_eq!(values, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_self_send() {
        let actor = Actor::spawn(Tally::default(), Some("tally"));
        actor.send(PushTwice(7)).unwrap();

        // The follow-up lands behind the first query.
        assert_eq!(actor.query(|s| s.values.len()).await.unwrap(), 1);
        assert_eq!(actor.query(|s| s.values.len()).await.unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_after() {
        let actor = Actor::spawn(Tally::default(), None);
        let delayed = actor.send_after(Duration::from_millis(500), Push(3));

        sleep(Duration::from_millis(499)).await;
        assert!(actor.query(|s| s.values.is_empty()).await.unwrap());

        sleep(Duration::from_millis(2)).await;
        assert_eq!(actor.query(|s| s.values.clone()).await.unwrap(), vec![3]);
        assert!(delayed.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_delayed() {
        let actor = Actor::spawn(Tally::default(), None);
        let delayed = actor.send_after(Duration::from_millis(500), Push(3));
        delayed.cancel();

        sleep(Duration::from_secs(1)).await;
        assert!(actor.query(|s| s.values.is_empty()).await.unwrap());
    }

    #[tokio::test]
    async fn test_stop() {
        let actor = Actor::spawn(Tally::default(), None);
        actor.stop();

        let result = actor.query(|s| s.values.len()).await;
        assert_eq!(result, Err(ActorDeadError));
        assert!(actor.is_stopped());
    }
}
