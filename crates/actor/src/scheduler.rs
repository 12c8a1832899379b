use std::sync::Weak;

use tokio::select;

use crate::mailbox::{Inbox, Mailbox};
use crate::{Actor, Message};

/// Drives one actor until it is stopped or every handle is gone.
pub(crate) async fn run_actor<S: Send + Sync + 'static>(
    mailbox: Weak<Mailbox<S>>,
    mut state: S,
    inbox: Inbox<S>,
) {
    let Inbox {
        mut msg_rx,
        mut stop_rx,
    } = inbox;
    let mut handled = 0_u64;

    debug!("started");
    loop {
        let msg = select! {
            biased;

            _ = stop_rx.changed() => {
                debug!("stop requested");
                break;
            }
            msg = msg_rx.recv() => {
                let Some(msg) = msg else {
                    break;
                };
                msg
            }
        };
        trace!("received message: {msg:?}");

        // Handlers get a live handle so they can post follow-up messages
        // to themselves. If none can be made, nobody is left to observe
        // the outcome anyway.
        let Some(mailbox) = mailbox.upgrade() else {
            warn!("all handles have been dropped, discarding {msg:?}");
            break;
        };
        let handle = Actor::from_mailbox(mailbox);
        trace_span!("handle", seq = handled).in_scope(|| {
            msg.handle(&mut state, &handle);
        });
        handled += 1;
    }
    debug!(handled, "terminated");
}
