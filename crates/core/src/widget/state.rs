use medscan_actor::{Actor, Delayed, Message};
use medscan_chat_model::Message as ChatMessage;

use super::WidgetState;
use crate::greeting::choose_greeting;

/// A reply that has been computed but not shown yet.
pub(crate) struct PendingReply {
    seq: u64,
    message: ChatMessage,
    due: bool,
    timer: Delayed,
}

impl WidgetState {
    fn append(&mut self, msg: ChatMessage) {
        if let Some(on_message) = &self.on_message {
            on_message(&msg);
        }
        self.transcript.push(msg);
    }

    fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "toggled");
        if self.open && self.transcript.is_empty() {
            let greeting =
                choose_greeting(&self.config.greetings, &mut rand::thread_rng())
                    .to_owned();
            self.append(ChatMessage::bot(greeting));
        }
    }

    fn submit(&mut self, text: &str, handle: &Actor<Self>) {
        let text = text.trim();
        if text.is_empty() {
            trace!("ignoring blank input");
            return;
        }

        self.append(ChatMessage::user(text));
        self.draft.clear();

        let reply = self.responder.respond(text);
        if let Some(target) = reply.navigation {
            info!(href = target.href(), "navigating");
            self.navigator.navigate(target);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        let delay = reply.typing_delay.unwrap_or(self.config.typing_delay);
        trace!(seq, ?delay, "scheduling reply");
        let timer = handle.send_after(delay, ReplyDue(seq));
        self.pending_replies.push_back(PendingReply {
            seq,
            message: ChatMessage::bot(reply.text),
            due: false,
            timer,
        });
    }

    fn reply_due(&mut self, seq: u64) {
        let Some(pending) =
            self.pending_replies.iter_mut().find(|p| p.seq == seq)
        else {
            // Discarded by a reset after its timer had already fired.
            trace!(seq, "stale reply");
            return;
        };
        pending.due = true;

        // Replies are released strictly in submission order, so a quick
        // reply waits for slower ones submitted before it.
        let mut released = false;
        while self.pending_replies.front().is_some_and(|p| p.due) {
            let Some(pending) = self.pending_replies.pop_front() else {
                break;
            };
            self.append(pending.message);
            released = true;
        }

        if released && self.pending_replies.is_empty() {
            if let Some(on_idle) = &self.on_idle {
                on_idle();
            }
        }
    }

    fn reset(&mut self) {
        for pending in self.pending_replies.drain(..) {
            pending.timer.cancel();
        }
        self.transcript.clear();
        self.draft.clear();
        self.open = false;
        debug!("reset");
    }
}

#[derive(Debug)]
pub struct Toggle;

impl Message<WidgetState> for Toggle {
    #[inline]
    fn handle(self, state: &mut WidgetState, _handle: &Actor<WidgetState>) {
        state.toggle();
    }
}

#[derive(Debug)]
pub struct Submit(pub String);

impl Message<WidgetState> for Submit {
    #[inline]
    fn handle(self, state: &mut WidgetState, handle: &Actor<WidgetState>) {
        state.submit(&self.0, handle);
    }
}

#[derive(Debug)]
pub struct SetDraft(pub String);

impl Message<WidgetState> for SetDraft {
    #[inline]
    fn handle(self, state: &mut WidgetState, _handle: &Actor<WidgetState>) {
        state.draft = self.0;
    }
}

#[derive(Debug)]
pub struct SubmitDraft;

impl Message<WidgetState> for SubmitDraft {
    fn handle(self, state: &mut WidgetState, handle: &Actor<WidgetState>) {
        if state.draft.trim().is_empty() {
            return;
        }
        let draft = std::mem::take(&mut state.draft);
        state.submit(&draft, handle);
    }
}

#[derive(Debug)]
pub struct Reset;

impl Message<WidgetState> for Reset {
    #[inline]
    fn handle(self, state: &mut WidgetState, _handle: &Actor<WidgetState>) {
        state.reset();
    }
}

#[derive(Debug)]
struct ReplyDue(u64);

impl Message<WidgetState> for ReplyDue {
    #[inline]
    fn handle(self, state: &mut WidgetState, _handle: &Actor<WidgetState>) {
        state.reply_due(self.0);
    }
}

#[cfg(test)]
mod tests {
    use medscan_chat_model::Sender;

    use super::*;
    use crate::ChatWidgetBuilder;

    fn state_and_handle() -> (WidgetState, Actor<WidgetState>) {
        let state = WidgetState::new(ChatWidgetBuilder::new());
        // Timers post to this handle; the tests drive `reply_due` by hand.
        let handle =
            Actor::spawn(WidgetState::new(ChatWidgetBuilder::new()), None);
        (state, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_due_after_reset() {
        let (mut state, handle) = state_and_handle();

        state.submit("What is MedScan.AI?", &handle);
        assert_eq!(state.pending_replies.len(), 1);

        // The timer already fired and its message was queued behind the
        // reset.
        state.reset();
        state.reply_due(1);

        assert!(state.transcript.is_empty());
        assert!(state.pending_replies.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_reply_does_not_release_newer_one() {
        let (mut state, handle) = state_and_handle();

        state.submit("hello", &handle);
        state.reset();
        state.submit("pricing", &handle);
        state.reply_due(1);

        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript[0].sender(), Sender::User);
        assert_eq!(state.pending_replies.len(), 1);

        state.reply_due(2);
        assert_eq!(state.transcript.len(), 2);
        assert!(state.transcript[1].is_bot());
        assert!(state.pending_replies.is_empty());
    }
}
