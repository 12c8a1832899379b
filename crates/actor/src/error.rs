use thiserror::Error;

/// Returned whenever a message is sent to, or a query is made against, an
/// actor that has already stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error)]
#[error("the actor has stopped")]
pub struct ActorDeadError;
