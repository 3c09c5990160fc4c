use std::time::Instant;

/// What an actor loop does after a message has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Why an actor loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The actor returned `Flow::Stop`
    Finished,
    /// The actor's deadline passed with no message to handle
    DeadlineElapsed,
    /// The runtime was asked to shut down
    Cancelled,
    /// Every sender of the mailbox was dropped
    MailboxClosed,
}

/// Trait for a unit of isolated, sequential message handling
///
/// Runtimes own the loop: they pull one message at a time from the actor's
/// private mailbox and hand it to `receive`. State inside an actor is only
/// ever touched from that loop.
pub trait Actor: Send + 'static {
    type Message: Send + 'static;

    /// Name used in logs and thread names
    fn name(&self) -> String;

    /// Handle one message to completion
    fn receive(&mut self, msg: Self::Message) -> Flow;

    /// Point in time after which the loop stops with `StopReason::DeadlineElapsed`
    fn deadline(&self) -> Option<Instant> {
        None
    }

    /// Called exactly once, after the last message
    fn stopped(&mut self, _reason: StopReason) {}
}
