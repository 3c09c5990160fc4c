/// Trait for abstracting actor mailboxes
/// Different implementations for tokio channels, std channels, etc.
pub trait Mailbox<M>: Clone + Send + 'static {
    /// Enqueue a message without waiting for it to be processed
    /// Fails only when the receiving actor has already stopped
    fn tell(&self, msg: M) -> Result<(), Undelivered<M>>;
}

/// A message whose recipient had stopped before it could be enqueued
#[derive(Debug)]
pub struct Undelivered<M>(pub M);

impl<M> Undelivered<M> {
    pub fn into_inner(self) -> M {
        self.0
    }
}
