use crate::mailbox::{Mailbox, Undelivered};
use std::sync::{Arc, Mutex};

/// Mailbox that records everything told to it
pub(crate) struct RecordingMailbox<M> {
    messages: Arc<Mutex<Vec<M>>>,
    closed: bool,
}

impl<M> RecordingMailbox<M> {
    pub(crate) fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            closed: false,
        }
    }

    /// A mailbox whose actor has already stopped
    pub(crate) fn closed() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            closed: true,
        }
    }

    pub(crate) fn take(&self) -> Vec<M> {
        std::mem::take(&mut *self.messages.lock().unwrap())
    }

    pub(crate) fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl<M> Clone for RecordingMailbox<M> {
    fn clone(&self) -> Self {
        Self {
            messages: Arc::clone(&self.messages),
            closed: self.closed,
        }
    }
}

impl<M: Send + 'static> Mailbox<M> for RecordingMailbox<M> {
    fn tell(&self, msg: M) -> Result<(), Undelivered<M>> {
        if self.closed {
            return Err(Undelivered(msg));
        }
        self.messages.lock().unwrap().push(msg);
        Ok(())
    }
}
