use pi_calculation_core::{Mailbox, Undelivered};
use std::sync::mpsc;

/// Sending half of an actor's std mailbox
pub struct ChannelMailbox<M> {
    tx: mpsc::Sender<M>,
}

impl<M> Clone for ChannelMailbox<M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<M: Send + 'static> Mailbox<M> for ChannelMailbox<M> {
    fn tell(&self, msg: M) -> Result<(), Undelivered<M>> {
        self.tx.send(msg).map_err(|e| Undelivered(e.0))
    }
}

pub fn mailbox<M>() -> (ChannelMailbox<M>, mpsc::Receiver<M>) {
    let (tx, rx) = mpsc::channel();
    (ChannelMailbox { tx }, rx)
}
