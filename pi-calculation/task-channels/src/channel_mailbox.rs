use pi_calculation_core::{Mailbox, Undelivered};
use tokio::sync::mpsc;

/// Sending half of an actor's unbounded tokio mailbox
pub struct ChannelMailbox<M> {
    tx: mpsc::UnboundedSender<M>,
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

/// Create a mailbox and the receiver its actor loop reads from
pub fn mailbox<M>() -> (ChannelMailbox<M>, mpsc::UnboundedReceiver<M>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelMailbox { tx }, rx)
}
