use pi_calculation_core::{Actor, Flow, StopReason};
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Run `actor` as a tokio task that drains `rx` one message at a time
///
/// The task ends when the actor stops itself, its deadline passes, the token
/// is cancelled or every sender is dropped. The actor is handed back through
/// the join handle so callers can read its final state.
pub fn spawn_actor<A: Actor>(
    mut actor: A,
    mut rx: mpsc::UnboundedReceiver<A::Message>,
    token: CancellationToken,
) -> JoinHandle<A> {
    tokio::spawn(async move {
        let reason = loop {
            let deadline = actor.deadline();
            tokio::select! {
                biased;
                _ = token.cancelled() => break StopReason::Cancelled,
                _ = sleep_until(deadline) => break StopReason::DeadlineElapsed,
                msg = rx.recv() => match msg {
                    Some(msg) => {
                        if actor.receive(msg) == Flow::Stop {
                            break StopReason::Finished;
                        }
                    }
                    None => break StopReason::MailboxClosed,
                },
            }
        };
        tracing::debug!(actor = %actor.name(), ?reason, "Actor stopped");
        actor.stopped(reason);
        actor
    })
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}
