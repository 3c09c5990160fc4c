use pi_calculation_core::{Actor, Error, Flow, Result, ShutdownSignal, StopReason};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How long a blocked actor waits before re-checking the shutdown signal
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Run `actor` on its own OS thread, draining `rx` one message at a time
pub fn spawn_actor<A, S>(
    mut actor: A,
    rx: Receiver<A::Message>,
    shutdown: S,
) -> Result<JoinHandle<A>>
where
    A: Actor,
    S: ShutdownSignal,
{
    let name = actor.name();
    thread::Builder::new()
        .name(name.clone())
        .spawn(move || {
            let reason = run_loop(&mut actor, &rx, &shutdown);
            tracing::debug!(actor = %actor.name(), ?reason, "Actor stopped");
            actor.stopped(reason);
            actor
        })
        .map_err(|source| Error::Spawn { actor: name, source })
}

fn run_loop<A: Actor, S: ShutdownSignal>(
    actor: &mut A,
    rx: &Receiver<A::Message>,
    shutdown: &S,
) -> StopReason {
    loop {
        if shutdown.is_cancelled() {
            return StopReason::Cancelled;
        }

        let wait = match actor.deadline() {
            Some(deadline) => {
                let now = Instant::now();
                if deadline <= now {
                    return StopReason::DeadlineElapsed;
                }
                (deadline - now).min(POLL_INTERVAL)
            }
            None => POLL_INTERVAL,
        };

        match rx.recv_timeout(wait) {
            Ok(msg) => {
                if actor.receive(msg) == Flow::Stop {
                    return StopReason::Finished;
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return StopReason::MailboxClosed,
        }
    }
}
