use crate::actor::{Actor, Flow, StopReason};
use crate::config::PiConfig;
use crate::error::{Error, Result};
use crate::mailbox::Mailbox;
use crate::messages::{CoordinatorMessage, FinalAggregate, PartialResult, WorkUnit, WorkerMessage};
use crate::router::RoundRobinRouter;
use std::time::{Duration, Instant};

/// Lifecycle of the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Roster built, waiting for `Begin`
    Idle,
    /// Every work unit dispatched, summing partial results
    Collecting,
    /// Final aggregate sent to the sink
    Terminated,
    /// Stopped before every partial result arrived
    Failed,
}

/// Counters owned by the coordinator's message loop
#[derive(Debug, Clone, Copy)]
pub struct CoordinatorState {
    pub accumulated_value: f64,
    pub results_received: u64,
    pub started_at: Instant,
}

impl CoordinatorState {
    fn new(started_at: Instant) -> Self {
        Self {
            accumulated_value: 0.0,
            results_received: 0,
            started_at,
        }
    }
}

/// Coordinator partitions the series, dispatches work units and sums the replies
///
/// Generic over the mailbox types so that any runtime can host it:
/// - `W`: worker mailboxes held by the round-robin router
/// - `S`: the sink receiving the final aggregate
/// - `R`: the coordinator's own mailbox, handed to workers as reply address
pub struct Coordinator<W, S, R> {
    router: RoundRobinRouter<W>,
    sink: S,
    self_ref: R,
    work_units: u64,
    elements_per_unit: u64,
    collect_timeout: Option<Duration>,
    phase: Phase,
    state: CoordinatorState,
    outcome: Option<Result<FinalAggregate>>,
}

impl<W, S, R> Coordinator<W, S, R>
where
    W: Mailbox<WorkerMessage<R>>,
    S: Mailbox<FinalAggregate>,
    R: Mailbox<CoordinatorMessage>,
{
    pub fn new(
        config: &PiConfig,
        router: RoundRobinRouter<W>,
        sink: S,
        self_ref: R,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            router,
            sink,
            self_ref,
            work_units: config.work_units,
            elements_per_unit: config.elements_per_unit,
            collect_timeout: config.collect_timeout(),
            phase: Phase::Idle,
            state: CoordinatorState::new(Instant::now()),
            outcome: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &CoordinatorState {
        &self.state
    }

    pub fn dispatched(&self) -> usize {
        self.router.dispatched()
    }

    /// The aggregate that was sent to the sink, or why none was
    pub fn into_outcome(self) -> Result<FinalAggregate> {
        match self.outcome {
            Some(outcome) => outcome,
            None => Err(Error::Cancelled {
                received: self.state.results_received,
                expected: self.work_units,
            }),
        }
    }

    fn dispatch_all(&mut self) {
        // Dispatch time counts towards the reported elapsed time
        self.state = CoordinatorState::new(Instant::now());

        for start in 0..self.work_units {
            let msg = WorkerMessage::Work {
                unit: WorkUnit::new(start, self.elements_per_unit),
                reply_to: self.self_ref.clone(),
            };
            if let Err(dead) = self.router.route(msg) {
                tracing::warn!(
                    worker_id = dead.target,
                    start,
                    "Dead letter: worker mailbox closed, work unit dropped"
                );
            }
        }

        tracing::debug!(
            dispatched = self.work_units,
            workers = self.router.len(),
            "All work units dispatched"
        );
        self.phase = Phase::Collecting;
    }

    fn collect(&mut self, result: PartialResult) -> Flow {
        self.state.accumulated_value += result.value;
        self.state.results_received += 1;

        if self.state.results_received < self.work_units {
            return Flow::Continue;
        }

        let elapsed = self.state.started_at.elapsed();
        let aggregate = FinalAggregate {
            approximate_value: self.state.accumulated_value,
            elapsed_millis: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        };
        tracing::info!(
            received = self.state.results_received,
            value = aggregate.approximate_value,
            elapsed_ms = aggregate.elapsed_millis,
            "All partial results collected"
        );

        if self.sink.tell(aggregate).is_err() {
            tracing::warn!("Dead letter: sink stopped before the final aggregate was delivered");
        }
        self.phase = Phase::Terminated;
        self.outcome = Some(Ok(aggregate));
        Flow::Stop
    }
}

impl<W, S, R> Actor for Coordinator<W, S, R>
where
    W: Mailbox<WorkerMessage<R>>,
    S: Mailbox<FinalAggregate>,
    R: Mailbox<CoordinatorMessage>,
{
    type Message = CoordinatorMessage;

    fn name(&self) -> String {
        "coordinator".to_string()
    }

    fn receive(&mut self, msg: CoordinatorMessage) -> Flow {
        match (self.phase, msg) {
            (Phase::Idle, CoordinatorMessage::Begin) => {
                self.dispatch_all();
                Flow::Continue
            }
            (Phase::Collecting, CoordinatorMessage::Result(result)) => self.collect(result),
            (phase, msg) => {
                tracing::warn!(?phase, ?msg, "Unhandled message");
                Flow::Continue
            }
        }
    }

    fn deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Collecting => self
                .collect_timeout
                .map(|timeout| self.state.started_at + timeout),
            _ => None,
        }
    }

    fn stopped(&mut self, reason: StopReason) {
        if self.outcome.is_some() {
            return;
        }

        let received = self.state.results_received;
        let expected = self.work_units;
        self.phase = Phase::Failed;
        self.outcome = Some(Err(match reason {
            StopReason::DeadlineElapsed => {
                tracing::error!(received, expected, "Collect deadline elapsed");
                Error::CollectTimeout { received, expected }
            }
            StopReason::Finished | StopReason::Cancelled | StopReason::MailboxClosed => {
                tracing::warn!(
                    received,
                    expected,
                    ?reason,
                    "Coordinator stopped before completion"
                );
                Error::Cancelled { received, expected }
            }
        }));
    }
}
