use crate::channel_mailbox::{mailbox, ChannelMailbox};
use crate::tokio_runtime::spawn_actor;
use pi_calculation_core::{
    Coordinator, CoordinatorMessage, Error, FinalAggregate, Mailbox, PiConfig, Result,
    RoundRobinRouter, Sink, SinkActor, Worker, WorkerMessage,
};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub type CoordinatorRef = ChannelMailbox<CoordinatorMessage>;
pub type WorkerRef = ChannelMailbox<WorkerMessage<CoordinatorRef>>;
pub type SinkRef = ChannelMailbox<FinalAggregate>;

type TaskCoordinator = Coordinator<WorkerRef, SinkRef, CoordinatorRef>;

/// What the sink saw once the calculation finished
#[derive(Debug)]
pub struct Completion<S> {
    pub aggregate: FinalAggregate,
    pub sink: S,
}

/// Coordinator, workers and sink running as tokio tasks
pub struct PiSystem<S: Sink> {
    coordinator: CoordinatorRef,
    coordinator_handle: JoinHandle<TaskCoordinator>,
    sink_handle: JoinHandle<SinkActor<S>>,
    worker_handles: Vec<JoinHandle<Worker<CoordinatorRef>>>,
    cancellation_token: CancellationToken,
}

impl<S: Sink> PiSystem<S> {
    /// Spawn the sink, the worker roster and the coordinator
    /// Must be called from within a tokio runtime
    pub fn start(config: &PiConfig, sink: S) -> Result<Self> {
        config.validate()?;
        let cancellation_token = CancellationToken::new();

        let (sink_ref, sink_rx) = mailbox();
        let sink_handle = spawn_actor(SinkActor::new(sink), sink_rx, cancellation_token.clone());

        let (coordinator_ref, coordinator_rx) = mailbox::<CoordinatorMessage>();

        let mut roster: Vec<WorkerRef> = Vec::with_capacity(config.workers);
        let mut worker_handles = Vec::with_capacity(config.workers);
        for worker_id in 0..config.workers {
            let (worker_ref, worker_rx) = mailbox();
            worker_handles.push(spawn_actor(
                Worker::new(worker_id),
                worker_rx,
                cancellation_token.clone(),
            ));
            roster.push(worker_ref);
        }

        let router = RoundRobinRouter::new(roster)?;
        let coordinator = Coordinator::new(config, router, sink_ref, coordinator_ref.clone())?;
        let coordinator_handle =
            spawn_actor(coordinator, coordinator_rx, cancellation_token.clone());

        tracing::info!(
            workers = config.workers,
            work_units = config.work_units,
            elements_per_unit = config.elements_per_unit,
            "Pi system started"
        );

        Ok(Self {
            coordinator: coordinator_ref,
            coordinator_handle,
            sink_handle,
            worker_handles,
            cancellation_token,
        })
    }

    /// Returns a clone of the cancellation token for external control
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Send the single Begin signal
    pub fn begin(&self) -> Result<()> {
        self.coordinator
            .tell(CoordinatorMessage::Begin)
            .map_err(|_| Error::Undeliverable {
                recipient: "coordinator",
            })
    }

    /// Wait for the coordinator to finish and for every task to wind down
    pub async fn wait(self) -> Result<Completion<S>> {
        let Self {
            coordinator,
            coordinator_handle,
            sink_handle,
            worker_handles,
            cancellation_token,
        } = self;
        drop(coordinator);

        let outcome = coordinator_handle
            .await
            .map_err(|_| Error::ActorPanicked {
                actor: "coordinator",
            })
            .and_then(TaskCoordinator::into_outcome);

        // Workers still draining stale work would only waste time now
        if outcome.is_err() {
            cancellation_token.cancel();
        }

        let sink = sink_handle
            .await
            .map_err(|_| Error::ActorPanicked { actor: "sink" })?;

        for (worker_id, handle) in worker_handles.into_iter().enumerate() {
            if let Err(e) = handle.await {
                tracing::error!(worker_id, error = %e, "Worker task failed");
            }
        }

        let aggregate = outcome?;
        tracing::debug!(value = aggregate.approximate_value, "Pi system finished");
        Ok(Completion {
            aggregate,
            sink: sink.into_inner(),
        })
    }
}
