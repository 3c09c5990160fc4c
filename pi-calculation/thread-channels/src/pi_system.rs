use crate::atomic_shutdown_signal::AtomicShutdownSignal;
use crate::channel_mailbox::{mailbox, ChannelMailbox};
use crate::thread_runtime::spawn_actor;
use pi_calculation_core::{
    Coordinator, CoordinatorMessage, Error, FinalAggregate, Mailbox, PiConfig, Result,
    RoundRobinRouter, Sink, SinkActor, Worker, WorkerMessage,
};
use std::thread::JoinHandle;

pub type CoordinatorRef = ChannelMailbox<CoordinatorMessage>;
pub type WorkerRef = ChannelMailbox<WorkerMessage<CoordinatorRef>>;
pub type SinkRef = ChannelMailbox<FinalAggregate>;

type ThreadCoordinator = Coordinator<WorkerRef, SinkRef, CoordinatorRef>;

/// What the sink saw once the calculation finished
#[derive(Debug)]
pub struct Completion<S> {
    pub aggregate: FinalAggregate,
    pub sink: S,
}

/// Coordinator, workers and sink each running on a dedicated OS thread
pub struct ThreadPiSystem<S: Sink> {
    coordinator: CoordinatorRef,
    coordinator_handle: JoinHandle<ThreadCoordinator>,
    sink_handle: JoinHandle<SinkActor<S>>,
    worker_handles: Vec<JoinHandle<Worker<CoordinatorRef>>>,
    shutdown: AtomicShutdownSignal,
}

impl<S: Sink> ThreadPiSystem<S> {
    pub fn start(config: &PiConfig, sink: S) -> Result<Self> {
        config.validate()?;
        let shutdown = AtomicShutdownSignal::new();
        // Stop whatever was spawned before a failure
        Self::spawn_all(config, sink, shutdown.clone()).inspect_err(|_| shutdown.shutdown())
    }

    fn spawn_all(config: &PiConfig, sink: S, shutdown: AtomicShutdownSignal) -> Result<Self> {
        let (sink_ref, sink_rx) = mailbox();
        let sink_handle = spawn_actor(SinkActor::new(sink), sink_rx, shutdown.clone())?;

        let (coordinator_ref, coordinator_rx) = mailbox::<CoordinatorMessage>();

        let mut roster: Vec<WorkerRef> = Vec::with_capacity(config.workers);
        let mut worker_handles = Vec::with_capacity(config.workers);
        for worker_id in 0..config.workers {
            let (worker_ref, worker_rx) = mailbox();
            worker_handles.push(spawn_actor(
                Worker::new(worker_id),
                worker_rx,
                shutdown.clone(),
            )?);
            roster.push(worker_ref);
        }

        let router = RoundRobinRouter::new(roster)?;
        let coordinator = Coordinator::new(config, router, sink_ref, coordinator_ref.clone())?;
        let coordinator_handle = spawn_actor(coordinator, coordinator_rx, shutdown.clone())?;

        tracing::info!(
            workers = config.workers,
            work_units = config.work_units,
            elements_per_unit = config.elements_per_unit,
            "Pi system started on threads"
        );

        Ok(Self {
            coordinator: coordinator_ref,
            coordinator_handle,
            sink_handle,
            worker_handles,
            shutdown,
        })
    }

    pub fn shutdown_signal(&self) -> AtomicShutdownSignal {
        self.shutdown.clone()
    }

    /// Send the single Begin signal
    pub fn begin(&self) -> Result<()> {
        self.coordinator
            .tell(CoordinatorMessage::Begin)
            .map_err(|_| Error::Undeliverable {
                recipient: "coordinator",
            })
    }

    /// Block until the coordinator finishes and every thread has been joined
    pub fn wait(self) -> Result<Completion<S>> {
        let Self {
            coordinator,
            coordinator_handle,
            sink_handle,
            worker_handles,
            shutdown,
        } = self;
        drop(coordinator);

        let outcome = coordinator_handle
            .join()
            .map_err(|_| Error::ActorPanicked {
                actor: "coordinator",
            })
            .and_then(ThreadCoordinator::into_outcome);

        if outcome.is_err() {
            shutdown.shutdown();
        }

        let sink = sink_handle
            .join()
            .map_err(|_| Error::ActorPanicked { actor: "sink" })?;

        for (worker_id, handle) in worker_handles.into_iter().enumerate() {
            if handle.join().is_err() {
                tracing::error!(worker_id, "Worker thread panicked");
            }
        }

        let aggregate = outcome?;
        Ok(Completion {
            aggregate,
            sink: sink.into_inner(),
        })
    }
}
