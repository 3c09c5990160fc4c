//! Core of the parallel pi calculation
//!
//! A coordinator splits the Leibniz series into work units, routes them
//! round-robin over a fixed pool of stateless workers, sums the partial
//! results that come back and hands the final aggregate to a sink. Every
//! participant is an `Actor` that owns its state and is only reached through
//! its `Mailbox`; runtime crates supply the mailboxes and message loops.

mod actor;
pub use actor::{Actor, Flow, StopReason};

mod cli;
pub use cli::Cli;

mod config;
pub use config::PiConfig;

mod coordinator;
pub use coordinator::{Coordinator, CoordinatorState, Phase};

mod error;
pub use error::{Error, Result};

mod mailbox;
pub use mailbox::{Mailbox, Undelivered};

mod messages;
pub use messages::{CoordinatorMessage, FinalAggregate, PartialResult, WorkUnit, WorkerMessage};

mod router;
pub use router::{DeadLetter, RoundRobinRouter};

pub mod shutdown_signal;
pub use shutdown_signal::ShutdownSignal;

mod sink;
pub use sink::{render, ConsoleSink, Sink, SinkActor};

pub mod worker;
pub use worker::Worker;

#[cfg(test)]
mod testing;
