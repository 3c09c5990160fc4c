//! OS thread runtime for the pi calculation actors

pub mod atomic_shutdown_signal;
pub mod channel_mailbox;
pub mod pi_system;
pub mod thread_runtime;

pub use atomic_shutdown_signal::AtomicShutdownSignal;
pub use channel_mailbox::{mailbox, ChannelMailbox};
pub use pi_system::{Completion, CoordinatorRef, SinkRef, ThreadPiSystem, WorkerRef};
pub use thread_runtime::spawn_actor;
