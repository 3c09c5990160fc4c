//! Tokio task runtime for the pi calculation actors

pub mod channel_mailbox;
pub mod pi_system;
pub mod tokio_runtime;

pub use channel_mailbox::{mailbox, ChannelMailbox};
pub use pi_system::{Completion, CoordinatorRef, PiSystem, SinkRef, WorkerRef};
pub use tokio_runtime::spawn_actor;
