use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the pi calculation actors and their configuration
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{recipient} mailbox is closed")]
    Undeliverable { recipient: &'static str },

    #[error("collect deadline elapsed after {received} of {expected} partial results")]
    CollectTimeout { received: u64, expected: u64 },

    #[error("calculation cancelled after {received} of {expected} partial results")]
    Cancelled { received: u64, expected: u64 },

    #[error("{actor} actor panicked")]
    ActorPanicked { actor: &'static str },

    #[error("failed to spawn {actor} actor: {source}")]
    Spawn {
        actor: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
