use pi_calculation_core::ShutdownSignal;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Thread-based shutdown signal using atomic flag
#[derive(Clone, Default)]
pub struct AtomicShutdownSignal {
    flag: Arc<AtomicBool>,
}

impl AtomicShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

impl ShutdownSignal for AtomicShutdownSignal {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
