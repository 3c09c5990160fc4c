use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A contiguous slice of the Leibniz series handed to a single worker
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkUnit {
    pub start: u64,
    pub elements_per_unit: u64,
}

impl WorkUnit {
    pub fn new(start: u64, elements_per_unit: u64) -> Self {
        Self {
            start,
            elements_per_unit,
        }
    }

    /// Series indices covered by this unit: `[start * e, (start + 1) * e)`
    pub fn range(&self) -> Range<u64> {
        let first = self.start * self.elements_per_unit;
        first..first + self.elements_per_unit
    }
}

/// A worker's sum over exactly one work unit
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PartialResult {
    pub value: f64,
}

/// The approximation handed to the sink once every partial result is in
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FinalAggregate {
    pub approximate_value: f64,
    pub elapsed_millis: u64,
}

/// Message types received by the coordinator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinatorMessage {
    /// Sent once by the driver to start dispatching
    Begin,
    /// Reply from a worker
    Result(PartialResult),
}

/// Message types received by workers
///
/// `R` is the address the partial result is sent back to.
#[derive(Debug)]
pub enum WorkerMessage<R> {
    Work { unit: WorkUnit, reply_to: R },
}
