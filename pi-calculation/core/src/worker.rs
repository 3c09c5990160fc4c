use crate::actor::{Actor, Flow};
use crate::mailbox::Mailbox;
use crate::messages::{CoordinatorMessage, PartialResult, WorkUnit, WorkerMessage};
use std::marker::PhantomData;

/// One term of the Leibniz series for π: `4 * (-1)^i / (2i + 1)`
pub fn leibniz_term(i: u64) -> f64 {
    4.0 * (1.0 - 2.0 * (i % 2) as f64) / (2 * i + 1) as f64
}

/// Sum the terms of `unit` in increasing index order
pub fn calculate_pi_for(unit: &WorkUnit) -> f64 {
    unit.range().fold(0.0, |acc, i| acc + leibniz_term(i))
}

pub fn compute(unit: &WorkUnit) -> PartialResult {
    PartialResult {
        value: calculate_pi_for(unit),
    }
}

/// Stateless compute actor
///
/// Each work unit is summed and the result is sent to the `reply_to`
/// address carried by the message. The id only labels log lines.
pub struct Worker<R> {
    id: usize,
    _reply: PhantomData<fn() -> R>,
}

impl<R> Worker<R> {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            _reply: PhantomData,
        }
    }
}

impl<R: Mailbox<CoordinatorMessage>> Actor for Worker<R> {
    type Message = WorkerMessage<R>;

    fn name(&self) -> String {
        format!("worker-{}", self.id)
    }

    fn receive(&mut self, msg: Self::Message) -> Flow {
        match msg {
            WorkerMessage::Work { unit, reply_to } => {
                let result = compute(&unit);
                if reply_to.tell(CoordinatorMessage::Result(result)).is_err() {
                    tracing::warn!(
                        worker_id = self.id,
                        start = unit.start,
                        "Dead letter: coordinator stopped before partial result was delivered"
                    );
                }
            }
        }
        Flow::Continue
    }
}
