use crate::actor::{Actor, Flow};
use crate::messages::FinalAggregate;

/// Terminal consumer of the final aggregate
pub trait Sink: Send + 'static {
    fn on_final_aggregate(&mut self, aggregate: &FinalAggregate);
}

pub fn render(aggregate: &FinalAggregate) -> String {
    format!(
        "\n\tPi approximation: \t\t{}\n\tCalculation time: \t{}",
        aggregate.approximate_value, aggregate.elapsed_millis
    )
}

/// Prints the aggregate to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn on_final_aggregate(&mut self, aggregate: &FinalAggregate) {
        println!("{}", render(aggregate));
    }
}

/// Actor wrapper that hands its single message to a `Sink` and stops
pub struct SinkActor<S> {
    sink: S,
    received: Option<FinalAggregate>,
}

impl<S: Sink> SinkActor<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            received: None,
        }
    }

    pub fn received(&self) -> Option<&FinalAggregate> {
        self.received.as_ref()
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: Sink> Actor for SinkActor<S> {
    type Message = FinalAggregate;

    fn name(&self) -> String {
        "sink".to_string()
    }

    fn receive(&mut self, aggregate: FinalAggregate) -> Flow {
        self.sink.on_final_aggregate(&aggregate);
        self.received = Some(aggregate);
        Flow::Stop
    }
}
