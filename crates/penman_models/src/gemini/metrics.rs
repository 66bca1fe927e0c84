//! Generation counters, recorded through the global meter provider.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};
use penman_core::GenerationResult;
use penman_error::GenerationError;
use std::time::Duration;

#[derive(Clone)]
pub(crate) struct GenerationMetrics {
    generations: Counter<u64>,
    duration: Histogram<f64>,
}

impl GenerationMetrics {
    pub(crate) fn new() -> Self {
        let meter = global::meter("penman");
        Self {
            generations: meter
                .u64_counter("penman.generations")
                .with_description("Generation attempts by outcome")
                .build(),
            duration: meter
                .f64_histogram("penman.generation.duration")
                .with_description("Generation round-trip time")
                .with_unit("s")
                .build(),
        }
    }

    pub(crate) fn record(
        &self,
        model: &str,
        outcome: &Result<GenerationResult, GenerationError>,
        elapsed: Duration,
    ) {
        let label = match outcome {
            Ok(_) => "success",
            Err(e) => e.kind().label(),
        };
        let attributes = [
            KeyValue::new("model", model.to_string()),
            KeyValue::new("outcome", label),
        ];
        self.generations.add(1, &attributes);
        self.duration.record(elapsed.as_secs_f64(), &attributes);
    }
}
