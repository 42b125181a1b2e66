//! telemetry/snapshot.rs
//!
//! Immutable report produced by each file-level operation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::compression::{compression_ratio_percent, size_increased, Algorithm};
use crate::telemetry::timers::{Stage, StageTimer, StageTimes};

/// Sizes, ratio and stage timings of one operation.
///
/// `bytes_in` is what the codec consumed, `bytes_out` what it produced. For
/// compression a `bytes_out > bytes_in` outcome is a warning, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationReport {
    pub algorithm: Algorithm,
    pub bytes_in: u64,
    pub bytes_out: u64,
    /// `bytes_out / bytes_in * 100`.
    pub ratio_percent: f64,
    /// Archive entries serialized, directory compression only.
    pub entries: Option<u64>,
    pub output_path: Option<String>,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl OperationReport {
    pub fn from_timer(
        algorithm: Algorithm,
        bytes_in: usize,
        bytes_out: usize,
        timer: &StageTimer,
    ) -> Self {
        Self {
            algorithm,
            bytes_in: bytes_in as u64,
            bytes_out: bytes_out as u64,
            ratio_percent: compression_ratio_percent(bytes_in, bytes_out),
            entries: None,
            output_path: None,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_entries(mut self, entries: usize) -> Self {
        self.entries = Some(entries as u64);
        self
    }

    /// True when the output is larger than the input.
    pub fn size_increased(&self) -> bool {
        size_increased(self.bytes_in as usize, self.bytes_out as usize)
    }

    pub fn stage_ms(&self, stage: Stage) -> f64 {
        self.stage_times.get_ms(stage)
    }

    /// Stage timings never exceed the total elapsed time.
    pub fn sanity_check(&self) -> bool {
        self.stage_times.total() <= self.elapsed
    }
}
