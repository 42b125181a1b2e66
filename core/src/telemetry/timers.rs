//! telemetry/timers.rs
//! Stage timers for one file-level operation.
//!
//! Records durations for the read, archive, compress/decompress and write
//! stages so callers can see where the time went.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Read,
    Archive,
    Compress,
    Decompress,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Read       => "read",
            Stage::Archive    => "archive",
            Stage::Compress   => "compress",
            Stage::Decompress => "decompress",
            Stage::Write      => "write",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    times: HashMap<Stage, Duration>,
}

impl StageTimes {
    /// Charge `spent` to `stage`; repeated stages accumulate.
    pub fn add(&mut self, stage: Stage, spent: Duration) {
        let slot = self.times.entry(stage).or_default();
        *slot += spent;
    }

    /// Zero for stages that never ran.
    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).map_or(Duration::ZERO, |d| *d)
    }

    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_micros() as f64 / 1_000.0
    }

    pub fn contains(&self, stage: Stage) -> bool {
        self.times.contains_key(&stage)
    }

    /// Sum over every recorded stage.
    pub fn total(&self) -> Duration {
        self.times.values().sum()
    }
}

/// Wall clock for one operation plus its per-stage breakdown.
#[derive(Clone, Debug)]
pub struct StageTimer {
    started: Instant,
    finished: Option<Instant>,
    pub stage_times: StageTimes,
}

impl Default for StageTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl StageTimer {
    pub fn new() -> Self {
        Self { started: Instant::now(), finished: None, stage_times: StageTimes::default() }
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.stage_times.add(stage, started.elapsed());
        out
    }

    /// Freeze `elapsed`. Later calls move the end mark forward.
    pub fn finish(&mut self) {
        self.finished = Some(Instant::now());
    }

    /// Time since `new`, up to `finish` if it was called.
    pub fn elapsed(&self) -> Duration {
        let end = self.finished.unwrap_or_else(Instant::now);
        end.duration_since(self.started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Read, Duration::from_millis(2));
        times.add(Stage::Read, Duration::from_millis(3));
        times.add(Stage::Write, Duration::from_millis(1));

        assert_eq!(times.get(Stage::Read), Duration::from_millis(5));
        assert_eq!(times.get(Stage::Compress), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_millis(6));
        assert!(times.contains(Stage::Write));
    }

    #[test]
    fn timer_records_stage_and_returns_value() {
        let mut timer = StageTimer::new();
        let v = timer.time(Stage::Compress, || 41 + 1);
        timer.finish();

        assert_eq!(v, 42);
        assert!(timer.stage_times.contains(Stage::Compress));
        assert!(timer.stage_times.total() <= timer.elapsed());
    }

    #[test]
    fn stage_display() {
        assert_eq!(Stage::Decompress.to_string(), "decompress");
    }
}
