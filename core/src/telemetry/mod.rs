//! telemetry/mod.rs
//! Stage timers and the immutable per-operation report.
//!
//! Notes:
//! - Compression ratio is `bytes_out / bytes_in`, reported as a percentage.
//! - Reports are serde-serializable so hosts can forward them as JSON.

pub mod timers;
pub mod snapshot;

pub use timers::*;
pub use snapshot::*;
