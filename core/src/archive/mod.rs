//! archive/mod.rs
//! Private flat archive format for whole directories.
//!
//! Notes:
//! - A directory becomes one byte stream of `(relative path, content)` records
//!   which is then compressed like any other payload.
//! - No directory markers: empty directories are lost.
//! - No checksums: integrity is left to the compression frame.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
