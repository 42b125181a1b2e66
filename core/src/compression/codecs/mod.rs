//! compression/codecs/mod.rs
//! One unit struct per algorithm, each implementing `Codec`.

pub mod brotli;
pub mod lz4;
pub mod snappy;
pub mod zstd;

pub use self::brotli::*;
pub use self::lz4::*;
pub use self::snappy::*;
pub use self::zstd::*;
