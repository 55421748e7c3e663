//! SHA-1 (FIPS 180-4) with incremental updates and non-destructive snapshots.
//!
//! The module is split the same way as the other hash families:
//!
//! - `computations`: round functions and the 80-round compression
//! - `core`: the stateful engine (`Sha1`), padding and finalization
//! - `source`: pull-based byte sources, including lazy text encoding
//! - `digest`: the immutable 160-bit result and its views
//! - `snapshot`: `Sha1Builder`, which reads intermediate digests without
//!   ending the stream

pub mod computations;
pub mod core;
pub mod digest;
pub mod snapshot;
pub mod source;

pub use self::core::Sha1;
pub use self::digest::{DigestParseError, Sha1Digest};
pub use self::snapshot::Sha1Builder;
pub use self::source::{ByteSource, SliceByteSource, TextByteSource, TextEncoding};

/// Initial hash value H0..H4.
pub const H160_INIT: [u32; 5] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476, 0xC3D2_E1F0];

/// Additive constant for each 20-round stage.
pub const K160: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];
