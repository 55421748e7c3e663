//! Incremental SHA-1 for Nebula
//!
//! This crate provides a stateful SHA-1 accumulator that can be fed one
//! byte, one slice or one byte source at a time, and that can report the
//! digest of the stream so far without ending it.
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! implementation is explicit about byte packing, padding and reset
//! behavior so that digests stored by earlier Nebula components can be
//! reproduced bit for bit.
//!
//! # Module overview
//!
//! - `hash::sha1`
//!   The SHA-1 engine (`Sha1`), the digest value (`Sha1Digest`), the
//!   snapshot builder (`Sha1Builder`) and the pull-based byte sources used
//!   to feed text and buffers into the engine.
//!
//! # Example
//!
//! ```rust
//! use cryptal_sha1::hash::sha1::Sha1Builder;
//!
//! let mut builder = Sha1Builder::new();
//! builder.update(b"ab");
//! let prefix = builder.build();
//!
//! builder.update(b"c");
//! assert_eq!(builder.build().to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! assert_ne!(prefix, builder.build());
//! ```
//!
//! # Design goals
//!
//! - No heap allocations in the engine
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//!
//! SHA-1 is not collision resistant. This crate exists for content
//! addressing and compatibility with existing digests, not for new
//! security-critical designs.

pub mod hash;

pub use hash::sha1::{
    ByteSource, DigestParseError, Sha1, Sha1Builder, Sha1Digest, SliceByteSource, TextByteSource,
    TextEncoding,
};
