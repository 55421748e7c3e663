//! Non-destructive digest snapshots
//!
//! `Sha1Builder` wraps one live [`Sha1`] engine. Updates are forwarded to it
//! unchanged. [`Sha1Builder::build`] copies the engine by value, finalizes
//! the copy and returns that digest, so the stream keeps going afterwards.
//!
//! This makes checkpoint digests over growing prefixes cheap: each `build()`
//! costs at most two compressions, regardless of how much was hashed before.

use log::trace;

use super::core::Sha1;
use super::digest::Sha1Digest;
use super::source::{ByteSource, TextEncoding};

/// Accumulates a stream and produces digests of its current prefix.
#[derive(Clone, Debug, Default)]
pub struct Sha1Builder {
    engine: Sha1,
}

impl Sha1Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_encoding(text_encoding: TextEncoding) -> Self {
        Self {
            engine: Sha1::with_text_encoding(text_encoding),
        }
    }

    pub fn update_byte(&mut self, byte: u8) -> &mut Self {
        self.engine.update_byte(byte);
        self
    }

    pub fn update_masked(&mut self, value: u32) -> &mut Self {
        self.engine.update_masked(value);
        self
    }

    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.engine.update(data);
        self
    }

    pub fn update_source<S: ByteSource>(&mut self, source: S) -> &mut Self {
        self.engine.update_source(source);
        self
    }

    pub fn update_text(&mut self, text: &str) -> &mut Self {
        self.engine.update_text(text);
        self
    }

    /// Returns the digest of every byte seen so far.
    ///
    /// The wrapped engine is not modified.
    pub fn build(&self) -> Sha1Digest {
        let mut fork = self.engine.clone();
        trace!("sha1: snapshot at {} bytes", fork.total_bytes());

        fork.finalize()
    }

    /// Bytes seen so far.
    pub fn total_bytes(&self) -> u64 {
        self.engine.total_bytes()
    }

    /// Current chaining value of the wrapped engine. See
    /// [`Sha1::chaining_value`].
    pub fn chaining_value(&self) -> [u32; 5] {
        self.engine.chaining_value()
    }

    /// Returns the wrapped engine, e.g. to finish the stream with
    /// [`Sha1::finalize`].
    pub fn into_inner(self) -> Sha1 {
        self.engine
    }
}

impl From<Sha1> for Sha1Builder {
    fn from(engine: Sha1) -> Self {
        Self { engine }
    }
}
