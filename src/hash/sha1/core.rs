//! SHA-1 engine
//!
//! `Sha1` is a stateful accumulator. Bytes are packed big-endian into 32-bit
//! words, words are committed into an 80-word schedule buffer, and every
//! 16th committed word triggers one compression.
//!
//! The engine has a single resting state, "accumulating". [`Sha1::finalize`]
//! pads the stream, reads the registers and returns the engine to the empty
//! accumulating state in the same call, so one instance can hash any number
//! of consecutive streams.
//!
//! To read a digest without ending the stream, use
//! [`Sha1Builder`](super::Sha1Builder), which finalizes a copy.

use log::trace;

use super::H160_INIT;
use super::computations::all_rounds;
use super::digest::Sha1Digest;
use super::source::{ByteSource, TextByteSource, TextEncoding};

/// Incremental SHA-1 accumulator.
///
/// Cloning copies the whole state by value, including the schedule buffer
/// and the partially assembled word.
#[derive(Clone, Debug)]
pub struct Sha1 {
    /// Running hash H0..H4 over every complete block.
    registers: [u32; 5],
    /// Words `0..16` hold the current block, `16..80` the expansion.
    block: [u32; 80],
    /// Words committed since the last reset.
    block_pos: u64,
    /// Bytes not yet forming a full word, packed from the top.
    pending: u32,
    total_bytes: u64,
    text_encoding: TextEncoding,
}

impl Sha1 {
    /// Creates an empty engine using [`TextEncoding::Legacy`] for text input.
    pub fn new() -> Self {
        Self::with_text_encoding(TextEncoding::default())
    }

    /// Creates an empty engine with the given text encoding.
    ///
    /// The encoding only affects [`Sha1::update_text`] and survives
    /// finalization and resets.
    pub fn with_text_encoding(text_encoding: TextEncoding) -> Self {
        Self {
            registers: H160_INIT,
            block: [0u32; 80],
            block_pos: 0,
            pending: 0,
            total_bytes: 0,
            text_encoding,
        }
    }

    /// Computes the digest of `input` in one call.
    pub fn digest(input: &[u8]) -> Sha1Digest {
        let mut engine = Self::new();
        engine.update(input);
        engine.finalize()
    }

    pub fn text_encoding(&self) -> TextEncoding {
        self.text_encoding
    }

    /// Bytes consumed since the last reset.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Current chaining value H0..H4.
    ///
    /// This covers complete blocks only and is not the digest of the bytes
    /// consumed so far.
    pub fn chaining_value(&self) -> [u32; 5] {
        self.registers
    }

    /// Absorbs one byte.
    pub fn update_byte(&mut self, byte: u8) -> &mut Self {
        let shift = 24 - 8 * (self.total_bytes % 4) as u32;
        self.pending |= u32::from(byte) << shift;
        self.total_bytes += 1;

        if self.total_bytes % 4 == 0 {
            let word = self.pending;
            self.pending = 0;
            self.commit(word);
        }

        self
    }

    /// Absorbs the low 8 bits of `value`; the upper bits are ignored.
    pub fn update_masked(&mut self, value: u32) -> &mut Self {
        self.update_byte((value & 0xFF) as u8)
    }

    /// Absorbs a byte slice.
    ///
    /// Equivalent to calling [`Sha1::update_byte`] for every byte; whole
    /// words are committed directly once the stream is word-aligned.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        let mut rest = data;

        while self.total_bytes % 4 != 0 {
            let Some((&byte, tail)) = rest.split_first() else {
                return self;
            };
            self.update_byte(byte);
            rest = tail;
        }

        let mut words = rest.chunks_exact(4);
        for chunk in &mut words {
            self.total_bytes += 4;
            self.commit(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        for &byte in words.remainder() {
            self.update_byte(byte);
        }

        self
    }

    /// Pulls bytes from `source` until it reports end of stream.
    ///
    /// Does not return if the source never ends.
    pub fn update_source<S: ByteSource>(&mut self, mut source: S) -> &mut Self {
        while let Some(byte) = source.next_byte() {
            self.update_byte(byte);
        }

        self
    }

    /// Absorbs `text`, encoded to bytes according to the engine's
    /// [`TextEncoding`].
    pub fn update_text(&mut self, text: &str) -> &mut Self {
        let source = TextByteSource::from_text(text).with_encoding(self.text_encoding);
        self.update_source(source)
    }

    /// Pads the stream, returns its digest and resets the engine.
    ///
    /// Finalizing an engine that has consumed nothing yields the digest of
    /// the empty input.
    pub fn finalize(&mut self) -> Sha1Digest {
        self.pad();

        let digest = Sha1Digest::from(self.registers);
        trace!("sha1: finalized {} bytes", self.total_bytes);

        self.clear();
        digest
    }

    /// Discards everything consumed so far.
    pub fn reset(&mut self) {
        trace!("sha1: reset after {} bytes", self.total_bytes);
        self.clear();
    }

    fn clear(&mut self) {
        self.registers = H160_INIT;
        self.block = [0u32; 80];
        self.block_pos = 0;
        self.pending = 0;
        self.total_bytes = 0;
    }

    /// Appends the `1` bit, zero words up to word 14 of a block, then the
    /// 64-bit message length in bits. The last word completes a block.
    fn pad(&mut self) {
        let bit_len = self.total_bytes.wrapping_mul(8);
        let shift = 8 * (self.total_bytes % 4) as u32;

        self.commit(self.pending | (0x8000_0000 >> shift));

        while self.block_pos % 16 != 14 {
            self.commit(0);
        }

        self.commit((bit_len >> 32) as u32);
        self.commit(bit_len as u32);
    }

    #[inline(always)]
    fn commit(&mut self, word: u32) {
        self.block[(self.block_pos % 16) as usize] = word;
        self.block_pos += 1;

        if self.block_pos % 16 == 0 {
            all_rounds(&mut self.registers, &mut self.block);
        }
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SHA-1 digest of `input`.
///
/// Shorthand for [`Sha1::digest`].
pub fn sha1(input: &[u8]) -> Sha1Digest {
    Sha1::digest(input)
}
