//! SHA-1 digest value
//!
//! `Sha1Digest` is the immutable 160-bit result of a finalized stream. It is
//! stored as the five output registers H0..H4 and can be viewed as:
//! - 20 bytes, big-endian within each register
//! - the five raw 32-bit words
//! - 40 lowercase hexadecimal characters
//!
//! The hex view round-trips through [`Sha1Digest::from_hex`].

use std::fmt::{self, Display, Formatter, LowerHex};
use std::str::FromStr;

/// Errors returned when decoding a digest from its hex form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DigestParseError {
    /// The input was not 40 characters long.
    #[error("expected 40 hex characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 160-bit SHA-1 digest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sha1Digest([u32; 5]);

impl Sha1Digest {
    /// Length of the digest in bytes.
    pub const LEN: usize = 20;

    /// Returns the digest as 20 bytes, H0 first, most significant byte
    /// first within each word.
    pub fn to_bytes(&self) -> [u8; 20] {
        let mut out = [0u8; 20];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        out
    }

    /// Returns the five output words H0..H4.
    pub fn words(&self) -> [u32; 5] {
        self.0
    }

    /// Returns the 40-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decodes a digest from 40 hex characters (either case).
    pub fn from_hex(input: &str) -> Result<Self, DigestParseError> {
        if input.len() != 2 * Self::LEN {
            return Err(DigestParseError::InvalidLength(input.len()));
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(input, &mut bytes)?;

        Ok(Self::from(bytes))
    }
}

impl From<[u32; 5]> for Sha1Digest {
    fn from(words: [u32; 5]) -> Self {
        Sha1Digest(words)
    }
}

impl From<Sha1Digest> for [u32; 5] {
    fn from(value: Sha1Digest) -> Self {
        value.0
    }
}

/// The input is read as five big-endian words.
impl From<[u8; 20]> for Sha1Digest {
    fn from(bytes: [u8; 20]) -> Self {
        let mut words = [0u32; 5];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        Sha1Digest(words)
    }
}

impl From<Sha1Digest> for [u8; 20] {
    fn from(value: Sha1Digest) -> Self {
        value.to_bytes()
    }
}

impl FromStr for Sha1Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl LowerHex for Sha1Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for word in self.0.iter() {
            write!(f, "{:08x}", word)?;
        }

        Ok(())
    }
}

impl Display for Sha1Digest {
    /// Formats the digest as 40 lowercase hex characters.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
