//! Pull-based byte sources
//!
//! A `ByteSource` yields the next byte of a logical stream, or `None` once
//! the stream is exhausted. The engine drains a source with
//! [`Sha1::update_source`](super::Sha1::update_source).
//!
//! Two implementations are provided:
//! - `TextByteSource`: encodes 16-bit text units to bytes lazily, one output
//!   byte per pull
//! - `SliceByteSource`: walks a borrowed byte buffer

use std::iter::{Fuse, Peekable};
use std::str::EncodeUtf16;

/// A pull-based stream of bytes.
///
/// Implementations must keep returning `None` after the first `None`.
pub trait ByteSource {
    /// Returns the next byte, or `None` at end of stream.
    fn next_byte(&mut self) -> Option<u8>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn next_byte(&mut self) -> Option<u8> {
        (**self).next_byte()
    }
}

/// How text units outside the Basic Multilingual Plane are turned into bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// Every 16-bit unit is encoded on its own, so a surrogate pair becomes
    /// two 3-byte sequences. Matches digests produced by earlier releases.
    #[default]
    Legacy,
    /// A high surrogate followed by a low surrogate is combined into one
    /// 4-byte UTF-8 sequence. Lone surrogates are still encoded as 3 bytes.
    Utf8,
}

/// Lazily encodes a sequence of 16-bit text units into bytes.
///
/// Each unit expands to one, two or three bytes (four for a surrogate pair
/// under [`TextEncoding::Utf8`]). At most one unit is buffered at a time.
#[derive(Clone, Debug)]
pub struct TextByteSource<I: Iterator<Item = u16>> {
    units: Peekable<Fuse<I>>,
    encoding: TextEncoding,
    buf: [u8; 4],
    len: usize,
    pos: usize,
}

impl<I: Iterator<Item = u16>> TextByteSource<I> {
    /// Creates a source over `units` using [`TextEncoding::Legacy`].
    pub fn new(units: I) -> Self {
        Self {
            units: units.fuse().peekable(),
            encoding: TextEncoding::default(),
            buf: [0u8; 4],
            len: 0,
            pos: 0,
        }
    }

    /// Selects how surrogate pairs are encoded.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Reads one more unit and fills the lookahead with its encoding.
    ///
    /// Returns `false` when the underlying units are exhausted.
    fn refill(&mut self) -> bool {
        let Some(unit) = self.units.next() else {
            return false;
        };

        let v = u32::from(unit);
        self.pos = 0;

        if v < 0x80 {
            self.buf[0] = v as u8;
            self.len = 1;
        } else if v < 0x800 {
            self.buf[0] = (0xC0 | (v >> 6)) as u8;
            self.buf[1] = (0x80 | (v & 0x3F)) as u8;
            self.len = 2;
        } else if let Some(cp) = self.combine_pair(unit) {
            self.buf[0] = (0xF0 | (cp >> 18)) as u8;
            self.buf[1] = (0x80 | ((cp >> 12) & 0x3F)) as u8;
            self.buf[2] = (0x80 | ((cp >> 6) & 0x3F)) as u8;
            self.buf[3] = (0x80 | (cp & 0x3F)) as u8;
            self.len = 4;
        } else {
            self.buf[0] = (0xE0 | (v >> 12)) as u8;
            self.buf[1] = (0x80 | ((v >> 6) & 0x3F)) as u8;
            self.buf[2] = (0x80 | (v & 0x3F)) as u8;
            self.len = 3;
        }

        true
    }

    /// Consumes the low half of a surrogate pair when `high` starts one and
    /// the encoding asks for combined pairs. Returns the scalar value.
    fn combine_pair(&mut self, high: u16) -> Option<u32> {
        if self.encoding != TextEncoding::Utf8 || !(0xD800..=0xDBFF).contains(&high) {
            return None;
        }

        let low = self
            .units
            .next_if(|unit| (0xDC00..=0xDFFF).contains(unit))?;

        Some(0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00))
    }
}

impl<'a> TextByteSource<EncodeUtf16<'a>> {
    /// Creates a source over the UTF-16 units of `text`.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.encode_utf16())
    }
}

impl<I: Iterator<Item = u16>> ByteSource for TextByteSource<I> {
    fn next_byte(&mut self) -> Option<u8> {
        if self.pos == self.len && !self.refill() {
            return None;
        }

        let byte = self.buf[self.pos];
        self.pos += 1;

        Some(byte)
    }
}

impl<I: Iterator<Item = u16>> Iterator for TextByteSource<I> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_byte()
    }
}

/// Byte source over a borrowed buffer.
#[derive(Clone, Debug)]
pub struct SliceByteSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceByteSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet pulled.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceByteSource<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;

        Some(byte)
    }
}

impl Iterator for SliceByteSource<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_byte()
    }
}
