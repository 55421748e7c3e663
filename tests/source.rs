use cryptal_sha1::hash::sha1;
use cryptal_sha1::{ByteSource, Sha1, SliceByteSource, TextByteSource, TextEncoding};

fn drain<S: ByteSource>(mut source: S) -> Vec<u8> {
    let mut out = Vec::new();
    while let Some(b) = source.next_byte() {
        out.push(b);
    }

    out
}

fn encode(units: &[u16], encoding: TextEncoding) -> Vec<u8> {
    drain(TextByteSource::new(units.iter().copied()).with_encoding(encoding))
}

// -------------------------------------------------------
// 1. TEXT ENCODING WIDTHS
// -------------------------------------------------------

#[test]
fn ascii_is_one_byte() {
    assert_eq!(drain(TextByteSource::from_text("abc")), b"abc");
}

#[test]
fn two_byte_range() {
    assert_eq!(encode(&[0x80], TextEncoding::Legacy), [0xC2, 0x80]);
    assert_eq!(encode(&[0xE9], TextEncoding::Legacy), [0xC3, 0xA9]);
    assert_eq!(encode(&[0x7FF], TextEncoding::Legacy), [0xDF, 0xBF]);
}

#[test]
fn three_byte_range() {
    assert_eq!(encode(&[0x800], TextEncoding::Legacy), [0xE0, 0xA0, 0x80]);
    assert_eq!(encode(&[0x20AC], TextEncoding::Legacy), [0xE2, 0x82, 0xAC]);
    assert_eq!(encode(&[0xFFFF], TextEncoding::Legacy), [0xEF, 0xBF, 0xBF]);
}

#[test]
fn bmp_text_matches_std_utf8() {
    let text = "naïve café – 日本語";

    assert_eq!(drain(TextByteSource::from_text(text)), text.as_bytes());
}

// -------------------------------------------------------
// 2. SURROGATE PAIRS
// -------------------------------------------------------

#[test]
fn legacy_encodes_surrogates_separately() {
    // U+1F600 is D83D DE00 in UTF-16.
    assert_eq!(
        encode(&[0xD83D, 0xDE00], TextEncoding::Legacy),
        [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80]
    );
}

#[test]
fn utf8_combines_surrogate_pair() {
    assert_eq!(
        encode(&[0xD83D, 0xDE00], TextEncoding::Utf8),
        [0xF0, 0x9F, 0x98, 0x80]
    );
    assert_eq!(
        drain(TextByteSource::from_text("a\u{10FFFF}b").with_encoding(TextEncoding::Utf8)),
        "a\u{10FFFF}b".as_bytes()
    );
}

#[test]
fn utf8_keeps_lone_surrogates() {
    assert_eq!(
        encode(&[0xD83D, 0x41], TextEncoding::Utf8),
        [0xED, 0xA0, 0xBD, 0x41]
    );
    assert_eq!(encode(&[0xDE00], TextEncoding::Utf8), [0xED, 0xB8, 0x80]);
}

#[test]
fn engine_text_encoding_changes_digest_only_outside_bmp() {
    let mut legacy = Sha1::new();
    let mut utf8 = Sha1::with_text_encoding(TextEncoding::Utf8);

    legacy.update_text("plain é");
    utf8.update_text("plain é");
    assert_eq!(legacy.finalize(), utf8.finalize());

    legacy.update_text("\u{1F600}");
    utf8.update_text("\u{1F600}");
    assert_ne!(legacy.finalize(), utf8.finalize());
}

#[test]
fn text_encoding_survives_finalize() {
    let mut engine = Sha1::with_text_encoding(TextEncoding::Utf8);
    let _ = engine.finalize();

    assert_eq!(engine.text_encoding(), TextEncoding::Utf8);
    engine.update_text("\u{1F600}");
    assert_eq!(engine.finalize(), sha1("\u{1F600}".as_bytes()));
}

// -------------------------------------------------------
// 3. EXHAUSTION
// -------------------------------------------------------

#[test]
fn text_source_stays_exhausted() {
    let mut source = TextByteSource::from_text("é");

    assert_eq!(source.next_byte(), Some(0xC3));
    assert_eq!(source.next_byte(), Some(0xA9));
    for _ in 0..4 {
        assert_eq!(source.next_byte(), None);
    }
}

#[test]
fn empty_text_source() {
    let mut source = TextByteSource::from_text("");
    assert_eq!(source.next_byte(), None);
    assert_eq!(source.next_byte(), None);
}

#[test]
fn slice_source_stays_exhausted() {
    let mut source = SliceByteSource::new(&[1, 2]);

    assert_eq!(source.next_byte(), Some(1));
    assert_eq!(source.remaining(), &[2]);
    assert_eq!(source.next_byte(), Some(2));
    assert_eq!(source.next_byte(), None);
    assert_eq!(source.next_byte(), None);
    assert!(source.remaining().is_empty());
}

// -------------------------------------------------------
// 4. FEEDING THE ENGINE
// -------------------------------------------------------

#[test]
fn update_source_matches_update() {
    let data: Vec<u8> = (0..200).map(|i| (i % 256) as u8).collect();

    let mut engine = Sha1::new();
    engine.update_source(SliceByteSource::new(&data));

    assert_eq!(engine.finalize(), sha1(&data));
}

#[test]
fn update_source_by_reference_leaves_source_drained() {
    let mut source = SliceByteSource::new(b"abc");

    let mut engine = Sha1::new();
    engine.update_source(&mut source);

    assert!(source.remaining().is_empty());
    assert_eq!(engine.finalize(), sha1(b"abc"));
}

#[test]
fn update_text_matches_bytes() {
    let mut engine = Sha1::new();
    engine.update_text("abc");

    assert_eq!(
        engine.finalize().to_hex(),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn sources_are_iterators() {
    let collected: Vec<u8> = TextByteSource::from_text("hé").collect();
    assert_eq!(collected, "hé".as_bytes());

    let sum: u32 = SliceByteSource::new(&[1, 2, 3]).map(u32::from).sum();
    assert_eq!(sum, 6);
}
