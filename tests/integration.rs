//! End-to-end scenarios drawn from the format's worked examples and
//! documented boundary behaviors: exact block boundaries, prefix clamping,
//! the nibble escape, maximum word length, and the full error taxonomy.

use halva::{Encoder, Error, Lexicon, BLOCKING_FACTOR, MAX_WORD_LEN};

fn build(words: &[&[u8]]) -> Lexicon {
    let mut enc = Encoder::new();
    for w in words {
        enc.add(w).unwrap();
    }
    let mut buf = Vec::new();
    enc.dump(&mut buf).unwrap();
    Lexicon::load(&mut &buf[..]).unwrap()
}

#[test]
fn worked_example_greenish_family() {
    let words: &[&[u8]] = &[
        b"greenish",
        b"greenness",
        b"greens",
        b"greet",
        b"greeting",
        b"greets",
        b"gregarious",
        b"gregariously",
    ];
    let lex = build(words);

    assert_eq!(lex.len(), 8);
    assert_eq!(lex.locate(b"greet"), 4);
    assert_eq!(lex.extract(6).as_deref(), Some(b"greets".as_slice()));

    let got: Vec<Vec<u8>> = lex.iter_from_word(b"greet").collect();
    let want: Vec<Vec<u8>> = [b"greet", b"greeting", b"greets", b"gregarious", b"gregariously"]
        .iter()
        .map(|w| w.to_vec())
        .collect();
    assert_eq!(got, want);
}

#[test]
fn single_word_file_layout_matches_spec() {
    let mut enc = Encoder::new();
    enc.add(b"a").unwrap();
    let mut bytes = Vec::new();
    enc.dump(&mut bytes).unwrap();

    assert_eq!(&bytes[8..12], &1u32.to_be_bytes()); // N = 1
    assert_eq!(&bytes[16..20], &0u32.to_be_bytes()); // one bucket offset, 0
    assert_eq!(&bytes[20..22], &[1, b'a']); // body: [len, 'a']

    let lex = Lexicon::load(&mut &bytes[..]).unwrap();
    assert_eq!(lex.locate(b"a"), 1);
    assert_eq!(lex.extract(1).as_deref(), Some(b"a".as_slice()));
    assert_eq!(lex.locate(b"b"), 0);
}

#[test]
fn seventeen_words_span_two_blocks_and_binary_search_finds_the_second() {
    let words: Vec<Vec<u8>> = (0..17)
        .map(|i| format!("a{}", ('a'..='z').nth(i).unwrap()).into_bytes())
        .collect();
    let refs: Vec<&[u8]> = words.iter().map(Vec::as_slice).collect();
    let lex = build(&refs);

    assert_eq!(lex.len(), 17);
    assert_eq!(lex.block_count(), 2);
    assert_eq!(lex.locate(refs[16]), 17);
}

#[test]
fn prefix_clamping_and_escape_encoding_round_trip() {
    // "abcdefghijklmnopqrstuv" shares a true 16-byte prefix with the word
    // before it; the encoder clamps p to 15 and the decoder must still
    // recover the word exactly.
    let words: &[&[u8]] = &[b"abc", b"abcdefghijklmnop", b"abcdefghijklmnopqrstuv"];
    let lex = build(words);
    for (i, w) in words.iter().enumerate() {
        assert_eq!(lex.extract(i as u32 + 1).as_deref(), Some(*w));
        assert_eq!(lex.locate(w), i as u32 + 1);
    }
}

#[test]
fn maximum_length_word_is_stored_and_recovered() {
    let word = vec![b'z'; MAX_WORD_LEN];
    let lex = build(&[&word]);
    assert_eq!(lex.extract(1).as_deref(), Some(word.as_slice()));
}

#[test]
fn add_errors_match_the_taxonomy() {
    let mut enc = Encoder::new();
    assert!(matches!(enc.add(b""), Err(Error::Word)));
    let overlong = vec![b'x'; MAX_WORD_LEN + 1];
    assert!(matches!(enc.add(&overlong), Err(Error::Word)));

    enc.add(b"b").unwrap();
    assert!(matches!(enc.add(b"a"), Err(Error::Order)));
    assert!(matches!(enc.add(b"b"), Err(Error::Order)));
}

#[test]
fn load_errors_match_the_taxonomy() {
    let mut enc = Encoder::new();
    enc.add(b"a").unwrap();
    enc.add(b"b").unwrap();
    let mut bytes = Vec::new();
    enc.dump(&mut bytes).unwrap();

    let mut bad_magic = bytes.clone();
    bad_magic[0] ^= 0xFF;
    assert!(matches!(
        Lexicon::load(&mut &bad_magic[..]),
        Err(Error::Magic)
    ));

    let mut bad_version = bytes.clone();
    bad_version[4..8].copy_from_slice(&99u32.to_be_bytes());
    assert!(matches!(
        Lexicon::load(&mut &bad_version[..]),
        Err(Error::Version)
    ));

    let mut truncated = bytes.clone();
    truncated.truncate(10);
    assert!(matches!(
        Lexicon::load(&mut &truncated[..]),
        Err(Error::Io(_))
    ));
}

#[test]
fn empty_lexicon_answers_every_query_as_absent() {
    let lex = build(&[]);
    assert_eq!(lex.len(), 0);
    assert!(lex.is_empty());
    assert_eq!(lex.locate(b"anything"), 0);
    assert_eq!(lex.extract(1), None);
    assert_eq!(lex.iter().count(), 0);
}

#[test]
fn exactly_one_block_has_no_cross_block_head_record() {
    let words: Vec<Vec<u8>> = (0..BLOCKING_FACTOR)
        .map(|i| format!("w{i:02}").into_bytes())
        .collect();
    let refs: Vec<&[u8]> = words.iter().map(Vec::as_slice).collect();
    let lex = build(&refs);
    assert_eq!(lex.block_count(), 1);
    assert_eq!(lex.len(), BLOCKING_FACTOR);
}

#[test]
fn determinism_across_independent_encoders() {
    let words: &[&[u8]] = &[b"aa", b"ab", b"ac", b"ad"];
    let mut a = Encoder::new();
    let mut b = Encoder::new();
    for w in words {
        a.add(w).unwrap();
        b.add(w).unwrap();
    }
    let mut buf_a = Vec::new();
    let mut buf_b = Vec::new();
    a.dump(&mut buf_a).unwrap();
    b.dump(&mut buf_b).unwrap();
    assert_eq!(buf_a, buf_b);
}

#[test]
fn file_round_trip_via_tempfile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.halva");

    let mut enc = Encoder::new();
    for w in [b"alpha".as_slice(), b"beta".as_slice(), b"gamma".as_slice()] {
        enc.add(w).unwrap();
    }
    enc.dump_to_file(&path).unwrap();

    let lex = Lexicon::load_from_file(&path).unwrap();
    assert_eq!(lex.len(), 3);
    assert_eq!(lex.locate(b"beta"), 2);
    assert_eq!(
        lex.iter().collect::<Vec<_>>(),
        vec![b"alpha".to_vec(), b"beta".to_vec(), b"gamma".to_vec()]
    );
}
