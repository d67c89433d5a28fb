mod common;

use common::BYTE_LEVEL_BPE;
use token_cover::{AlignmentFailure, Decompose, cover_tokens};
use tokenizer_adapters::whitespace_tokenize;

const TEXT: &str = "this is a test tests";

#[test]
fn raw_byte_level_tokens_carry_boundary_markers() {
    let raw = BYTE_LEVEL_BPE.tokenize(TEXT).unwrap();
    assert_eq!(raw, vec!["this", "Ġis", "Ġa", "Ġtest", "Ġtest", "s"]);

    let words = whitespace_tokenize(TEXT);
    assert!(matches!(
        cover_tokens(&words, &raw, None),
        Err(AlignmentFailure::Unmatched { coarse_index: 1, .. })
    ));
}

#[test]
fn decoded_tokens_read_as_text() {
    let decoded = BYTE_LEVEL_BPE.tokenize_decoded(TEXT).unwrap();
    assert_eq!(decoded, vec!["this", " is", " a", " test", " test", "s"]);
}

#[test]
fn whitespace_words_cover_decoded_tokens() {
    let words = whitespace_tokenize(TEXT);
    let pieces = BYTE_LEVEL_BPE.tokenize_decoded(TEXT).unwrap();

    let covering = cover_tokens(&words, &pieces, None).unwrap();
    assert_eq!(covering.coarse_tokens(), words);
    assert_eq!(covering.fine_tokens(), pieces);
    assert_eq!(covering.run_lengths(), vec![1, 1, 1, 1, 2]);
}

#[test]
fn decomposition_hint_from_byte_level_tokenizer() {
    let words = whitespace_tokenize(TEXT);
    let pieces = BYTE_LEVEL_BPE.tokenize_decoded(TEXT).unwrap();
    let decompose: Decompose<'_> = &|word| BYTE_LEVEL_BPE.decompose(word);

    let hinted = cover_tokens(&words, &pieces, Some(decompose)).unwrap();
    assert_eq!(hinted, cover_tokens(&words, &pieces, None).unwrap());
}

#[test]
fn decode_ids_matches_tokenize_decoded() {
    let encoding = BYTE_LEVEL_BPE.inner().encode(TEXT, false).unwrap();
    assert_eq!(
        BYTE_LEVEL_BPE.decode_ids(encoding.get_ids()).unwrap(),
        BYTE_LEVEL_BPE.tokenize_decoded(TEXT).unwrap()
    );
}
