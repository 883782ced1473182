use glyphcode::dna::{decode, decode_canonical, encode, frame_codebook, Codebook, CANONICAL_ROW};
use glyphcode::{decode_dna, encode_dna};
use proptest::prelude::*;
use quickcheck::quickcheck;

proptest! {
    #[test]
    fn canonical_candidate_reproduces_text(s in "[ -~]{1,48}") {
        let candidates = decode_dna(&encode_dna(s.as_bytes()));
        prop_assert_eq!(candidates.len(), 16);
        prop_assert_eq!(&candidates[CANONICAL_ROW].text, &s);
        prop_assert_eq!(candidates[CANONICAL_ROW].index, CANONICAL_ROW + 1);
    }

    #[test]
    fn canonical_decode_is_exact(data in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(decode_canonical(&encode(&data)), data);
    }
}

quickcheck! {
    fn groups_of_four_per_byte(data: Vec<u8>) -> bool {
        let out = encode(&data);
        let groups: Vec<&str> = out.split(' ').filter(|g| !g.is_empty()).collect();
        groups.len() == data.len()
            && groups.iter().all(|g| g.len() == 4 && g.chars().all(|c| "ACGT".contains(c)))
    }

    fn candidates_are_labelled_in_row_order(data: Vec<u8>) -> bool {
        let candidates = decode(&encode(&data));
        if data.is_empty() {
            return candidates.is_empty();
        }
        candidates
            .iter()
            .enumerate()
            .all(|(i, c)| c.row == i && c.index == i + 1)
    }
}

#[test]
fn hi_example() {
    assert_eq!(encode_dna(b"Hi"), "TAGA TGGT");
    let candidates = decode_dna("TAGA TGGT");
    assert_eq!(candidates[5].index, 6);
    assert_eq!(candidates[5].text, "Hi");
}

#[test]
fn empty_input_yields_no_candidates() {
    assert!(decode_dna("").is_empty());
}

#[test]
fn canonical_codebook_is_pinned() {
    assert_eq!(frame_codebook(CANONICAL_ROW), Codebook::CANONICAL);
}

#[test]
fn unseparated_runs_decode_the_same() {
    let spaced = encode_dna(b"glyph");
    let packed: String = spaced.split_whitespace().collect();
    assert_eq!(decode_dna(&spaced), decode_dna(&packed));
}
