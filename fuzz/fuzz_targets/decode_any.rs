use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            let _ = glyphcode::decode_braille(text);
            let candidates = glyphcode::decode_dna(text);
            assert!(candidates.is_empty() || candidates.len() == 16);
        });
    }
}
