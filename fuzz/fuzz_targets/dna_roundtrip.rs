use glyphcode::dna::{decode_canonical, encode};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let symbols = encode(data);
            assert_eq!(decode_canonical(&symbols), data);
        });
    }
}
