use rand::Rng;

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draws `count` letters uniformly from A-Z with replacement.
///
/// The bag never runs out: every draw sees all 26 letters.
pub fn draw_letters<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<char> {
    (0..count)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
