//! Character pools for the character-based generators.

use rand::RngCore;
use rand::seq::IndexedRandom;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Assemble the pool in a fixed order: letters, then digits, then punctuation.
///
/// Sets are concatenated as-is. A byte present in two sets would be drawn
/// with double weight; nothing here removes duplicates.
pub fn build(include_numbers: bool, include_symbols: bool) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::with_capacity(LOWERCASE.len() + UPPERCASE.len());
    chars.extend_from_slice(LOWERCASE);
    chars.extend_from_slice(UPPERCASE);

    if include_numbers {
        chars.extend_from_slice(DIGITS);
    }

    if include_symbols {
        chars.extend_from_slice(PUNCTUATION);
    }

    chars
}

/// Draw `length` bytes from `alphabet` with replacement, in draw order.
pub fn sample(alphabet: &[u8], length: usize, rng: &mut dyn RngCore) -> String {
    (0..length)
        .filter_map(|_| alphabet.choose(&mut *rng))
        .map(|&b| char::from(b))
        .collect()
}

/// Entropy of `draws` independent uniform picks from a pool of `pool_size`.
pub fn entropy_bits(pool_size: usize, draws: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    draws as f64 * (pool_size as f64).log2()
}
