//! Deterministic short ids for entries without a natural key
//!
//! # Algorithm
//!
//! `text → 32-bit rolling hash (×31, wrapping) → |h| → base-36 → pad/truncate to 8`
//!
//! # Guarantees
//!
//! - **Deterministic**: no seeds, no addresses; stable across runs and platforms
//! - **Fixed width**: always [`ID_LEN`] characters from `0-9A-Z`
//!
//! The rolling hash walks UTF-16 code units so ids match ones already
//! stored by existing consumers. `X` is both the padding character and the
//! digit for 33, so `"X"`-prefixed values can collide with padded ones
//! (`hash("!") == hash("")`). This is kept for compatibility.

/// Digit alphabet, most significant first
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of every generated id
pub const ID_LEN: usize = 8;

/// Left padding for short encodings
pub const PAD_CHAR: char = 'X';

/// Hash `input` to an 8-character id
pub fn hash(input: &str) -> String {
    encode_id(rolling_hash(input))
}

/// 32-bit signed rolling hash over UTF-16 code units
///
/// `h = h * 31 + unit`, wrapping on overflow like a 32-bit `int`.
pub fn rolling_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Encode a rolling hash value as a fixed-width id
///
/// The magnitude is taken unsigned, so `i32::MIN` becomes `2147483648`
/// rather than wrapping back to a negative value.
pub fn encode_id(value: i32) -> String {
    let digits = to_base36(value.unsigned_abs());

    let mut id = String::with_capacity(ID_LEN);
    for _ in digits.len()..ID_LEN {
        id.push(PAD_CHAR);
    }
    // Keep the most significant side if the encoding is ever too wide
    id.extend(digits.chars().take(ID_LEN));
    id
}

/// Base-36 digits, most significant first. Zero encodes as the empty string.
fn to_base36(mut value: u32) -> String {
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // ALPHABET is ASCII
    digits.into_iter().map(char::from).collect()
}
