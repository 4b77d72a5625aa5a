//! The 26-letter index space all permutations operate on.
//!
//! Every component of the engine works on indices 0..26 rather than
//! characters; these helpers sit at the boundary between the two.

/// Number of symbols in the machine alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Converts a letter to its alphabet index (0..26).
///
/// Case-insensitive. Returns `None` for anything outside `A..=Z` /
/// `a..=z`.
///
/// # Parameters
/// - `ch`: The character to convert.
pub fn to_index(ch: char) -> Option<u8> {
    match ch {
        'A'..='Z' => Some(ch as u8 - b'A'),
        'a'..='z' => Some(ch as u8 - b'a'),
        _ => None,
    }
}

/// Converts an alphabet index (0..26) back to its uppercase letter.
///
/// # Panics
/// Panics if `index >= 26`. Indices inside the engine are always
/// reduced mod 26 before reaching this point.
pub fn to_char(index: u8) -> char {
    assert!(
        (index as usize) < ALPHABET_LEN,
        "alphabet index out of range: {}",
        index
    );
    (b'A' + index) as char
}
