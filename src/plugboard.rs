//! Plugboard: a self-inverse pre/post substitution layer.
//!
//! Built from disjoint letter-pair swaps; unlisted letters map to
//! themselves. Applied once before the signal enters the rotor stack and
//! once after it leaves, so the layer must be an involution. The
//! construction guarantees that by rejecting any symbol wired twice.

use crate::alphabet::{to_index, ALPHABET_LEN};
use crate::error::EnigmaError;

/// Involutive pair-swap permutation applied at the machine's entry and
/// exit.
#[derive(Debug, Clone)]
pub(crate) struct Plugboard {
    mapping: [u8; ALPHABET_LEN],
}

impl Plugboard {
    /// Builds a plugboard from unordered letter pairs.
    ///
    /// Starts from the identity mapping; each pair (a, b) sets
    /// `mapping[a] = b` and `mapping[b] = a`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::PlugboardConflict`] if any symbol appears
    /// in more than one pair, or is paired with itself, and
    /// [`EnigmaError::InvalidSymbol`] for letters outside the alphabet.
    pub(crate) fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut mapping = [0u8; ALPHABET_LEN];
        for (i, slot) in mapping.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let mut wired = [false; ALPHABET_LEN];
        for &(a, b) in pairs {
            let ia = to_index(a).ok_or(EnigmaError::InvalidSymbol(a))?;
            let ib = to_index(b).ok_or(EnigmaError::InvalidSymbol(b))?;
            if ia == ib || wired[ia as usize] {
                return Err(EnigmaError::PlugboardConflict(a.to_ascii_uppercase()));
            }
            if wired[ib as usize] {
                return Err(EnigmaError::PlugboardConflict(b.to_ascii_uppercase()));
            }
            wired[ia as usize] = true;
            wired[ib as usize] = true;
            mapping[ia as usize] = ib;
            mapping[ib as usize] = ia;
        }
        Ok(Plugboard { mapping })
    }

    /// Maps a symbol index through the plugboard.
    pub(crate) fn transform(&self, index: u8) -> u8 {
        self.mapping[index as usize]
    }
}
