//! Rotor: a single substitution wheel with a rotating offset.
//!
//! The wiring and its inverse are fixed at construction; only the
//! rotational offset mutates, once per stepped symbol. A signal entering
//! the rotor is referenced to the case frame, shifted into the rotor
//! core by the current offset, crosses the wiring, and is referenced
//! back to the frame on exit.

use crate::alphabet::{to_char, to_index, ALPHABET_LEN};
use crate::error::EnigmaError;
use crate::wiring::Permutation;

/// Direction a signal crosses the rotor wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Entry side, toward the reflector.
    Forward,
    /// Return side, back from the reflector.
    Inverse,
}

/// A single rotor: fixed wiring plus a rotating offset.
#[derive(Debug, Clone)]
pub(crate) struct Rotor {
    permutation: Permutation,
    turnovers: [bool; ALPHABET_LEN],
    offset: u8,
    // Recorded ring letter. Carried for the configuration tuple; it does
    // not shift the wiring (the window letter alone fixes the offset).
    #[allow(dead_code)]
    ring: char,
}

impl Rotor {
    /// Mounts a rotor with the given wiring, turnover letters, ring
    /// letter, and initial window letter.
    ///
    /// The offset starts at the index of the window letter. The inverse
    /// wiring is derived during [`Permutation`] construction.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NonBijectiveWiring`] if the wiring string
    /// is not a bijection, or [`EnigmaError::InvalidSymbol`] if the ring
    /// or window letter is outside the alphabet.
    pub(crate) fn new(
        wiring: &str,
        turnovers: &str,
        ring: char,
        window: char,
    ) -> Result<Self, EnigmaError> {
        let permutation = Permutation::from_wiring(wiring)?;
        let mut turnover_set = [false; ALPHABET_LEN];
        for ch in turnovers.chars() {
            let idx = to_index(ch).ok_or(EnigmaError::InvalidSymbol(ch))?;
            turnover_set[idx as usize] = true;
        }
        to_index(ring).ok_or(EnigmaError::InvalidSymbol(ring))?;
        let offset = to_index(window).ok_or(EnigmaError::InvalidSymbol(window))?;
        Ok(Rotor {
            permutation,
            turnovers: turnover_set,
            offset,
            ring,
        })
    }

    /// Steps the rotor one position forward.
    pub(crate) fn advance(&mut self) {
        self.offset = (self.offset + 1) % ALPHABET_LEN as u8;
    }

    /// Reports whether the rotor is sitting in a turnover position:
    /// whether the letter that would show in the window *after one more
    /// advance* is a turnover letter.
    ///
    /// The lookahead (not the currently displayed letter) is what drives
    /// the stepping protocol: rotor I steps its neighbor on the Q → R
    /// transition, so the lever is engaged while Q is showing.
    pub(crate) fn at_turnover(&self) -> bool {
        let next = (self.offset as usize + 1) % ALPHABET_LEN;
        self.turnovers[next]
    }

    /// Transforms a symbol index through the rotor wiring.
    ///
    /// The index is shifted into the rotor core by the current offset,
    /// crosses the forward or inverse table, and is shifted back out to
    /// the case frame.
    pub(crate) fn transform(&self, index: u8, direction: Direction) -> u8 {
        let incoming = (index as usize + self.offset as usize) % ALPHABET_LEN;
        let crossed = match direction {
            Direction::Forward => self.permutation.apply(incoming as u8),
            Direction::Inverse => self.permutation.apply_inverse(incoming as u8),
        };
        ((crossed as usize + ALPHABET_LEN - self.offset as usize) % ALPHABET_LEN) as u8
    }

    /// Returns the letter currently showing in the rotor window.
    pub(crate) fn window_letter(&self) -> char {
        to_char(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiring::RotorType;

    fn rotor(rotor_type: RotorType, window: char) -> Rotor {
        Rotor::new(rotor_type.wiring(), rotor_type.turnovers(), 'A', window).unwrap()
    }

    #[test]
    fn test_new_sets_offset_from_window() {
        let r = rotor(RotorType::I, 'Q');
        assert_eq!(r.window_letter(), 'Q');
    }

    #[test]
    fn test_new_rejects_bad_window() {
        let result = Rotor::new(RotorType::I.wiring(), "R", 'A', '3');
        assert_eq!(result.unwrap_err(), EnigmaError::InvalidSymbol('3'));
    }

    #[test]
    fn test_advance_wraps() {
        let mut r = rotor(RotorType::I, 'Z');
        r.advance();
        assert_eq!(r.window_letter(), 'A');
    }

    #[test]
    fn test_at_turnover_looks_one_ahead() {
        // Rotor I turns over on Q -> R: lever engaged while Q shows.
        let mut r = rotor(RotorType::I, 'P');
        assert!(!r.at_turnover());
        r.advance();
        assert_eq!(r.window_letter(), 'Q');
        assert!(r.at_turnover());
        r.advance();
        assert!(!r.at_turnover());
    }

    #[test]
    fn test_at_turnover_wraps_at_z() {
        // Rotor V turns over on Z -> A: lever engaged while Z shows.
        let r = rotor(RotorType::V, 'Z');
        assert!(r.at_turnover());
    }

    #[test]
    fn test_transform_at_offset_zero_matches_wiring() {
        let r = rotor(RotorType::I, 'A');
        // Wiring I maps A -> E.
        assert_eq!(r.transform(0, Direction::Forward), 4);
        assert_eq!(r.transform(4, Direction::Inverse), 0);
    }

    #[test]
    fn test_transform_accounts_for_offset() {
        // At offset 1, input A enters the core as B; wiring I maps
        // B -> K, and K shifted back by the offset is J.
        let r = rotor(RotorType::I, 'B');
        assert_eq!(r.transform(0, Direction::Forward), 9);
    }

    #[test]
    fn test_inverse_undoes_forward_at_every_offset() {
        for window in 'A'..='Z' {
            let r = rotor(RotorType::III, window);
            for i in 0..ALPHABET_LEN as u8 {
                let out = r.transform(i, Direction::Forward);
                assert_eq!(r.transform(out, Direction::Inverse), i);
            }
        }
    }

    #[test]
    fn test_transform_is_bijective_at_offset() {
        let r = rotor(RotorType::IV, 'M');
        let mut seen = [false; ALPHABET_LEN];
        for i in 0..ALPHABET_LEN as u8 {
            let out = r.transform(i, Direction::Forward) as usize;
            assert!(!seen[out], "collision at output {}", out);
            seen[out] = true;
        }
    }
}
