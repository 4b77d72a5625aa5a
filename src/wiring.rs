//! Static wiring tables and the index-space permutation type.
//!
//! Holds the five historical rotor wirings (I–V), their turnover
//! letters, and the reflector wiring, plus [`Permutation`]: a bijective
//! index mapping with a precomputed inverse so a symbol can cross a
//! wheel in either direction in O(1).
//!
//! Wiring data follows Tony Sale's Codes and Ciphers and the Crypto
//! Museum references for the Wehrmacht Enigma I with reflector B.

use crate::alphabet::{to_index, ALPHABET_LEN};
use crate::error::EnigmaError;
use std::fmt;
use std::str::FromStr;

/// Reflector B wiring.
pub(crate) const REFLECTOR_WIRING: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// One of the five physical rotors a machine slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RotorType {
    /// Rotor I — turnover Q → R.
    I,
    /// Rotor II — turnover E → F.
    II,
    /// Rotor III — turnover V → W.
    III,
    /// Rotor IV — turnover J → K.
    IV,
    /// Rotor V — turnover Z → A.
    V,
}

impl RotorType {
    /// All rotor types, in lexicographic order of their names.
    ///
    /// This ordering fixes the enumeration order of the configuration
    /// catalog, so it must stay stable.
    pub const ALL: [RotorType; 5] = [
        RotorType::I,
        RotorType::II,
        RotorType::III,
        RotorType::IV,
        RotorType::V,
    ];

    /// Returns the rotor's forward wiring as a 26-letter string.
    ///
    /// Position `i` holds the letter that alphabet index `i` maps to
    /// when the signal crosses the rotor core right-to-left.
    pub fn wiring(self) -> &'static str {
        match self {
            RotorType::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorType::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorType::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorType::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorType::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Returns the rotor's turnover letters.
    ///
    /// The rotor steps its left-hand neighbor on the transition *into*
    /// the turnover letter (rotor I steps its neighbor on Q → R).
    /// Royal Flags Wave Kings Above.
    pub fn turnovers(self) -> &'static str {
        match self {
            RotorType::I => "R",
            RotorType::II => "F",
            RotorType::III => "W",
            RotorType::IV => "K",
            RotorType::V => "A",
        }
    }
}

impl fmt::Display for RotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorType::I => "I",
            RotorType::II => "II",
            RotorType::III => "III",
            RotorType::IV => "IV",
            RotorType::V => "V",
        };
        f.write_str(name)
    }
}

impl FromStr for RotorType {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(RotorType::I),
            "II" => Ok(RotorType::II),
            "III" => Ok(RotorType::III),
            "IV" => Ok(RotorType::IV),
            "V" => Ok(RotorType::V),
            other => Err(EnigmaError::UnknownRotor(other.to_string())),
        }
    }
}

/// A bijection over the 26-letter index space with a precomputed inverse.
///
/// Construction verifies the bijection, so `apply`/`apply_inverse` are
/// total afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Permutation {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
}

impl Permutation {
    /// Builds a permutation from a 26-letter wiring string.
    ///
    /// The inverse table is derived as `inverse[forward[i]] = i`; e.g.
    /// the inverse of `EKMFLGDQVZNTOWYHXUSPAIBRCJ` is
    /// `UWYGADFPVZBECKMTHXSLRINQOJ`, as π[A] = E ⟺ π⁻¹[E] = A.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NonBijectiveWiring`] if the string is not
    /// exactly 26 letters or any letter repeats.
    pub(crate) fn from_wiring(wiring: &str) -> Result<Self, EnigmaError> {
        let mut forward = [0u8; ALPHABET_LEN];
        let mut count = 0usize;
        for (i, ch) in wiring.chars().enumerate() {
            if i >= ALPHABET_LEN {
                return Err(EnigmaError::NonBijectiveWiring);
            }
            forward[i] = to_index(ch).ok_or(EnigmaError::NonBijectiveWiring)?;
            count += 1;
        }
        if count != ALPHABET_LEN {
            return Err(EnigmaError::NonBijectiveWiring);
        }
        Self::from_table(forward)
    }

    /// Builds a permutation from an index table, verifying bijectivity.
    ///
    /// # Errors
    /// Returns [`EnigmaError::NonBijectiveWiring`] if any target index
    /// appears twice (equivalently, if some index never appears).
    pub(crate) fn from_table(forward: [u8; ALPHABET_LEN]) -> Result<Self, EnigmaError> {
        let mut inverse = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (i, &target) in forward.iter().enumerate() {
            let t = target as usize;
            if t >= ALPHABET_LEN || seen[t] {
                return Err(EnigmaError::NonBijectiveWiring);
            }
            seen[t] = true;
            inverse[t] = i as u8;
        }
        Ok(Permutation { forward, inverse })
    }

    /// The identity permutation.
    pub(crate) fn identity() -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        for (i, slot) in forward.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Permutation {
            inverse: forward,
            forward,
        }
    }

    /// Maps an index through the forward table.
    pub(crate) fn apply(&self, index: u8) -> u8 {
        self.forward[index as usize]
    }

    /// Maps an index through the inverse table.
    pub(crate) fn apply_inverse(&self, index: u8) -> u8 {
        self.inverse[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::to_char;

    #[test]
    fn test_rotor_type_display_roundtrip() {
        for rotor in RotorType::ALL {
            let parsed: RotorType = rotor.to_string().parse().unwrap();
            assert_eq!(parsed, rotor);
        }
    }

    #[test]
    fn test_rotor_type_parse_unknown() {
        assert_eq!(
            "VI".parse::<RotorType>(),
            Err(EnigmaError::UnknownRotor("VI".to_string()))
        );
    }

    #[test]
    fn test_all_wirings_are_bijective() {
        for rotor in RotorType::ALL {
            assert!(Permutation::from_wiring(rotor.wiring()).is_ok());
        }
        assert!(Permutation::from_wiring(REFLECTOR_WIRING).is_ok());
    }

    #[test]
    fn test_rotor_i_inverse_matches_reference() {
        // Known inverse of rotor I's wiring.
        let perm = Permutation::from_wiring(RotorType::I.wiring()).unwrap();
        let expected = "UWYGADFPVZBECKMTHXSLRINQOJ";
        for (i, ch) in expected.chars().enumerate() {
            assert_eq!(to_char(perm.apply_inverse(i as u8)), ch);
        }
    }

    #[test]
    fn test_inverse_undoes_forward() {
        for rotor in RotorType::ALL {
            let perm = Permutation::from_wiring(rotor.wiring()).unwrap();
            for i in 0..ALPHABET_LEN as u8 {
                assert_eq!(perm.apply_inverse(perm.apply(i)), i);
                assert_eq!(perm.apply(perm.apply_inverse(i)), i);
            }
        }
    }

    #[test]
    fn test_reflector_is_fixed_point_free_involution() {
        let perm = Permutation::from_wiring(REFLECTOR_WIRING).unwrap();
        for i in 0..ALPHABET_LEN as u8 {
            assert_ne!(perm.apply(i), i);
            assert_eq!(perm.apply(perm.apply(i)), i);
        }
    }

    #[test]
    fn test_from_wiring_rejects_repeats() {
        let mut wiring = String::from("AABCDEFGHIJKLMNOPQRSTUVWXY");
        assert_eq!(
            Permutation::from_wiring(&wiring),
            Err(EnigmaError::NonBijectiveWiring)
        );
        wiring.truncate(25);
        assert_eq!(
            Permutation::from_wiring(&wiring),
            Err(EnigmaError::NonBijectiveWiring)
        );
    }

    #[test]
    fn test_from_wiring_rejects_non_letters() {
        assert_eq!(
            Permutation::from_wiring("ABCDEFGHIJKLMNOPQRSTUVWXY7"),
            Err(EnigmaError::NonBijectiveWiring)
        );
    }

    #[test]
    fn test_identity() {
        let id = Permutation::identity();
        for i in 0..ALPHABET_LEN as u8 {
            assert_eq!(id.apply(i), i);
            assert_eq!(id.apply_inverse(i), i);
        }
    }
}
