//! Error types for the enigma-sig library.

use std::fmt;

use crate::wiring::RotorType;

/// Errors produced by the enigma-sig library.
///
/// Configuration errors are raised at construction time and are fatal to
/// the construction call; once a machine has been built, no transform or
/// stepping operation can fail. Catalog errors are local to loading a
/// persisted signature index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// A rotor or reflector wiring table is not a bijection over the
    /// 26-letter alphabet.
    NonBijectiveWiring,
    /// A plugboard pairing uses the same symbol more than once.
    PlugboardConflict(char),
    /// The same rotor type was supplied to more than one machine slot.
    DuplicateRotor(RotorType),
    /// An input symbol is outside the machine alphabet.
    InvalidSymbol(char),
    /// A rotor name in a persisted configuration is not one of I..V.
    UnknownRotor(String),
    /// A persisted configuration tuple could not be parsed.
    MalformedConfig(String),
    /// A persisted signature catalog line could not be parsed.
    MalformedCatalog {
        /// 1-based line number of the offending line.
        line: usize,
    },
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::NonBijectiveWiring => {
                write!(f, "Wiring table is not a bijection over the alphabet")
            }
            EnigmaError::PlugboardConflict(ch) => {
                write!(f, "Plugboard symbol '{}' is wired more than once", ch)
            }
            EnigmaError::DuplicateRotor(rotor) => {
                write!(f, "Rotor {} is mounted in more than one slot", rotor)
            }
            EnigmaError::InvalidSymbol(ch) => {
                write!(f, "Symbol '{}' is outside the machine alphabet", ch)
            }
            EnigmaError::UnknownRotor(name) => {
                write!(f, "Unknown rotor type \"{}\"", name)
            }
            EnigmaError::MalformedConfig(text) => {
                write!(f, "Malformed machine configuration \"{}\"", text)
            }
            EnigmaError::MalformedCatalog { line } => {
                write!(f, "Malformed signature catalog at line {}", line)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_non_bijective() {
        let err = EnigmaError::NonBijectiveWiring;
        assert_eq!(
            format!("{}", err),
            "Wiring table is not a bijection over the alphabet"
        );
    }

    #[test]
    fn test_display_plugboard_conflict() {
        let err = EnigmaError::PlugboardConflict('A');
        assert_eq!(
            format!("{}", err),
            "Plugboard symbol 'A' is wired more than once"
        );
    }

    #[test]
    fn test_display_duplicate_rotor() {
        let err = EnigmaError::DuplicateRotor(RotorType::III);
        assert_eq!(
            format!("{}", err),
            "Rotor III is mounted in more than one slot"
        );
    }

    #[test]
    fn test_display_malformed_catalog() {
        let err = EnigmaError::MalformedCatalog { line: 17 };
        assert_eq!(format!("{}", err), "Malformed signature catalog at line 17");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            EnigmaError::NonBijectiveWiring,
            EnigmaError::NonBijectiveWiring
        );
        assert_ne!(
            EnigmaError::PlugboardConflict('A'),
            EnigmaError::PlugboardConflict('B')
        );
    }

    #[test]
    fn test_error_clone() {
        let err = EnigmaError::UnknownRotor("VI".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
