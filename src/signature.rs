//! Signature engine: cycle structure of the first-symbol substitution.
//!
//! A fixed machine configuration induces a permutation on the alphabet:
//! the map from each possible first symbol of a message to its
//! enciphered image. Because rotor state advances as symbols are fed,
//! each of the 26 probes runs on an independently fresh machine. The
//! permutation's disjoint-cycle lengths, sorted ascending, form the
//! configuration's [`Signature`], the grouping key of the catalog. Two
//! configurations sharing a signature are indistinguishable by this
//! test.

use crate::alphabet::ALPHABET_LEN;
use crate::error::EnigmaError;
use crate::machine::{Machine, MachineConfig};
use std::fmt;
use std::str::FromStr;

/// Sorted cycle lengths of a configuration's first-symbol permutation.
///
/// Lengths are ascending and sum to 26. The reflector makes the
/// first-symbol substitution a fixed-point-free involution, so every
/// length is even. Text form is comma-joined (`2,2,2,...`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// The cycle lengths, ascending.
    pub fn lengths(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, len) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", len)?;
        }
        Ok(())
    }
}

impl FromStr for Signature {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EnigmaError::MalformedConfig(s.to_string());
        let mut lengths = Vec::new();
        for part in s.split(',') {
            let len: u8 = part.parse().map_err(|_| malformed())?;
            lengths.push(len);
        }
        // A signature is ascending, positive, and sums to 26.
        let ascending = lengths.windows(2).all(|w| w[0] <= w[1]);
        let total: u32 = lengths.iter().map(|&l| u32::from(l)).sum();
        if lengths.is_empty() || lengths[0] == 0 || !ascending || total != ALPHABET_LEN as u32 {
            return Err(malformed());
        }
        Ok(Signature(lengths))
    }
}

/// Computes the permutation a configuration applies to the first symbol
/// of a message.
///
/// Probe `i` builds a fresh machine and feeds the single symbol `i`;
/// entry `i` of the result is its image. The result is a bijection over
/// the 26 indices (the machine is a composition of bijections).
///
/// # Errors
/// Returns a configuration error if the machine cannot be built.
pub fn first_symbol_permutation(
    config: &MachineConfig,
) -> Result<[u8; ALPHABET_LEN], EnigmaError> {
    let mut image = [0u8; ALPHABET_LEN];
    for (i, slot) in image.iter_mut().enumerate() {
        let mut machine = Machine::build(config)?;
        *slot = machine.press_key(i as u8);
    }
    Ok(image)
}

/// Computes a configuration's signature.
///
/// Decomposes the first-symbol permutation into disjoint cycles by
/// walking unvisited symbols until each walk returns to its start, then
/// sorts the cycle lengths ascending.
///
/// # Errors
/// Returns a configuration error if the machine cannot be built.
///
/// # Examples
///
/// ```
/// use enigma_sig::{compute_signature, MachineConfig, RotorType};
///
/// let config = MachineConfig::basic(
///     RotorType::I,
///     RotorType::II,
///     RotorType::III,
///     ['A', 'A', 'A'],
/// );
/// let signature = compute_signature(&config).unwrap();
/// assert_eq!(signature.lengths().iter().map(|&l| u32::from(l)).sum::<u32>(), 26);
/// ```
pub fn compute_signature(config: &MachineConfig) -> Result<Signature, EnigmaError> {
    let image = first_symbol_permutation(config)?;
    let mut lengths = cycle_lengths(&image);
    lengths.sort_unstable();
    Ok(Signature(lengths))
}

/// Disjoint-cycle lengths of a permutation over the 26 indices.
fn cycle_lengths(permutation: &[u8; ALPHABET_LEN]) -> Vec<u8> {
    let mut visited = [false; ALPHABET_LEN];
    let mut lengths = Vec::new();
    for start in 0..ALPHABET_LEN {
        if visited[start] {
            continue;
        }
        let mut length = 0u8;
        let mut current = start;
        while !visited[current] {
            visited[current] = true;
            length += 1;
            current = permutation[current] as usize;
        }
        lengths.push(length);
    }
    lengths
}
