//! Machine: three rotors, a reflector, and a plugboard on one signal path.
//!
//! The machine owns the stepping protocol across an input stream,
//! including the historical double-stepping anomaly: when the medium
//! rotor sits at its turnover, a keystroke advances the slow rotor *and*
//! the medium rotor itself. Stepping happens before every symbol is
//! transformed, the first included.
//!
//! The full path for one symbol is
//!
//! ```text
//! plugboard → fast → medium → slow → reflector → slow⁻¹ → medium⁻¹ → fast⁻¹ → plugboard
//! ```
//!
//! Because the reflector is a fixed-point-free involution and every
//! other stage is undone on the return leg, enciphering is an involution
//! under matched settings: a fresh machine with the same configuration
//! turns the ciphertext back into the plaintext.

use crate::alphabet::{to_char, to_index};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::rotor::{Direction, Rotor};
use crate::wiring::{RotorType, REFLECTOR_WIRING};
use std::fmt;
use std::str::FromStr;

/// A complete machine setting: rotor selection, plugboard pairs, ring
/// letters, and initial window letters.
///
/// Plain data; validation happens in [`Machine::build`]. The ordering
/// derives field by field (slow, medium, fast, pairs, rings, windows),
/// which is what the catalog relies on for deterministic aggregation.
///
/// The text form round-trips through [`fmt::Display`] and [`FromStr`]:
/// `II I IV - AAA DLN`, with plugboard pairs rendered as dot-joined
/// two-letter groups (`AB.XZ`) or `-` when empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MachineConfig {
    /// Left (slow) rotor.
    pub slow: RotorType,
    /// Middle (medium) rotor.
    pub medium: RotorType,
    /// Right (fast) rotor.
    pub fast: RotorType,
    /// Plugboard letter pairs; empty for no plugboard.
    pub plugboard_pairs: Vec<(char, char)>,
    /// Ring letters, slow to fast.
    pub rings: [char; 3],
    /// Initial window letters, slow to fast.
    pub windows: [char; 3],
}

impl MachineConfig {
    /// Creates a configuration from all of its parts.
    pub fn new(
        slow: RotorType,
        medium: RotorType,
        fast: RotorType,
        plugboard_pairs: Vec<(char, char)>,
        rings: [char; 3],
        windows: [char; 3],
    ) -> Self {
        MachineConfig {
            slow,
            medium,
            fast,
            plugboard_pairs,
            rings,
            windows,
        }
    }

    /// Creates a configuration with no plugboard and ring "AAA", the
    /// shape the catalog enumerates.
    pub fn basic(slow: RotorType, medium: RotorType, fast: RotorType, windows: [char; 3]) -> Self {
        Self::new(slow, medium, fast, Vec::new(), ['A', 'A', 'A'], windows)
    }
}

impl fmt::Display for MachineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ", self.slow, self.medium, self.fast)?;
        if self.plugboard_pairs.is_empty() {
            f.write_str("-")?;
        } else {
            for (i, (a, b)) in self.plugboard_pairs.iter().enumerate() {
                if i > 0 {
                    f.write_str(".")?;
                }
                write!(
                    f,
                    "{}{}",
                    a.to_ascii_uppercase(),
                    b.to_ascii_uppercase()
                )?;
            }
        }
        write!(
            f,
            " {} {}",
            self.rings.iter().collect::<String>(),
            self.windows.iter().collect::<String>()
        )
    }
}

impl FromStr for MachineConfig {
    type Err = EnigmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EnigmaError::MalformedConfig(s.to_string());
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(malformed());
        }
        let slow: RotorType = fields[0].parse()?;
        let medium: RotorType = fields[1].parse()?;
        let fast: RotorType = fields[2].parse()?;

        let plugboard_pairs = if fields[3] == "-" {
            Vec::new()
        } else {
            let mut pairs = Vec::new();
            for group in fields[3].split('.') {
                let mut chars = group.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(a), Some(b), None) => pairs.push((a, b)),
                    _ => return Err(malformed()),
                }
            }
            pairs
        };

        let triple = |field: &str| -> Result<[char; 3], EnigmaError> {
            let letters: Vec<char> = field.chars().collect();
            match letters.as_slice() {
                [a, b, c] => Ok([*a, *b, *c]),
                _ => Err(malformed()),
            }
        };
        let rings = triple(fields[4])?;
        let windows = triple(fields[5])?;

        Ok(MachineConfig::new(
            slow,
            medium,
            fast,
            plugboard_pairs,
            rings,
            windows,
        ))
    }
}

/// The stage trail one symbol leaves behind, captured after stepping.
///
/// `entry` is the symbol after the input plugboard pass; `stages` holds
/// the letter after each of the seven wheel crossings (fast, medium,
/// slow, reflector, slow⁻¹, medium⁻¹, fast⁻¹); `output` is the letter
/// after the final plugboard pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTrace {
    /// The input symbol, uppercased.
    pub input: char,
    /// After the input plugboard pass.
    pub entry: char,
    /// After each wheel crossing, entry side first.
    pub stages: [char; 7],
    /// The enciphered symbol.
    pub output: char,
}

/// Diagnostic record of one traced encipherment.
///
/// `windows` starts with the window triple before the first keystroke
/// and gains one entry per symbol, captured after stepping: the
/// sequence the historical references print (e.g. `AAU AAV ABW ABX`).
/// This is debug output, not a stability contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncipherTrace {
    /// The enciphered message.
    pub output: String,
    /// Window triples: initial state, then one per symbol.
    pub windows: Vec<String>,
    /// Per-symbol stage trails.
    pub symbols: Vec<SymbolTrace>,
}

/// Three rotors, a reflector, and a plugboard composed into one signal
/// path, with the stepping protocol applied per symbol.
///
/// Rotor offsets mutate as symbols are fed, so a machine must not be
/// shared across concurrent encipher calls; build a fresh machine from
/// the same [`MachineConfig`] to repeat a run.
#[derive(Debug, Clone)]
pub struct Machine {
    slow: Rotor,
    medium: Rotor,
    fast: Rotor,
    reflector: Rotor,
    plugboard: Plugboard,
}

impl Machine {
    /// Builds a machine from a configuration.
    ///
    /// The reflector never steps and is mounted at a fixed 'A' window.
    ///
    /// # Errors
    /// Returns [`EnigmaError::DuplicateRotor`] if the three rotor types
    /// are not pairwise distinct, [`EnigmaError::PlugboardConflict`] for
    /// ambiguous plugboard wiring, or [`EnigmaError::InvalidSymbol`] for
    /// ring/window letters outside the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sig::{Machine, MachineConfig, RotorType};
    ///
    /// let config = MachineConfig::basic(
    ///     RotorType::I,
    ///     RotorType::II,
    ///     RotorType::III,
    ///     ['H', 'D', 'X'],
    /// );
    /// let mut machine = Machine::build(&config).unwrap();
    /// assert_eq!(machine.encipher("ABCDEF").unwrap(), "KQGJAL");
    /// ```
    pub fn build(config: &MachineConfig) -> Result<Self, EnigmaError> {
        if config.slow == config.medium || config.slow == config.fast {
            return Err(EnigmaError::DuplicateRotor(config.slow));
        }
        if config.medium == config.fast {
            return Err(EnigmaError::DuplicateRotor(config.medium));
        }

        let mount = |rotor_type: RotorType, slot: usize| -> Result<Rotor, EnigmaError> {
            Rotor::new(
                rotor_type.wiring(),
                rotor_type.turnovers(),
                config.rings[slot],
                config.windows[slot],
            )
        };

        Ok(Machine {
            slow: mount(config.slow, 0)?,
            medium: mount(config.medium, 1)?,
            fast: mount(config.fast, 2)?,
            reflector: Rotor::new(REFLECTOR_WIRING, "", 'A', 'A')?,
            plugboard: Plugboard::new(&config.plugboard_pairs)?,
        })
    }

    /// Executes the stepping protocol for one keystroke.
    ///
    /// Both turnover levers are read before any rotor moves; the medium
    /// lever advancing the medium rotor itself is the double-step
    /// anomaly.
    fn step(&mut self) {
        let fast_lever = self.fast.at_turnover();
        let medium_lever = self.medium.at_turnover();
        if medium_lever {
            self.slow.advance();
        }
        if medium_lever || fast_lever {
            self.medium.advance();
        }
        self.fast.advance();
    }

    /// Feeds one symbol index through the machine: step, then the full
    /// signal path.
    pub(crate) fn press_key(&mut self, index: u8) -> u8 {
        self.step();
        let mut x = self.plugboard.transform(index);
        x = self.fast.transform(x, Direction::Forward);
        x = self.medium.transform(x, Direction::Forward);
        x = self.slow.transform(x, Direction::Forward);
        x = self.reflector.transform(x, Direction::Forward);
        x = self.slow.transform(x, Direction::Inverse);
        x = self.medium.transform(x, Direction::Inverse);
        x = self.fast.transform(x, Direction::Inverse);
        self.plugboard.transform(x)
    }

    /// As [`press_key`](Self::press_key), recording every stage.
    fn press_key_traced(&mut self, index: u8) -> (u8, SymbolTrace) {
        self.step();
        let entry = self.plugboard.transform(index);
        let mut stages = [0u8; 7];
        let mut x = entry;
        x = self.fast.transform(x, Direction::Forward);
        stages[0] = x;
        x = self.medium.transform(x, Direction::Forward);
        stages[1] = x;
        x = self.slow.transform(x, Direction::Forward);
        stages[2] = x;
        x = self.reflector.transform(x, Direction::Forward);
        stages[3] = x;
        x = self.slow.transform(x, Direction::Inverse);
        stages[4] = x;
        x = self.medium.transform(x, Direction::Inverse);
        stages[5] = x;
        x = self.fast.transform(x, Direction::Inverse);
        stages[6] = x;
        let output = self.plugboard.transform(x);

        let trace = SymbolTrace {
            input: to_char(index),
            entry: to_char(entry),
            stages: stages.map(to_char),
            output: to_char(output),
        };
        (output, trace)
    }

    /// Returns the current window triple, slow rotor first.
    pub fn windows(&self) -> String {
        [
            self.slow.window_letter(),
            self.medium.window_letter(),
            self.fast.window_letter(),
        ]
        .iter()
        .collect()
    }

    /// Enciphers a message, stepping before each symbol.
    ///
    /// Case-insensitive; output is uppercase. The whole message is
    /// validated before any rotor moves, so a rejected message leaves
    /// the machine state untouched.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] if the message contains a
    /// character outside the 26-letter alphabet.
    pub fn encipher(&mut self, message: &str) -> Result<String, EnigmaError> {
        let indices = Self::validate(message)?;
        Ok(indices
            .into_iter()
            .map(|i| to_char(self.press_key(i)))
            .collect())
    }

    /// Enciphers a message while recording the window sequence and the
    /// per-symbol stage trails.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSymbol`] as [`encipher`](Self::encipher).
    pub fn encipher_traced(&mut self, message: &str) -> Result<EncipherTrace, EnigmaError> {
        let indices = Self::validate(message)?;
        let mut output = String::with_capacity(indices.len());
        let mut windows = vec![self.windows()];
        let mut symbols = Vec::with_capacity(indices.len());
        for index in indices {
            let (out, trace) = self.press_key_traced(index);
            windows.push(self.windows());
            output.push(to_char(out));
            symbols.push(trace);
        }
        Ok(EncipherTrace {
            output,
            windows,
            symbols,
        })
    }

    fn validate(message: &str) -> Result<Vec<u8>, EnigmaError> {
        message
            .chars()
            .map(|ch| to_index(ch).ok_or(EnigmaError::InvalidSymbol(ch)))
            .collect()
    }
}
