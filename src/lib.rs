//! Enigma rotor-machine simulator and cycle-signature engine.
//!
//! Simulates a three-rotor Enigma (rotors I–V, reflector B, plugboard)
//! with exact stepping mechanics, including the historical
//! double-stepping anomaly, and classifies machine configurations by
//! the disjoint-cycle signature of the letter substitution they induce
//! on the first symbol of a message.
//!
//! # Architecture
//!
//! ```text
//! wiring      (static rotor/reflector tables — permutations with inverses)
//!     ↓ feeds
//! Rotor       (one wheel — fixed wiring, rotating offset, turnover lookahead)
//!     ↓ composed with Plugboard by
//! Machine     (stepping protocol + nine-stage signal path per symbol)
//!     ↓ probed 26 times per configuration by
//! signature   (cycle decomposition of the induced permutation)
//!     ↓ driven over 60 × 26³ configurations by
//! catalog     (parallel enumeration → SignatureIndex → persisted text)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher with matched settings:
//!
//! ```
//! use enigma_sig::{Machine, MachineConfig, RotorType};
//!
//! let config = MachineConfig::basic(
//!     RotorType::II,
//!     RotorType::I,
//!     RotorType::IV,
//!     ['D', 'L', 'N'],
//! );
//!
//! let mut encoder = Machine::build(&config).unwrap();
//! let ciphertext = encoder.encipher("ADMIRALGRACEMURRAYHOPPER").unwrap();
//!
//! let mut decoder = Machine::build(&config).unwrap();
//! assert_eq!(decoder.encipher(&ciphertext).unwrap(), "ADMIRALGRACEMURRAYHOPPER");
//! ```
//!
//! Compute a configuration's signature:
//!
//! ```
//! use enigma_sig::{compute_signature, MachineConfig, RotorType};
//!
//! let config = MachineConfig::basic(
//!     RotorType::I,
//!     RotorType::II,
//!     RotorType::III,
//!     ['A', 'A', 'Z'],
//! );
//! let signature = compute_signature(&config).unwrap();
//! assert!(signature.lengths().iter().all(|&len| len % 2 == 0));
//! ```

#![deny(clippy::all)]

pub mod error;

pub mod alphabet;
pub mod catalog;
mod machine;
mod plugboard;
mod rotor;
pub mod signature;
mod wiring;

pub use catalog::{enumerate_all, SignatureIndex};
pub use error::EnigmaError;
pub use machine::{EncipherTrace, Machine, MachineConfig, SymbolTrace};
pub use signature::{compute_signature, first_symbol_permutation, Signature};
pub use wiring::RotorType;
