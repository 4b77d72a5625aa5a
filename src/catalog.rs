//! Configuration enumerator and the signature → configurations catalog.
//!
//! Enumerates every ordered triple of distinct rotor types (60) against
//! every initial window triple (26³ = 17,576), with no plugboard and
//! ring "AAA", computes each configuration's [`Signature`], and groups
//! the configurations by signature into a [`SignatureIndex`].
//!
//! Each of the 1,054,560 evaluations is independent, so the outer loop
//! runs on the rayon thread pool; per-order results are collected in
//! enumeration order before the sequential merge, so the catalog is
//! identical regardless of thread count. One line of the persisted form
//! reads
//!
//! ```text
//! 2,2,2,2,2,2,2,2,2,2,2,2,2:I II III - AAA AAA;I II III - AAA AAB
//! ```

use crate::error::EnigmaError;
use crate::machine::MachineConfig;
use crate::signature::{compute_signature, Signature};
use crate::wiring::RotorType;
use itertools::{iproduct, Itertools};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Ordered triples of distinct rotor types: 5 × 4 × 3.
pub const ROTOR_ORDERS: usize = 60;

/// Initial window triples per rotor order: 26³.
pub const WINDOW_POSITIONS: usize = 17_576;

/// Total configurations in the full catalog.
pub const TOTAL_CONFIGS: usize = ROTOR_ORDERS * WINDOW_POSITIONS;

/// Mapping from signature to every configuration producing it.
///
/// Iteration is deterministic: groups are ordered by signature, and
/// configurations within a group keep enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureIndex {
    groups: BTreeMap<Signature, Vec<MachineConfig>>,
}

impl SignatureIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a configuration to its signature's group.
    pub fn insert(&mut self, signature: Signature, config: MachineConfig) {
        self.groups.entry(signature).or_default().push(config);
    }

    /// Number of distinct signatures.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of configurations across all groups.
    pub fn total_configs(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// The configurations grouped under a signature, if any.
    pub fn get(&self, signature: &Signature) -> Option<&[MachineConfig]> {
        self.groups.get(signature).map(Vec::as_slice)
    }

    /// Iterates groups in signature order.
    pub fn iter(&self) -> impl Iterator<Item = (&Signature, &[MachineConfig])> {
        self.groups.iter().map(|(sig, cfgs)| (sig, cfgs.as_slice()))
    }

    /// The signature with the most configurations and its group size.
    ///
    /// Ties resolve to the smallest signature. `None` for an empty
    /// index.
    pub fn largest_group(&self) -> Option<(&Signature, usize)> {
        self.groups
            .iter()
            .map(|(sig, cfgs)| (sig, cfgs.len()))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    }

    /// Renders the index in its persisted line format: one line per
    /// signature, `<signature>:<config>;<config>;...`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (signature, configs) in self.iter() {
            out.push_str(&signature.to_string());
            out.push(':');
            for (i, config) in configs.iter().enumerate() {
                if i > 0 {
                    out.push(';');
                }
                out.push_str(&config.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// Parses the persisted line format.
    ///
    /// All-or-nothing: the first malformed line fails the whole parse,
    /// and no partial index is returned.
    ///
    /// # Errors
    /// Returns [`EnigmaError::MalformedCatalog`] with the 1-based line
    /// number of the first line that does not parse.
    pub fn from_text(text: &str) -> Result<Self, EnigmaError> {
        let mut index = SignatureIndex::new();
        for (number, line) in text.lines().enumerate() {
            let line_err = EnigmaError::MalformedCatalog { line: number + 1 };
            if line.trim().is_empty() {
                continue;
            }
            let (sig_text, configs_text) = line.split_once(':').ok_or(line_err.clone())?;
            let signature: Signature = sig_text.parse().map_err(|_| line_err.clone())?;
            for config_text in configs_text.split(';') {
                let config: MachineConfig =
                    config_text.parse().map_err(|_| line_err.clone())?;
                index.insert(signature.clone(), config);
            }
        }
        Ok(index)
    }

    /// Writes the index to a file in the persisted line format.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        info!(
            path = %path.as_ref().display(),
            groups = self.group_count(),
            "saving signature catalog"
        );
        fs::write(path, self.to_text())
    }

    /// Loads an index from a file.
    ///
    /// All-or-nothing per file: a malformed line surfaces as
    /// `InvalidData` and nothing is returned.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

/// Every ordered triple of distinct rotor types, lexicographic by name.
pub fn rotor_orders() -> Vec<(RotorType, RotorType, RotorType)> {
    RotorType::ALL
        .iter()
        .copied()
        .permutations(3)
        .map(|p| (p[0], p[1], p[2]))
        .collect()
}

/// Computes the signature of every window position for one rotor order,
/// in lexicographic position order.
///
/// # Errors
/// Propagates the first configuration error (cannot occur for distinct
/// rotor types, which is all [`rotor_orders`] yields).
pub fn enumerate_order(
    slow: RotorType,
    medium: RotorType,
    fast: RotorType,
) -> Result<Vec<(Signature, MachineConfig)>, EnigmaError> {
    debug!(%slow, %medium, %fast, "enumerating rotor order");
    let mut entries = Vec::with_capacity(WINDOW_POSITIONS);
    for (a, b, c) in iproduct!('A'..='Z', 'A'..='Z', 'A'..='Z') {
        let config = MachineConfig::basic(slow, medium, fast, [a, b, c]);
        let signature = compute_signature(&config)?;
        entries.push((signature, config));
    }
    Ok(entries)
}

/// Builds the full signature catalog: 60 rotor orders × 26³ window
/// positions, ring "AAA", no plugboard.
///
/// Rotor orders are evaluated in parallel; the merge into the index is
/// sequential and in enumeration order, so the result is reproducible
/// across runs and thread counts.
///
/// # Errors
/// Propagates the first configuration error (none occur for the
/// enumerated space).
pub fn enumerate_all() -> Result<SignatureIndex, EnigmaError> {
    let orders = rotor_orders();
    info!(
        orders = orders.len(),
        positions = WINDOW_POSITIONS,
        "enumerating signature catalog"
    );

    let per_order: Vec<Result<Vec<(Signature, MachineConfig)>, EnigmaError>> = orders
        .par_iter()
        .map(|&(slow, medium, fast)| enumerate_order(slow, medium, fast))
        .collect();

    let mut index = SignatureIndex::new();
    for result in per_order {
        for (signature, config) in result? {
            index.insert(signature, config);
        }
    }
    info!(
        groups = index.group_count(),
        configs = index.total_configs(),
        "signature catalog complete"
    );
    Ok(index)
}
