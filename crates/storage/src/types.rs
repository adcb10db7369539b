//! Storage types shared across modules

use serde::{Deserialize, Serialize};

/// Row counts of the main catalog tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub chemical_count: u64,
    pub polymer_count: u64,
    pub monomer_count: u64,
    pub solvent_count: u64,
    pub name_count: u64,
    pub reaction_count: u64,
    pub solubility_count: u64,
    pub tox21_data_count: u64,
}

/// Tables counted by [`CatalogStats`], in field order. Name tables are summed separately.
pub(crate) const COUNTED_TABLES: &[&str] = &[
    "chemicals",
    "polymers",
    "monomers",
    "solvents",
    "reactions",
    "solubility_data",
    "tox21_data",
];

impl CatalogStats {
    /// Build from counts in [`COUNTED_TABLES`] order plus the summed name count.
    pub(crate) fn from_counts(counts: &[u64], name_count: u64) -> Self {
        let at = |i: usize| counts.get(i).copied().unwrap_or_default();
        Self {
            chemical_count: at(0),
            polymer_count: at(1),
            monomer_count: at(2),
            solvent_count: at(3),
            name_count,
            reaction_count: at(4),
            solubility_count: at(5),
            tox21_data_count: at(6),
        }
    }
}
