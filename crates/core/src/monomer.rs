//! Monomers.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::structure::require_structure;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monomer {
    pub id: i64,
    pub smiles: String,
    /// Id in the database the monomer was taken from.
    pub reference_id: Option<String>,
    /// Source database (ZINC15, ChEMBL, ...).
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonomerInput {
    pub smiles: String,
    pub reference_id: Option<String>,
    pub reference: Option<String>,
}

impl MonomerInput {
    /// # Errors
    /// Returns `CoreError::InvalidInput` if `smiles` is blank.
    pub fn new(smiles: impl Into<String>) -> Result<Self> {
        Ok(Self { smiles: require_structure("smiles", smiles.into())?, reference_id: None, reference: None })
    }

    #[must_use]
    pub fn reference(mut self, reference: impl Into<String>, reference_id: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self.reference_id = Some(reference_id.into());
        self
    }
}
