//! Chemicals, their suppliers and purchase costs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::structure::require_structure;

/// A chemical that polymers can be made from, keyed by its SMILES string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chemical {
    pub id: i64,
    pub smiles: String,
    pub cas: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalInput {
    pub smiles: String,
    pub cas: Option<String>,
}

impl ChemicalInput {
    /// # Errors
    /// Returns `CoreError::InvalidInput` if `smiles` is blank.
    pub fn new(smiles: impl Into<String>) -> Result<Self> {
        Ok(Self { smiles: require_structure("smiles", smiles.into())?, cas: None })
    }

    #[must_use]
    pub fn cas(mut self, cas: impl Into<String>) -> Self {
        self.cas = Some(cas.into());
        self
    }
}

/// Vendor a chemical can be purchased from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalSupplier {
    pub id: i64,
    pub name: String,
    pub site: Option<String>,
}

/// Price of a chemical from one supplier at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalCost {
    pub id: i64,
    pub chemical_id: i64,
    pub supplier_id: i64,
    pub cost: f64,
    pub cost_unit: String,
    pub amount: f64,
    /// Typically `g` or `mg`.
    pub amount_unit: String,
    pub usd_cost_per_gram: f64,
    /// When this price was found.
    pub datetime: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalCostInput {
    pub chemical_id: i64,
    pub supplier_id: i64,
    pub cost: f64,
    pub cost_unit: String,
    pub amount: f64,
    pub amount_unit: String,
    pub usd_cost_per_gram: f64,
    pub datetime: DateTime<Utc>,
    pub note: Option<String>,
}
