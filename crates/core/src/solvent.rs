//! Solvents and polymer/solvent solubility measurements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::structure::require_structure;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solvent {
    pub id: i64,
    pub smiles: String,
    /// PolymerGenome molecular fingerprint.
    pub fingerprint: Option<serde_json::Value>,
    /// 1024-dimension MAP4 fingerprint.
    pub map4_fingerprint: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolventInput {
    pub smiles: String,
    pub fingerprint: Option<serde_json::Value>,
    pub map4_fingerprint: Option<serde_json::Value>,
}

impl SolventInput {
    /// # Errors
    /// Returns `CoreError::InvalidInput` if `smiles` is blank.
    pub fn new(smiles: impl Into<String>) -> Result<Self> {
        Ok(Self {
            smiles: require_structure("smiles", smiles.into())?,
            fingerprint: None,
            map4_fingerprint: None,
        })
    }

    #[must_use]
    pub fn fingerprint(mut self, fingerprint: serde_json::Value) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }

    #[must_use]
    pub fn map4_fingerprint(mut self, fingerprint: serde_json::Value) -> Self {
        self.map4_fingerprint = Some(fingerprint);
        self
    }
}

/// Whether a solvent dissolves a polymer under the recorded conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolubilityData {
    pub id: i64,
    /// Literature reference, person, or test name.
    pub reference: String,
    pub date_added: DateTime<Utc>,
    pub pol_id: i64,
    pub sol_id: i64,
    /// Good, bad or partial solvent.
    pub solubility: String,
    pub date_of_test: Option<DateTime<Utc>>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    /// Polydispersity index range.
    pub pdi_min: Option<f64>,
    pub pdi_max: Option<f64>,
    pub pol_mw_min: Option<f64>,
    pub pol_mw_max: Option<f64>,
    /// Number or weight average.
    pub pol_mw_type: Option<String>,
    pub conc_mg_per_ml: Option<f64>,
    /// CSST file the measurement came from.
    pub csst_file_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolubilityDataInput {
    pub reference: String,
    pub pol_id: i64,
    pub sol_id: i64,
    pub solubility: String,
    pub date_of_test: Option<DateTime<Utc>>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub pdi_min: Option<f64>,
    pub pdi_max: Option<f64>,
    pub pol_mw_min: Option<f64>,
    pub pol_mw_max: Option<f64>,
    pub pol_mw_type: Option<String>,
    pub conc_mg_per_ml: Option<f64>,
    pub csst_file_id: Option<i64>,
}

impl SolubilityDataInput {
    #[must_use]
    pub fn new(
        pol_id: i64,
        sol_id: i64,
        solubility: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            pol_id,
            sol_id,
            solubility: solubility.into(),
            date_of_test: None,
            temp_min: None,
            temp_max: None,
            pdi_min: None,
            pdi_max: None,
            pol_mw_min: None,
            pol_mw_max: None,
            pol_mw_type: None,
            conc_mg_per_ml: None,
            csst_file_id: None,
        }
    }

    #[must_use]
    pub fn temperature_range(mut self, min: f64, max: f64) -> Self {
        self.temp_min = Some(min);
        self.temp_max = Some(max);
        self
    }
}
