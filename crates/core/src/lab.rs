//! Lab-side records: Crystal16 (CSST) files, lab material names and waste statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Metadata of an uploaded Crystal16 solubility (CSST) file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsstFile {
    pub id: i64,
    /// Stored file name, unique.
    pub file_name: String,
    /// File name as uploaded by the user.
    pub original_name: String,
    pub polymers: Vec<String>,
    pub solvents: Vec<String>,
    pub concentrations: Vec<f64>,
    pub date_added: DateTime<Utc>,
    pub stir_rate: f64,
    pub start_of_experiment: DateTime<Utc>,
    /// Crystal16 software version.
    pub version: String,
    pub project: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsstFileInput {
    pub file_name: String,
    pub original_name: String,
    pub polymers: Vec<String>,
    pub solvents: Vec<String>,
    pub concentrations: Vec<f64>,
    pub stir_rate: f64,
    pub start_of_experiment: DateTime<Utc>,
    pub version: String,
    pub project: String,
}

/// What a lab material name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum LabMaterialRef {
    Polymer(i64),
    Solvent(i64),
}

/// Name the Brettmann lab uses for a polymer or solvent. Each polymer or
/// solvent has at most one lab name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabMaterial {
    pub id: i64,
    pub name: String,
    pub material: LabMaterialRef,
}

impl LabMaterial {
    /// Rebuild from the nullable `pol_id` / `sol_id` column pair.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` unless exactly one id is present.
    pub fn from_columns(
        id: i64,
        name: String,
        pol_id: Option<i64>,
        sol_id: Option<i64>,
    ) -> Result<Self> {
        let material = match (pol_id, sol_id) {
            (Some(pol), None) => LabMaterialRef::Polymer(pol),
            (None, Some(sol)) => LabMaterialRef::Solvent(sol),
            _ => {
                return Err(CoreError::InvalidInput(format!(
                    "lab material {id} must reference exactly one of polymer or solvent"
                )));
            },
        };
        Ok(Self { id, name, material })
    }
}

impl LabMaterialRef {
    /// `(pol_id, sol_id)` column values.
    #[must_use]
    pub const fn columns(&self) -> (Option<i64>, Option<i64>) {
        match *self {
            Self::Polymer(id) => (Some(id), None),
            Self::Solvent(id) => (None, Some(id)),
        }
    }
}

/// US containers and packaging waste statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingWaste {
    pub id: i64,
    pub value: Option<i64>,
    pub year: Option<i16>,
    /// Glass, plastic, steel, ...
    pub waste_type: Option<String>,
    /// What happened to the waste.
    pub management_pathway: Option<String>,
    pub reference: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingWasteInput {
    pub value: Option<i64>,
    pub year: Option<i16>,
    pub waste_type: Option<String>,
    pub management_pathway: Option<String>,
    pub reference: Option<String>,
    pub unit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lab_material_needs_exactly_one_reference() {
        assert!(LabMaterial::from_columns(1, "PS-1".into(), Some(3), Some(4)).is_err());
        assert!(LabMaterial::from_columns(1, "PS-1".into(), None, None).is_err());
        let material = LabMaterial::from_columns(1, "THF".into(), None, Some(4)).unwrap();
        assert_eq!(material.material, LabMaterialRef::Solvent(4));
        assert_eq!(material.material.columns(), (None, Some(4)));
    }
}
