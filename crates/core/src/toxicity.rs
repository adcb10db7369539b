//! Tox21 assay data: genes, cell lines, assays, molecules and activity results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Effect a compound has on an assay target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TargetModeOfAction {
    Agonist,
    Antagonist,
    Permeabilization,
    Inhibition,
    Activation,
}

impl TargetModeOfAction {
    pub const ALL_VARIANTS_STR: &'static str =
        "agonist|antagonist|permeabilization|inhibition|activation";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Agonist => "agonist",
            Self::Antagonist => "antagonist",
            Self::Permeabilization => "permeabilization",
            Self::Inhibition => "inhibition",
            Self::Activation => "activation",
        }
    }
}

impl fmt::Display for TargetModeOfAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetModeOfAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "agonist" => Ok(Self::Agonist),
            "antagonist" => Ok(Self::Antagonist),
            "permeabilization" => Ok(Self::Permeabilization),
            "inhibition" => Ok(Self::Inhibition),
            "activation" => Ok(Self::Activation),
            other => Err(CoreError::InvalidTag {
                field: "target mode of action",
                value: other.to_owned(),
                expected: Self::ALL_VARIANTS_STR,
            }),
        }
    }
}

/// Outcome of a molecule in an assay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Active,
    Inactive,
    Inconclusive,
}

impl Activity {
    pub const ALL_VARIANTS_STR: &'static str = "active|inactive|inconclusive";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Inconclusive => "inconclusive",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "inconclusive" => Ok(Self::Inconclusive),
            other => Err(CoreError::InvalidTag {
                field: "activity",
                value: other.to_owned(),
                expected: Self::ALL_VARIANTS_STR,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub id: i64,
    pub name: String,
    /// UniProt accession number.
    pub uniprot_id: Option<i64>,
}

/// Cell line used in an assay, with its ontology identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentalCellLine {
    pub id: i64,
    pub name: String,
    /// Cell Line Ontology id of the experimental cell line.
    pub experimental_cell_clo_id: String,
    /// Cell the line was modified from.
    pub cell: Option<String>,
    pub cell_clo_id: Option<String>,
    pub cellosaurus_id: Option<String>,
    pub organism: Option<String>,
    pub organism_taxon_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentalCellLineInput {
    pub name: String,
    pub experimental_cell_clo_id: String,
    pub cell: Option<String>,
    pub cell_clo_id: Option<String>,
    pub cellosaurus_id: Option<String>,
    pub organism: Option<String>,
    pub organism_taxon_id: Option<i64>,
}

/// A Tox21 reporter assay or its paired counter screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToxAssay {
    pub id: i64,
    /// Reporter assay or counter screen.
    pub assay_type: String,
    /// Shared by a reporter and its counter screen.
    pub pair_id: Option<i64>,
    pub pubchem_aid: Option<i64>,
    pub tox21_aid: Option<i64>,
    pub reporter_gene_assay: Option<String>,
    pub exp_cell_line_id: i64,
    pub gene_id: Option<i64>,
    pub target: String,
    pub target_effect: String,
    pub target_mode_of_action: TargetModeOfAction,
    pub kit: Option<String>,
    pub physical_detection_method: Option<String>,
    pub detection_instrument: Option<String>,
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToxAssayInput {
    pub assay_type: String,
    pub pair_id: Option<i64>,
    pub pubchem_aid: Option<i64>,
    pub tox21_aid: Option<i64>,
    pub reporter_gene_assay: Option<String>,
    pub exp_cell_line_id: i64,
    pub gene_id: Option<i64>,
    pub target: String,
    pub target_effect: String,
    pub target_mode_of_action: TargetModeOfAction,
    pub kit: Option<String>,
    pub physical_detection_method: Option<String>,
    pub detection_instrument: Option<String>,
    pub definition: Option<String>,
}

impl ToxAssayInput {
    #[must_use]
    pub fn new(
        assay_type: impl Into<String>,
        exp_cell_line_id: i64,
        target: impl Into<String>,
        target_effect: impl Into<String>,
        target_mode_of_action: TargetModeOfAction,
    ) -> Self {
        Self {
            assay_type: assay_type.into(),
            pair_id: None,
            pubchem_aid: None,
            tox21_aid: None,
            reporter_gene_assay: None,
            exp_cell_line_id,
            gene_id: None,
            target: target.into(),
            target_effect: target_effect.into(),
            target_mode_of_action,
            kit: None,
            physical_detection_method: None,
            detection_instrument: None,
            definition: None,
        }
    }
}

/// A compound tested in Tox21.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tox21Molecule {
    pub id: i64,
    pub pubchem_aid: Option<i64>,
    /// A compound can carry several Tox21 substance ids.
    pub tox21_sid: Vec<i64>,
    pub smiles: String,
    pub fingerprint: Option<serde_json::Value>,
    /// Cluster from Cooper and Schürer, Molecules 24(8):1604 (2019).
    pub cluster: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tox21MoleculeInput {
    pub pubchem_aid: Option<i64>,
    pub tox21_sid: Vec<i64>,
    pub smiles: String,
    pub fingerprint: Option<serde_json::Value>,
    pub cluster: Option<i64>,
}

/// Activity of one molecule in one assay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tox21Data {
    pub id: i64,
    pub molecule_id: i64,
    pub assay_id: i64,
    pub activity: Activity,
    pub pac50_val: Option<f64>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tox21DataInput {
    pub molecule_id: i64,
    pub assay_id: i64,
    pub activity: Activity,
    pub pac50_val: Option<f64>,
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_tags_round_trip() {
        for activity in [Activity::Active, Activity::Inactive, Activity::Inconclusive] {
            assert_eq!(activity.as_str().parse::<Activity>().unwrap(), activity);
        }
        assert!("maybe".parse::<Activity>().is_err());
    }

    #[test]
    fn mode_of_action_rejects_unknown() {
        assert_eq!("inhibition".parse::<TargetModeOfAction>().unwrap(), TargetModeOfAction::Inhibition);
        assert!("Agonist".parse::<TargetModeOfAction>().is_err());
    }
}
