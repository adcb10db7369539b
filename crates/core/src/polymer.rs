//! Polymers, property definitions, measured property values and applications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::structure::require_structure;

/// A polymer. `smiles` and `rid` are unique when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polymer {
    pub id: i64,
    /// Polymer id.
    pub pid: Option<String>,
    /// Ramprasad group polymer id.
    pub rid: Option<String>,
    pub smiles: Option<String>,
    /// Canonicalized SMILES, kept apart because canonicalization can drop
    /// conformer information (cis/trans).
    pub canonical_smiles: Option<String>,
    pub fingerprint: Option<serde_json::Value>,
    /// Whether the polymer is known, e.g. `"known"`.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolymerInput {
    pub pid: Option<String>,
    pub rid: Option<String>,
    pub smiles: Option<String>,
    pub canonical_smiles: Option<String>,
    pub fingerprint: Option<serde_json::Value>,
    pub category: Option<String>,
}

impl PolymerInput {
    /// # Errors
    /// Returns `CoreError::InvalidInput` if `smiles` is blank.
    pub fn with_smiles(smiles: impl Into<String>) -> Result<Self> {
        Ok(Self { smiles: Some(require_structure("smiles", smiles.into())?), ..Self::default() })
    }

    #[must_use]
    pub fn pid(mut self, pid: impl Into<String>) -> Self {
        self.pid = Some(pid.into());
        self
    }

    #[must_use]
    pub fn rid(mut self, rid: impl Into<String>) -> Self {
        self.rid = Some(rid.into());
        self
    }

    #[must_use]
    pub fn canonical_smiles(mut self, smiles: impl Into<String>) -> Self {
        self.canonical_smiles = Some(smiles.into());
        self
    }

    #[must_use]
    pub fn fingerprint(mut self, fingerprint: serde_json::Value) -> Self {
        self.fingerprint = Some(fingerprint);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A measurable polymer property (glass transition temperature, density, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub name: String,
    /// Shorthand, typically a greek letter.
    pub short_name: Option<String>,
    pub unit: Option<String>,
    /// LaTeX symbol used when plotting.
    pub plot_symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInput {
    pub name: String,
    pub short_name: Option<String>,
    pub unit: Option<String>,
    pub plot_symbol: Option<String>,
}

/// Kind of error reported alongside a property value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyErrorType {
    /// Standard deviation.
    Sd,
    /// Standard error of the mean.
    Sem,
    Variance,
}

impl PropertyErrorType {
    pub const ALL_VARIANTS_STR: &'static str = "sd|sem|variance";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sd => "sd",
            Self::Sem => "sem",
            Self::Variance => "variance",
        }
    }
}

impl fmt::Display for PropertyErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyErrorType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sd" => Ok(Self::Sd),
            "sem" => Ok(Self::Sem),
            "variance" => Ok(Self::Variance),
            other => Err(CoreError::InvalidTag {
                field: "property error type",
                value: other.to_owned(),
                expected: Self::ALL_VARIANTS_STR,
            }),
        }
    }
}

/// A property value for one polymer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolymerProperty {
    pub id: i64,
    pub pol_id: i64,
    pub property_id: i64,
    pub value: f64,
    /// `exp`, `dft`, `md`, `ml`, ...
    pub method: Option<String>,
    pub reference: Option<String>,
    pub note: Option<String>,
    pub error_value: Option<f64>,
    pub error_type: Option<PropertyErrorType>,
    /// Conditions used to obtain the value.
    pub conditions: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolymerPropertyInput {
    pub pol_id: i64,
    pub property_id: i64,
    pub value: f64,
    pub method: Option<String>,
    pub reference: Option<String>,
    pub note: Option<String>,
    pub error_value: Option<f64>,
    pub error_type: Option<PropertyErrorType>,
    pub conditions: Option<serde_json::Value>,
}

impl PolymerPropertyInput {
    #[must_use]
    pub const fn new(pol_id: i64, property_id: i64, value: f64) -> Self {
        Self {
            pol_id,
            property_id,
            value,
            method: None,
            reference: None,
            note: None,
            error_value: None,
            error_type: None,
            conditions: None,
        }
    }

    #[must_use]
    pub fn error(mut self, value: f64, error_type: PropertyErrorType) -> Self {
        self.error_value = Some(value);
        self.error_type = Some(error_type);
        self
    }
}

/// Where a polymer is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolymerApplication {
    pub id: i64,
    pub pol_id: i64,
    pub application: String,
    /// Food packaging, automobiles, ...
    pub category: String,
    pub note: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolymerApplicationInput {
    pub pol_id: i64,
    pub application: String,
    pub category: String,
    pub note: Option<String>,
    pub reference: Option<String>,
}
