//! SMARTS substructure patterns and shared structure-string checks.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Reject blank structure strings (SMILES / SMARTS). The strings are otherwise opaque.
pub(crate) fn require_structure(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(value)
}

/// SMARTS pattern used to look for substructures in SMILES strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Smarts {
    pub id: i64,
    /// Hand-written name of what the pattern looks for.
    pub name: Option<String>,
    pub smarts: String,
    pub description: Option<String>,
    /// Where the pattern was taken from.
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartsInput {
    pub name: Option<String>,
    pub smarts: String,
    pub description: Option<String>,
    pub reference: Option<String>,
}

impl SmartsInput {
    /// # Errors
    /// Returns `CoreError::InvalidInput` if `smarts` is blank.
    pub fn new(smarts: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: None,
            smarts: require_structure("smarts", smarts.into())?,
            description: None,
            reference: None,
        })
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_structure_is_rejected() {
        assert!(SmartsInput::new("   ").is_err());
        assert!(crate::ChemicalInput::new("").is_err());
    }

    #[test]
    fn structure_strings_are_kept_verbatim() {
        let input = SmartsInput::new("[CX3](=O)[OX2H1]").unwrap().name("carboxylic acid");
        assert_eq!(input.smarts, "[CX3](=O)[OX2H1]");
        assert_eq!(input.name.as_deref(), Some("carboxylic acid"));
    }
}
