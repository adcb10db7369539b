//! Reactions, multi-step reaction procedures and polymerizations.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::structure::require_structure;

/// A SMARTS reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: i64,
    pub smarts: String,
    pub description: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionInput {
    pub smarts: String,
    pub description: Option<String>,
    pub reference: Option<String>,
}

impl ReactionInput {
    /// # Errors
    /// Returns `CoreError::InvalidInput` if `smarts` is blank.
    pub fn new(smarts: impl Into<String>) -> Result<Self> {
        Ok(Self { smarts: require_structure("smarts", smarts.into())?, description: None, reference: None })
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Named sequence of reactions. Names are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionProcedure {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Position of a reaction inside a procedure. Steps are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionStep {
    pub reaction_id: i64,
    pub reaction_procedure_id: i64,
    pub step: i32,
}

impl ReactionStep {
    /// # Errors
    /// Returns `CoreError::InvalidInput` if `step` is below 1.
    pub fn new(reaction_procedure_id: i64, reaction_id: i64, step: i32) -> Result<Self> {
        if step < 1 {
            return Err(CoreError::InvalidInput(format!("reaction step must start at 1, got {step}")));
        }
        Ok(Self { reaction_id, reaction_procedure_id, step })
    }
}

/// Links a reaction procedure, a starting chemical and the polymer it yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReactionPolymerMapping {
    pub reaction_procedure_id: i64,
    pub chemical_id: i64,
    pub pol_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolymerizationReaction {
    pub id: i64,
    /// Hand-written name of what the reaction does.
    pub name: Option<String>,
    pub smarts: String,
    pub description: Option<String>,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolymerizationReactionInput {
    pub name: Option<String>,
    pub smarts: String,
    pub description: Option<String>,
    pub reference: Option<String>,
}

impl PolymerizationReactionInput {
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
}

/// Monomer + polymerization reaction → polymer. A monomer appears at most
/// once per polymerization reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Polymerization {
    pub polymerization_reaction_id: i64,
    pub monomer_id: i64,
    pub pol_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_start_at_one() {
        assert!(ReactionStep::new(1, 1, 0).is_err());
        assert_eq!(ReactionStep::new(4, 9, 1).unwrap().step, 1);
    }
}
