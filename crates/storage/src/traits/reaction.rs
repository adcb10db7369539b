use async_trait::async_trait;
use pinrex_core::{
    Polymerization, PolymerizationReaction, PolymerizationReactionInput, Reaction, ReactionInput,
    ReactionPolymerMapping, ReactionProcedure, ReactionStep,
};

use crate::error::StorageError;

/// Reactions, multi-step procedures and polymerizations.
#[async_trait]
pub trait ReactionStore: Send + Sync {
    async fn save_reaction(&self, input: &ReactionInput) -> Result<Reaction, StorageError>;

    async fn save_reaction_procedure(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ReactionProcedure, StorageError>;

    /// Get reaction procedure by its unique name.
    async fn get_reaction_procedure(
        &self,
        name: &str,
    ) -> Result<Option<ReactionProcedure>, StorageError>;

    async fn add_reaction_step(&self, step: ReactionStep) -> Result<(), StorageError>;

    /// Steps of a procedure in step order.
    async fn procedure_steps(&self, procedure_id: i64) -> Result<Vec<ReactionStep>, StorageError>;

    async fn add_starting_substructure(
        &self,
        procedure_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError>;

    async fn add_reaction_polymer_mapping(
        &self,
        mapping: ReactionPolymerMapping,
    ) -> Result<(), StorageError>;

    async fn save_polymerization_reaction(
        &self,
        input: &PolymerizationReactionInput,
    ) -> Result<PolymerizationReaction, StorageError>;

    /// A (reaction, monomer) pair yields at most one polymer.
    async fn add_polymerization(&self, polymerization: Polymerization) -> Result<(), StorageError>;

    async fn polymerizations_for_polymer(
        &self,
        pol_id: i64,
    ) -> Result<Vec<Polymerization>, StorageError>;
}
