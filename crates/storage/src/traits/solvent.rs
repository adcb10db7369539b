use async_trait::async_trait;
use pinrex_core::{SolubilityData, SolubilityDataInput, Solvent, SolventInput};

use crate::error::StorageError;

/// Solvents and solubility observations.
#[async_trait]
pub trait SolventStore: Send + Sync {
    async fn save_solvent(&self, input: &SolventInput) -> Result<Solvent, StorageError>;

    async fn get_solvent(&self, id: i64) -> Result<Option<Solvent>, StorageError>;

    async fn get_solvent_by_smiles(&self, smiles: &str) -> Result<Option<Solvent>, StorageError>;

    /// Solvents having a name that normalizes like `query`.
    async fn find_solvents_by_name(&self, query: &str) -> Result<Vec<Solvent>, StorageError>;

    async fn add_solubility_data(
        &self,
        input: &SolubilityDataInput,
    ) -> Result<SolubilityData, StorageError>;

    async fn solubility_for_polymer(&self, pol_id: i64) -> Result<Vec<SolubilityData>, StorageError>;
}
