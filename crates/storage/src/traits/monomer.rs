use async_trait::async_trait;
use pinrex_core::{Monomer, MonomerInput, Smarts, SmartsInput};

use crate::error::StorageError;

/// Monomers and the SMARTS patterns they contain.
#[async_trait]
pub trait MonomerStore: Send + Sync {
    async fn save_monomer(&self, input: &MonomerInput) -> Result<Monomer, StorageError>;

    async fn get_monomer(&self, id: i64) -> Result<Option<Monomer>, StorageError>;

    async fn get_monomer_by_smiles(&self, smiles: &str) -> Result<Option<Monomer>, StorageError>;

    async fn save_smarts(&self, input: &SmartsInput) -> Result<Smarts, StorageError>;

    async fn get_smarts(&self, id: i64) -> Result<Option<Smarts>, StorageError>;

    async fn link_monomer_substructure(
        &self,
        monomer_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError>;

    async fn monomer_substructures(&self, monomer_id: i64) -> Result<Vec<Smarts>, StorageError>;
}
