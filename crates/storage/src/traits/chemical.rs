use async_trait::async_trait;
use pinrex_core::{Chemical, ChemicalCost, ChemicalCostInput, ChemicalInput, ChemicalSupplier, Smarts};

use crate::error::StorageError;

/// Chemicals, suppliers, costs and substructure links.
#[async_trait]
pub trait ChemicalStore: Send + Sync {
    async fn save_chemical(&self, input: &ChemicalInput) -> Result<Chemical, StorageError>;

    async fn get_chemical(&self, id: i64) -> Result<Option<Chemical>, StorageError>;

    async fn get_chemical_by_smiles(&self, smiles: &str) -> Result<Option<Chemical>, StorageError>;

    /// Chemicals having a name that normalizes like `query`.
    async fn find_chemicals_by_name(&self, query: &str) -> Result<Vec<Chemical>, StorageError>;

    async fn add_supplier(
        &self,
        name: &str,
        site: Option<&str>,
    ) -> Result<ChemicalSupplier, StorageError>;

    async fn add_chemical_cost(&self, input: &ChemicalCostInput)
    -> Result<ChemicalCost, StorageError>;

    /// Costs of one chemical, oldest first.
    async fn chemical_costs(&self, chemical_id: i64) -> Result<Vec<ChemicalCost>, StorageError>;

    async fn link_chemical_substructure(
        &self,
        chemical_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError>;

    async fn chemical_substructures(&self, chemical_id: i64) -> Result<Vec<Smarts>, StorageError>;
}
