use async_trait::async_trait;
use pinrex_core::{
    Polymer, PolymerApplication, PolymerApplicationInput, PolymerInput, PolymerProperty,
    PolymerPropertyInput, Property, PropertyInput,
};

use crate::error::StorageError;

/// Polymers, property definitions, measured values and applications.
#[async_trait]
pub trait PolymerStore: Send + Sync {
    async fn save_polymer(&self, input: &PolymerInput) -> Result<Polymer, StorageError>;

    async fn get_polymer(&self, id: i64) -> Result<Option<Polymer>, StorageError>;

    /// Get polymer by registry id.
    async fn get_polymer_by_rid(&self, rid: &str) -> Result<Option<Polymer>, StorageError>;

    /// Polymers having a name that normalizes like `query`.
    async fn find_polymers_by_name(&self, query: &str) -> Result<Vec<Polymer>, StorageError>;

    async fn save_property(&self, input: &PropertyInput) -> Result<Property, StorageError>;

    async fn add_polymer_property(
        &self,
        input: &PolymerPropertyInput,
    ) -> Result<PolymerProperty, StorageError>;

    async fn polymer_properties(&self, pol_id: i64) -> Result<Vec<PolymerProperty>, StorageError>;

    async fn add_polymer_application(
        &self,
        input: &PolymerApplicationInput,
    ) -> Result<PolymerApplication, StorageError>;

    async fn polymer_applications(
        &self,
        pol_id: i64,
    ) -> Result<Vec<PolymerApplication>, StorageError>;
}
