use async_trait::async_trait;
use pinrex_core::{
    CsstFile, CsstFileInput, LabMaterial, LabMaterialRef, PackagingWaste, PackagingWasteInput,
};

use crate::error::StorageError;

/// Lab-side records.
#[async_trait]
pub trait LabStore: Send + Sync {
    async fn save_csst_file(&self, input: &CsstFileInput) -> Result<CsstFile, StorageError>;

    /// Get CSST file by stored file name.
    async fn get_csst_file(&self, file_name: &str) -> Result<Option<CsstFile>, StorageError>;

    async fn save_lab_material(
        &self,
        name: &str,
        material: LabMaterialRef,
    ) -> Result<LabMaterial, StorageError>;

    /// Resolve a lab name to the polymer or solvent it denotes.
    async fn get_lab_material(&self, name: &str) -> Result<Option<LabMaterial>, StorageError>;

    async fn save_packaging_waste(
        &self,
        input: &PackagingWasteInput,
    ) -> Result<PackagingWaste, StorageError>;
}
