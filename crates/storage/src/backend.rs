//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use pinrex_core::{
    Chemical, ChemicalCost, ChemicalCostInput, ChemicalInput, ChemicalSupplier, CsstFile,
    CsstFileInput, ExperimentalCellLine, ExperimentalCellLineInput, Gene, LabMaterial,
    LabMaterialRef, Monomer, MonomerInput, NameInput, NameKind, NameRecord, PackagingWaste,
    PackagingWasteInput, Polymer, PolymerApplication, PolymerApplicationInput, PolymerInput,
    PolymerProperty, PolymerPropertyInput, Polymerization, PolymerizationReaction,
    PolymerizationReactionInput, Property, PropertyInput, Reaction, ReactionInput,
    ReactionPolymerMapping, ReactionProcedure, ReactionStep, Smarts, SmartsInput, SolubilityData,
    SolubilityDataInput, Solvent, SolventInput, Tox21Data, Tox21DataInput, Tox21Molecule,
    Tox21MoleculeInput, ToxAssay, ToxAssayInput,
};

use crate::error::StorageError;
use crate::schema::Schema;
use crate::traits::{
    ChemicalStore, LabStore, MonomerStore, NameStore, PolymerStore, ReactionStore, SolventStore,
    StatsStore, ToxicityStore,
};
use crate::types::CatalogStats;

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend label for logs and CLI output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }

    /// Applied schema version.
    ///
    /// # Errors
    /// Returns error if the version cannot be read.
    pub async fn schema_version(&self) -> Result<i32, StorageError> {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(s) => {
                let s = s.clone();
                tokio::task::spawn_blocking(move || s.schema_version()).await?
            },
            #[cfg(feature = "postgres")]
            Self::Postgres(s) => s.schema_version().await,
        }
    }

    /// Bring the store up to `schema`.
    ///
    /// # Errors
    /// Returns error if a migration fails.
    pub async fn setup(&self, schema: &Schema) -> Result<(), StorageError> {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(s) => {
                let (s, schema) = (s.clone(), schema.clone());
                tokio::task::spawn_blocking(move || s.setup(&schema)).await?
            },
            #[cfg(feature = "postgres")]
            Self::Postgres(s) => s.setup(schema).await,
        }
    }

    /// Drop every table of `schema`.
    ///
    /// # Errors
    /// Returns error if a table cannot be dropped.
    pub async fn teardown(&self, schema: &Schema) -> Result<(), StorageError> {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(s) => {
                let (s, schema) = (s.clone(), schema.clone());
                tokio::task::spawn_blocking(move || s.teardown(&schema)).await?
            },
            #[cfg(feature = "postgres")]
            Self::Postgres(s) => s.teardown(schema).await,
        }
    }
}

// ── NameStore ────────────────────────────────────────────────────

#[async_trait]
impl NameStore for StorageBackend {
    async fn add_name(&self, kind: NameKind, input: &NameInput) -> Result<NameRecord, StorageError> {
        dispatch!(self, NameStore, add_name(kind, input))
    }

    async fn get_name(&self, kind: NameKind, id: i64) -> Result<Option<NameRecord>, StorageError> {
        dispatch!(self, NameStore, get_name(kind, id))
    }

    async fn find_names(
        &self,
        kind: NameKind,
        query: &str,
    ) -> Result<Vec<NameRecord>, StorageError> {
        dispatch!(self, NameStore, find_names(kind, query))
    }

    async fn names_for_owner(
        &self,
        kind: NameKind,
        owner_id: i64,
    ) -> Result<Vec<NameRecord>, StorageError> {
        dispatch!(self, NameStore, names_for_owner(kind, owner_id))
    }

    async fn rename_name(
        &self,
        kind: NameKind,
        id: i64,
        raw_name: &str,
    ) -> Result<NameRecord, StorageError> {
        dispatch!(self, NameStore, rename_name(kind, id, raw_name))
    }

    async fn delete_name(&self, kind: NameKind, id: i64) -> Result<bool, StorageError> {
        dispatch!(self, NameStore, delete_name(kind, id))
    }
}

// ── ChemicalStore ────────────────────────────────────────────────

#[async_trait]
impl ChemicalStore for StorageBackend {
    async fn save_chemical(&self, input: &ChemicalInput) -> Result<Chemical, StorageError> {
        dispatch!(self, ChemicalStore, save_chemical(input))
    }

    async fn get_chemical(&self, id: i64) -> Result<Option<Chemical>, StorageError> {
        dispatch!(self, ChemicalStore, get_chemical(id))
    }

    async fn get_chemical_by_smiles(&self, smiles: &str) -> Result<Option<Chemical>, StorageError> {
        dispatch!(self, ChemicalStore, get_chemical_by_smiles(smiles))
    }

    async fn find_chemicals_by_name(&self, query: &str) -> Result<Vec<Chemical>, StorageError> {
        dispatch!(self, ChemicalStore, find_chemicals_by_name(query))
    }

    async fn add_supplier(
        &self,
        name: &str,
        site: Option<&str>,
    ) -> Result<ChemicalSupplier, StorageError> {
        dispatch!(self, ChemicalStore, add_supplier(name, site))
    }

    async fn add_chemical_cost(
        &self,
        input: &ChemicalCostInput,
    ) -> Result<ChemicalCost, StorageError> {
        dispatch!(self, ChemicalStore, add_chemical_cost(input))
    }

    async fn chemical_costs(&self, chemical_id: i64) -> Result<Vec<ChemicalCost>, StorageError> {
        dispatch!(self, ChemicalStore, chemical_costs(chemical_id))
    }

    async fn link_chemical_substructure(
        &self,
        chemical_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        dispatch!(self, ChemicalStore, link_chemical_substructure(chemical_id, smarts_id))
    }

    async fn chemical_substructures(&self, chemical_id: i64) -> Result<Vec<Smarts>, StorageError> {
        dispatch!(self, ChemicalStore, chemical_substructures(chemical_id))
    }
}

// ── PolymerStore ─────────────────────────────────────────────────

#[async_trait]
impl PolymerStore for StorageBackend {
    async fn save_polymer(&self, input: &PolymerInput) -> Result<Polymer, StorageError> {
        dispatch!(self, PolymerStore, save_polymer(input))
    }

    async fn get_polymer(&self, id: i64) -> Result<Option<Polymer>, StorageError> {
        dispatch!(self, PolymerStore, get_polymer(id))
    }

    async fn get_polymer_by_rid(&self, rid: &str) -> Result<Option<Polymer>, StorageError> {
        dispatch!(self, PolymerStore, get_polymer_by_rid(rid))
    }

    async fn find_polymers_by_name(&self, query: &str) -> Result<Vec<Polymer>, StorageError> {
        dispatch!(self, PolymerStore, find_polymers_by_name(query))
    }

    async fn save_property(&self, input: &PropertyInput) -> Result<Property, StorageError> {
        dispatch!(self, PolymerStore, save_property(input))
    }

    async fn add_polymer_property(
        &self,
        input: &PolymerPropertyInput,
    ) -> Result<PolymerProperty, StorageError> {
        dispatch!(self, PolymerStore, add_polymer_property(input))
    }

    async fn polymer_properties(&self, pol_id: i64) -> Result<Vec<PolymerProperty>, StorageError> {
        dispatch!(self, PolymerStore, polymer_properties(pol_id))
    }

    async fn add_polymer_application(
        &self,
        input: &PolymerApplicationInput,
    ) -> Result<PolymerApplication, StorageError> {
        dispatch!(self, PolymerStore, add_polymer_application(input))
    }

    async fn polymer_applications(
        &self,
        pol_id: i64,
    ) -> Result<Vec<PolymerApplication>, StorageError> {
        dispatch!(self, PolymerStore, polymer_applications(pol_id))
    }
}

// ── MonomerStore ─────────────────────────────────────────────────

#[async_trait]
impl MonomerStore for StorageBackend {
    async fn save_monomer(&self, input: &MonomerInput) -> Result<Monomer, StorageError> {
        dispatch!(self, MonomerStore, save_monomer(input))
    }

    async fn get_monomer(&self, id: i64) -> Result<Option<Monomer>, StorageError> {
        dispatch!(self, MonomerStore, get_monomer(id))
    }

    async fn get_monomer_by_smiles(&self, smiles: &str) -> Result<Option<Monomer>, StorageError> {
        dispatch!(self, MonomerStore, get_monomer_by_smiles(smiles))
    }

    async fn save_smarts(&self, input: &SmartsInput) -> Result<Smarts, StorageError> {
        dispatch!(self, MonomerStore, save_smarts(input))
    }

    async fn get_smarts(&self, id: i64) -> Result<Option<Smarts>, StorageError> {
        dispatch!(self, MonomerStore, get_smarts(id))
    }

    async fn link_monomer_substructure(
        &self,
        monomer_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        dispatch!(self, MonomerStore, link_monomer_substructure(monomer_id, smarts_id))
    }

    async fn monomer_substructures(&self, monomer_id: i64) -> Result<Vec<Smarts>, StorageError> {
        dispatch!(self, MonomerStore, monomer_substructures(monomer_id))
    }
}

// ── SolventStore ─────────────────────────────────────────────────

#[async_trait]
impl SolventStore for StorageBackend {
    async fn save_solvent(&self, input: &SolventInput) -> Result<Solvent, StorageError> {
        dispatch!(self, SolventStore, save_solvent(input))
    }

    async fn get_solvent(&self, id: i64) -> Result<Option<Solvent>, StorageError> {
        dispatch!(self, SolventStore, get_solvent(id))
    }

    async fn get_solvent_by_smiles(&self, smiles: &str) -> Result<Option<Solvent>, StorageError> {
        dispatch!(self, SolventStore, get_solvent_by_smiles(smiles))
    }

    async fn find_solvents_by_name(&self, query: &str) -> Result<Vec<Solvent>, StorageError> {
        dispatch!(self, SolventStore, find_solvents_by_name(query))
    }

    async fn add_solubility_data(
        &self,
        input: &SolubilityDataInput,
    ) -> Result<SolubilityData, StorageError> {
        dispatch!(self, SolventStore, add_solubility_data(input))
    }

    async fn solubility_for_polymer(
        &self,
        pol_id: i64,
    ) -> Result<Vec<SolubilityData>, StorageError> {
        dispatch!(self, SolventStore, solubility_for_polymer(pol_id))
    }
}

// ── ReactionStore ────────────────────────────────────────────────

#[async_trait]
impl ReactionStore for StorageBackend {
    async fn save_reaction(&self, input: &ReactionInput) -> Result<Reaction, StorageError> {
        dispatch!(self, ReactionStore, save_reaction(input))
    }

    async fn save_reaction_procedure(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ReactionProcedure, StorageError> {
        dispatch!(self, ReactionStore, save_reaction_procedure(name, description))
    }

    async fn get_reaction_procedure(
        &self,
        name: &str,
    ) -> Result<Option<ReactionProcedure>, StorageError> {
        dispatch!(self, ReactionStore, get_reaction_procedure(name))
    }

    async fn add_reaction_step(&self, step: ReactionStep) -> Result<(), StorageError> {
        dispatch!(self, ReactionStore, add_reaction_step(step))
    }

    async fn procedure_steps(&self, procedure_id: i64) -> Result<Vec<ReactionStep>, StorageError> {
        dispatch!(self, ReactionStore, procedure_steps(procedure_id))
    }

    async fn add_starting_substructure(
        &self,
        procedure_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        dispatch!(self, ReactionStore, add_starting_substructure(procedure_id, smarts_id))
    }

    async fn add_reaction_polymer_mapping(
        &self,
        mapping: ReactionPolymerMapping,
    ) -> Result<(), StorageError> {
        dispatch!(self, ReactionStore, add_reaction_polymer_mapping(mapping))
    }

    async fn save_polymerization_reaction(
        &self,
        input: &PolymerizationReactionInput,
    ) -> Result<PolymerizationReaction, StorageError> {
        dispatch!(self, ReactionStore, save_polymerization_reaction(input))
    }

    async fn add_polymerization(&self, polymerization: Polymerization) -> Result<(), StorageError> {
        dispatch!(self, ReactionStore, add_polymerization(polymerization))
    }

    async fn polymerizations_for_polymer(
        &self,
        pol_id: i64,
    ) -> Result<Vec<Polymerization>, StorageError> {
        dispatch!(self, ReactionStore, polymerizations_for_polymer(pol_id))
    }
}

// ── ToxicityStore ────────────────────────────────────────────────

#[async_trait]
impl ToxicityStore for StorageBackend {
    async fn save_gene(&self, name: &str, uniprot_id: Option<i64>) -> Result<Gene, StorageError> {
        dispatch!(self, ToxicityStore, save_gene(name, uniprot_id))
    }

    async fn save_cell_line(
        &self,
        input: &ExperimentalCellLineInput,
    ) -> Result<ExperimentalCellLine, StorageError> {
        dispatch!(self, ToxicityStore, save_cell_line(input))
    }

    async fn save_tox_assay(&self, input: &ToxAssayInput) -> Result<ToxAssay, StorageError> {
        dispatch!(self, ToxicityStore, save_tox_assay(input))
    }

    async fn save_tox21_molecule(
        &self,
        input: &Tox21MoleculeInput,
    ) -> Result<Tox21Molecule, StorageError> {
        dispatch!(self, ToxicityStore, save_tox21_molecule(input))
    }

    async fn add_tox21_data(&self, input: &Tox21DataInput) -> Result<Tox21Data, StorageError> {
        dispatch!(self, ToxicityStore, add_tox21_data(input))
    }

    async fn tox21_data_for_assay(&self, assay_id: i64) -> Result<Vec<Tox21Data>, StorageError> {
        dispatch!(self, ToxicityStore, tox21_data_for_assay(assay_id))
    }
}

// ── LabStore ─────────────────────────────────────────────────────

#[async_trait]
impl LabStore for StorageBackend {
    async fn save_csst_file(&self, input: &CsstFileInput) -> Result<CsstFile, StorageError> {
        dispatch!(self, LabStore, save_csst_file(input))
    }

    async fn get_csst_file(&self, file_name: &str) -> Result<Option<CsstFile>, StorageError> {
        dispatch!(self, LabStore, get_csst_file(file_name))
    }

    async fn save_lab_material(
        &self,
        name: &str,
        material: LabMaterialRef,
    ) -> Result<LabMaterial, StorageError> {
        dispatch!(self, LabStore, save_lab_material(name, material))
    }

    async fn get_lab_material(&self, name: &str) -> Result<Option<LabMaterial>, StorageError> {
        dispatch!(self, LabStore, get_lab_material(name))
    }

    async fn save_packaging_waste(
        &self,
        input: &PackagingWasteInput,
    ) -> Result<PackagingWaste, StorageError> {
        dispatch!(self, LabStore, save_packaging_waste(input))
    }
}

// ── StatsStore ───────────────────────────────────────────────────

#[async_trait]
impl StatsStore for StorageBackend {
    async fn get_stats(&self) -> Result<CatalogStats, StorageError> {
        dispatch!(self, StatsStore, get_stats())
    }
}
