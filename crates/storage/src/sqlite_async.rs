//! Async trait implementations for SQLite `Storage` via `spawn_blocking`.

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

use crate::Storage;
use crate::error::StorageError;
use crate::traits::{
    ChemicalStore, LabStore, MonomerStore, NameStore, PolymerStore, ReactionStore, SolventStore,
    StatsStore, ToxicityStore,
};
use crate::types::CatalogStats;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`      — `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`      — `.to_owned()` a `&str`, pass as `&arg`
/// - `@opt_str arg`  — `.map(ToOwned::to_owned)` an `Option<&str>`, pass as `arg.as_deref()`
/// - `@val arg`      — move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture opt_str $arg:ident) => { let $arg = $arg.map(ToOwned::to_owned); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass opt_str $arg:ident) => { $arg.as_deref() };
    (@pass val $arg:ident) => { $arg };
}

// ── NameStore ────────────────────────────────────────────────────

#[async_trait]
impl NameStore for Storage {
    async fn add_name(&self, kind: NameKind, input: &NameInput) -> Result<NameRecord, StorageError> {
        delegate!(self, add_name, @val kind, @ref input)
    }
    async fn get_name(&self, kind: NameKind, id: i64) -> Result<Option<NameRecord>, StorageError> {
        delegate!(self, get_name, @val kind, @val id)
    }
    async fn find_names(
        &self,
        kind: NameKind,
        query: &str,
    ) -> Result<Vec<NameRecord>, StorageError> {
        delegate!(self, find_names, @val kind, @str query)
    }
    async fn names_for_owner(
        &self,
        kind: NameKind,
        owner_id: i64,
    ) -> Result<Vec<NameRecord>, StorageError> {
        delegate!(self, names_for_owner, @val kind, @val owner_id)
    }
    async fn rename_name(
        &self,
        kind: NameKind,
        id: i64,
        raw_name: &str,
    ) -> Result<NameRecord, StorageError> {
        delegate!(self, rename_name, @val kind, @val id, @str raw_name)
    }
    async fn delete_name(&self, kind: NameKind, id: i64) -> Result<bool, StorageError> {
        delegate!(self, delete_name, @val kind, @val id)
    }
}

// ── ChemicalStore ────────────────────────────────────────────────

#[async_trait]
impl ChemicalStore for Storage {
    async fn save_chemical(&self, input: &ChemicalInput) -> Result<Chemical, StorageError> {
        delegate!(self, save_chemical, @ref input)
    }
    async fn get_chemical(&self, id: i64) -> Result<Option<Chemical>, StorageError> {
        delegate!(self, get_chemical, @val id)
    }
    async fn get_chemical_by_smiles(&self, smiles: &str) -> Result<Option<Chemical>, StorageError> {
        delegate!(self, get_chemical_by_smiles, @str smiles)
    }
    async fn find_chemicals_by_name(&self, query: &str) -> Result<Vec<Chemical>, StorageError> {
        delegate!(self, find_chemicals_by_name, @str query)
    }
    async fn add_supplier(
        &self,
        name: &str,
        site: Option<&str>,
    ) -> Result<ChemicalSupplier, StorageError> {
        delegate!(self, add_supplier, @str name, @opt_str site)
    }
    async fn add_chemical_cost(
        &self,
        input: &ChemicalCostInput,
    ) -> Result<ChemicalCost, StorageError> {
        delegate!(self, add_chemical_cost, @ref input)
    }
    async fn chemical_costs(&self, chemical_id: i64) -> Result<Vec<ChemicalCost>, StorageError> {
        delegate!(self, chemical_costs, @val chemical_id)
    }
    async fn link_chemical_substructure(
        &self,
        chemical_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        delegate!(self, link_chemical_substructure, @val chemical_id, @val smarts_id)
    }
    async fn chemical_substructures(&self, chemical_id: i64) -> Result<Vec<Smarts>, StorageError> {
        delegate!(self, chemical_substructures, @val chemical_id)
    }
}

// ── PolymerStore ─────────────────────────────────────────────────

#[async_trait]
impl PolymerStore for Storage {
    async fn save_polymer(&self, input: &PolymerInput) -> Result<Polymer, StorageError> {
        delegate!(self, save_polymer, @ref input)
    }
    async fn get_polymer(&self, id: i64) -> Result<Option<Polymer>, StorageError> {
        delegate!(self, get_polymer, @val id)
    }
    async fn get_polymer_by_rid(&self, rid: &str) -> Result<Option<Polymer>, StorageError> {
        delegate!(self, get_polymer_by_rid, @str rid)
    }
    async fn find_polymers_by_name(&self, query: &str) -> Result<Vec<Polymer>, StorageError> {
        delegate!(self, find_polymers_by_name, @str query)
    }
    async fn save_property(&self, input: &PropertyInput) -> Result<Property, StorageError> {
        delegate!(self, save_property, @ref input)
    }
    async fn add_polymer_property(
        &self,
        input: &PolymerPropertyInput,
    ) -> Result<PolymerProperty, StorageError> {
        delegate!(self, add_polymer_property, @ref input)
    }
    async fn polymer_properties(&self, pol_id: i64) -> Result<Vec<PolymerProperty>, StorageError> {
        delegate!(self, polymer_properties, @val pol_id)
    }
    async fn add_polymer_application(
        &self,
        input: &PolymerApplicationInput,
    ) -> Result<PolymerApplication, StorageError> {
        delegate!(self, add_polymer_application, @ref input)
    }
    async fn polymer_applications(
        &self,
        pol_id: i64,
    ) -> Result<Vec<PolymerApplication>, StorageError> {
        delegate!(self, polymer_applications, @val pol_id)
    }
}

// ── MonomerStore ─────────────────────────────────────────────────

#[async_trait]
impl MonomerStore for Storage {
    async fn save_monomer(&self, input: &MonomerInput) -> Result<Monomer, StorageError> {
        delegate!(self, save_monomer, @ref input)
    }
    async fn get_monomer(&self, id: i64) -> Result<Option<Monomer>, StorageError> {
        delegate!(self, get_monomer, @val id)
    }
    async fn get_monomer_by_smiles(&self, smiles: &str) -> Result<Option<Monomer>, StorageError> {
        delegate!(self, get_monomer_by_smiles, @str smiles)
    }
    async fn save_smarts(&self, input: &SmartsInput) -> Result<Smarts, StorageError> {
        delegate!(self, save_smarts, @ref input)
    }
    async fn get_smarts(&self, id: i64) -> Result<Option<Smarts>, StorageError> {
        delegate!(self, get_smarts, @val id)
    }
    async fn link_monomer_substructure(
        &self,
        monomer_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        delegate!(self, link_monomer_substructure, @val monomer_id, @val smarts_id)
    }
    async fn monomer_substructures(&self, monomer_id: i64) -> Result<Vec<Smarts>, StorageError> {
        delegate!(self, monomer_substructures, @val monomer_id)
    }
}

// ── SolventStore ─────────────────────────────────────────────────

#[async_trait]
impl SolventStore for Storage {
    async fn save_solvent(&self, input: &SolventInput) -> Result<Solvent, StorageError> {
        delegate!(self, save_solvent, @ref input)
    }
    async fn get_solvent(&self, id: i64) -> Result<Option<Solvent>, StorageError> {
        delegate!(self, get_solvent, @val id)
    }
    async fn get_solvent_by_smiles(&self, smiles: &str) -> Result<Option<Solvent>, StorageError> {
        delegate!(self, get_solvent_by_smiles, @str smiles)
    }
    async fn find_solvents_by_name(&self, query: &str) -> Result<Vec<Solvent>, StorageError> {
        delegate!(self, find_solvents_by_name, @str query)
    }
    async fn add_solubility_data(
        &self,
        input: &SolubilityDataInput,
    ) -> Result<SolubilityData, StorageError> {
        delegate!(self, add_solubility_data, @ref input)
    }
    async fn solubility_for_polymer(
        &self,
        pol_id: i64,
    ) -> Result<Vec<SolubilityData>, StorageError> {
        delegate!(self, solubility_for_polymer, @val pol_id)
    }
}

// ── ReactionStore ────────────────────────────────────────────────

#[async_trait]
impl ReactionStore for Storage {
    async fn save_reaction(&self, input: &ReactionInput) -> Result<Reaction, StorageError> {
        delegate!(self, save_reaction, @ref input)
    }
    async fn save_reaction_procedure(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ReactionProcedure, StorageError> {
        delegate!(self, save_reaction_procedure, @str name, @opt_str description)
    }
    async fn get_reaction_procedure(
        &self,
        name: &str,
    ) -> Result<Option<ReactionProcedure>, StorageError> {
        delegate!(self, get_reaction_procedure, @str name)
    }
    async fn add_reaction_step(&self, step: ReactionStep) -> Result<(), StorageError> {
        delegate!(self, add_reaction_step, @val step)
    }
    async fn procedure_steps(&self, procedure_id: i64) -> Result<Vec<ReactionStep>, StorageError> {
        delegate!(self, procedure_steps, @val procedure_id)
    }
    async fn add_starting_substructure(
        &self,
        procedure_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        delegate!(self, add_starting_substructure, @val procedure_id, @val smarts_id)
    }
    async fn add_reaction_polymer_mapping(
        &self,
        mapping: ReactionPolymerMapping,
    ) -> Result<(), StorageError> {
        delegate!(self, add_reaction_polymer_mapping, @val mapping)
    }
    async fn save_polymerization_reaction(
        &self,
        input: &PolymerizationReactionInput,
    ) -> Result<PolymerizationReaction, StorageError> {
        delegate!(self, save_polymerization_reaction, @ref input)
    }
    async fn add_polymerization(&self, polymerization: Polymerization) -> Result<(), StorageError> {
        delegate!(self, add_polymerization, @val polymerization)
    }
    async fn polymerizations_for_polymer(
        &self,
        pol_id: i64,
    ) -> Result<Vec<Polymerization>, StorageError> {
        delegate!(self, polymerizations_for_polymer, @val pol_id)
    }
}

// ── ToxicityStore ────────────────────────────────────────────────

#[async_trait]
impl ToxicityStore for Storage {
    async fn save_gene(&self, name: &str, uniprot_id: Option<i64>) -> Result<Gene, StorageError> {
        delegate!(self, save_gene, @str name, @val uniprot_id)
    }
    async fn save_cell_line(
        &self,
        input: &ExperimentalCellLineInput,
    ) -> Result<ExperimentalCellLine, StorageError> {
        delegate!(self, save_cell_line, @ref input)
    }
    async fn save_tox_assay(&self, input: &ToxAssayInput) -> Result<ToxAssay, StorageError> {
        delegate!(self, save_tox_assay, @ref input)
    }
    async fn save_tox21_molecule(
        &self,
        input: &Tox21MoleculeInput,
    ) -> Result<Tox21Molecule, StorageError> {
        delegate!(self, save_tox21_molecule, @ref input)
    }
    async fn add_tox21_data(&self, input: &Tox21DataInput) -> Result<Tox21Data, StorageError> {
        delegate!(self, add_tox21_data, @ref input)
    }
    async fn tox21_data_for_assay(&self, assay_id: i64) -> Result<Vec<Tox21Data>, StorageError> {
        delegate!(self, tox21_data_for_assay, @val assay_id)
    }
}

// ── LabStore ─────────────────────────────────────────────────────

#[async_trait]
impl LabStore for Storage {
    async fn save_csst_file(&self, input: &CsstFileInput) -> Result<CsstFile, StorageError> {
        delegate!(self, save_csst_file, @ref input)
    }
    async fn get_csst_file(&self, file_name: &str) -> Result<Option<CsstFile>, StorageError> {
        delegate!(self, get_csst_file, @str file_name)
    }
    async fn save_lab_material(
        &self,
        name: &str,
        material: LabMaterialRef,
    ) -> Result<LabMaterial, StorageError> {
        delegate!(self, save_lab_material, @str name, @val material)
    }
    async fn get_lab_material(&self, name: &str) -> Result<Option<LabMaterial>, StorageError> {
        delegate!(self, get_lab_material, @str name)
    }
    async fn save_packaging_waste(
        &self,
        input: &PackagingWasteInput,
    ) -> Result<PackagingWaste, StorageError> {
        delegate!(self, save_packaging_waste, @ref input)
    }
}

// ── StatsStore ───────────────────────────────────────────────────

#[async_trait]
impl StatsStore for Storage {
    async fn get_stats(&self) -> Result<CatalogStats, StorageError> {
        delegate!(self, get_stats)
    }
}
