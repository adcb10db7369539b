//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p pinrex-storage --features postgres -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use chrono::{TimeZone, Utc};
use pinrex_core::{
    Activity, ChemicalInput, CsstFileInput, ExperimentalCellLineInput, LabMaterialRef,
    MonomerInput, NameKind, PolymerInput, PolymerPropertyInput, Polymerization,
    PolymerizationReactionInput, PropertyErrorType, PropertyInput, ReactionInput, ReactionStep,
    SolubilityDataInput, SolventInput, TargetModeOfAction, Tox21DataInput, Tox21MoleculeInput,
    ToxAssayInput, make_name_record,
};
use pinrex_storage::traits::{
    ChemicalStore, LabStore, MonomerStore, NameStore, PolymerStore, ReactionStore, SolventStore,
    StatsStore, ToxicityStore,
};
use pinrex_storage::PgStorage;
use serde_json::json;
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_id() -> String {
    format!("test-{}", Uuid::new_v4())
}

async fn create_polymer(storage: &PgStorage) -> i64 {
    let rid = unique_id();
    let input = PolymerInput::with_smiles(format!("*CC(*){rid}")).unwrap().rid(rid);
    storage.save_polymer(&input).await.unwrap().id
}

async fn create_solvent(storage: &PgStorage) -> i64 {
    storage.save_solvent(&SolventInput::new(unique_id()).unwrap()).await.unwrap().id
}

// ── Name Tests ───────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_name_lookup_uses_search_key() {
    let storage = create_pg_storage().await;
    let pol_id = create_polymer(&storage).await;
    let raw = format!("Poly(methyl {}) [atactic]", Uuid::new_v4().simple());

    let record = storage
        .add_name(NameKind::Polymer, &make_name_record(raw.as_str(), pol_id, Some("IUPAC")))
        .await
        .unwrap();
    assert_eq!(record.name, raw);
    assert_eq!(record.owner_id, pol_id);

    let query = raw.to_uppercase().replace(' ', "");
    let found = storage.find_names(NameKind::Polymer, &query).await.unwrap();
    assert_eq!(found, vec![record.clone()]);

    let polymers = storage.find_polymers_by_name(&raw).await.unwrap();
    assert_eq!(polymers.len(), 1);
    assert_eq!(polymers[0].id, pol_id);

    // Polymer names are not visible as solvent names.
    assert!(storage.find_names(NameKind::Solvent, &raw).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn pg_rename_recomputes_search_key() {
    let storage = create_pg_storage().await;
    let sol_id = create_solvent(&storage).await;
    let tag = Uuid::new_v4().simple().to_string();

    let record = storage
        .add_name(NameKind::Solvent, &make_name_record(format!("old-{tag}"), sol_id, None))
        .await
        .unwrap();
    let renamed =
        storage.rename_name(NameKind::Solvent, record.id, &format!("New {tag}")).await.unwrap();
    assert_eq!(renamed.search_name, format!("new{tag}"));

    assert!(storage.find_names(NameKind::Solvent, &format!("old{tag}")).await.unwrap().is_empty());
    assert!(storage.delete_name(NameKind::Solvent, record.id).await.unwrap());
    assert!(storage.get_name(NameKind::Solvent, record.id).await.unwrap().is_none());

    let err = storage.rename_name(NameKind::Solvent, record.id, "gone").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
#[ignore]
async fn pg_orphan_name_is_rejected() {
    let storage = create_pg_storage().await;
    let err = storage
        .add_name(NameKind::Chemical, &make_name_record("nobody", i64::MAX, None))
        .await
        .unwrap_err();
    assert!(err.is_constraint(), "{err:?}");
}

// ── Catalog Tests ────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_chemical_duplicate_smiles() {
    let storage = create_pg_storage().await;
    let smiles = unique_id();
    let saved = storage.save_chemical(&ChemicalInput::new(smiles.as_str()).unwrap()).await.unwrap();
    assert_eq!(storage.get_chemical_by_smiles(&smiles).await.unwrap(), Some(saved));

    let err = storage.save_chemical(&ChemicalInput::new(smiles.as_str()).unwrap()).await.unwrap_err();
    assert!(err.is_duplicate(), "{err:?}");
}

#[tokio::test]
#[ignore]
async fn pg_polymer_properties_and_solubility() {
    let storage = create_pg_storage().await;
    let pol_id = create_polymer(&storage).await;
    let sol_id = create_solvent(&storage).await;
    let property = storage
        .save_property(&PropertyInput {
            name: unique_id(),
            short_name: None,
            unit: Some("g/mol".to_owned()),
            plot_symbol: None,
        })
        .await
        .unwrap();

    let mut input = PolymerPropertyInput::new(pol_id, property.id, 42_000.0)
        .error(1_500.0, PropertyErrorType::Variance);
    input.conditions = Some(json!({"solvent": "THF"}));
    storage.add_polymer_property(&input).await.unwrap();

    let values = storage.polymer_properties(pol_id).await.unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].error_type, Some(PropertyErrorType::Variance));
    assert_eq!(values[0].conditions, Some(json!({"solvent": "THF"})));

    let data = SolubilityDataInput::new(pol_id, sol_id, "insoluble", "pg test")
        .temperature_range(25.0, 60.0);
    storage.add_solubility_data(&data).await.unwrap();
    let rows = storage.solubility_for_polymer(pol_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].temp_max, Some(60.0));
}

#[tokio::test]
#[ignore]
async fn pg_polymerization_uniqueness() {
    let storage = create_pg_storage().await;
    let reaction = storage
        .save_polymerization_reaction(&PolymerizationReactionInput::new(unique_id()).unwrap())
        .await
        .unwrap();
    let monomer = storage.save_monomer(&MonomerInput::new(unique_id()).unwrap()).await.unwrap();
    let first = create_polymer(&storage).await;
    let second = create_polymer(&storage).await;

    let polymerization =
        Polymerization { polymerization_reaction_id: reaction.id, monomer_id: monomer.id, pol_id: first };
    storage.add_polymerization(polymerization).await.unwrap();
    let err = storage
        .add_polymerization(Polymerization { pol_id: second, ..polymerization })
        .await
        .unwrap_err();
    assert!(err.is_duplicate(), "{err:?}");
}

#[tokio::test]
#[ignore]
async fn pg_procedure_steps_in_order() {
    let storage = create_pg_storage().await;
    let procedure = storage.save_reaction_procedure(&unique_id(), None).await.unwrap();
    let a = storage.save_reaction(&ReactionInput::new(unique_id()).unwrap()).await.unwrap();
    let b = storage.save_reaction(&ReactionInput::new(unique_id()).unwrap()).await.unwrap();

    storage.add_reaction_step(ReactionStep::new(procedure.id, b.id, 2).unwrap()).await.unwrap();
    storage.add_reaction_step(ReactionStep::new(procedure.id, a.id, 1).unwrap()).await.unwrap();

    let steps = storage.procedure_steps(procedure.id).await.unwrap();
    let ids: Vec<i64> = steps.iter().map(|s| s.reaction_id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

// ── Toxicity and Lab Tests ───────────────────────────────────────

#[tokio::test]
#[ignore]
async fn pg_tox21_data_round_trip() {
    let storage = create_pg_storage().await;
    let cell_line = storage
        .save_cell_line(&ExperimentalCellLineInput {
            name: unique_id(),
            experimental_cell_clo_id: unique_id(),
            ..Default::default()
        })
        .await
        .unwrap();
    let assay = storage
        .save_tox_assay(&ToxAssayInput::new(
            "reporter",
            cell_line.id,
            "estrogen receptor",
            "activation",
            TargetModeOfAction::Antagonist,
        ))
        .await
        .unwrap();
    let molecule = storage
        .save_tox21_molecule(&Tox21MoleculeInput {
            pubchem_aid: Some(1),
            tox21_sid: vec![7, 8, 9],
            smiles: "CCO".to_owned(),
            fingerprint: None,
            cluster: None,
        })
        .await
        .unwrap();
    assert_eq!(molecule.tox21_sid, vec![7, 8, 9]);

    let saved = storage
        .add_tox21_data(&Tox21DataInput {
            molecule_id: molecule.id,
            assay_id: assay.id,
            activity: Activity::Active,
            pac50_val: Some(6.1),
            reference: None,
        })
        .await
        .unwrap();
    assert_eq!(storage.tox21_data_for_assay(assay.id).await.unwrap(), vec![saved]);
}

#[tokio::test]
#[ignore]
async fn pg_lab_records() {
    let storage = create_pg_storage().await;
    let file_name = format!("{}.csv", unique_id());
    let saved = storage
        .save_csst_file(&CsstFileInput {
            file_name: file_name.clone(),
            original_name: "upload.csv".to_owned(),
            polymers: vec!["PS".to_owned()],
            solvents: vec!["toluene".to_owned(), "THF".to_owned()],
            concentrations: vec![1.0, 2.5],
            stir_rate: 500.0,
            start_of_experiment: Utc.with_ymd_and_hms(2022, 11, 5, 14, 0, 0).unwrap(),
            version: "1.5".to_owned(),
            project: "pg".to_owned(),
        })
        .await
        .unwrap();
    let loaded = storage.get_csst_file(&file_name).await.unwrap().unwrap();
    assert_eq!(loaded.id, saved.id);
    assert_eq!(loaded.solvents, vec!["toluene", "THF"]);

    let sol_id = create_solvent(&storage).await;
    let lab_name = unique_id();
    storage.save_lab_material(&lab_name, LabMaterialRef::Solvent(sol_id)).await.unwrap();
    let material = storage.get_lab_material(&lab_name).await.unwrap().unwrap();
    assert_eq!(material.material, LabMaterialRef::Solvent(sol_id));
}

#[tokio::test]
#[ignore]
async fn pg_stats_count_rows() {
    let storage = create_pg_storage().await;
    let before = storage.get_stats().await.unwrap();
    create_polymer(&storage).await;
    let after = storage.get_stats().await.unwrap();
    assert!(after.polymer_count > before.polymer_count);
}
