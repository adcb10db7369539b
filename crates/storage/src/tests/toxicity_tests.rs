#![expect(clippy::unwrap_used, reason = "test code")]

use super::create_test_storage;
use crate::Storage;
use crate::storage::get_conn;
use pinrex_core::{
    Activity, ExperimentalCellLineInput, TargetModeOfAction, Tox21DataInput, Tox21MoleculeInput,
    ToxAssayInput,
};
use rusqlite::params;
use serde_json::json;

/// Cell line, gene and assay ready for data rows. Returns the assay id.
fn create_test_assay(storage: &Storage) -> i64 {
    let cell_line = storage
        .save_cell_line(&ExperimentalCellLineInput {
            name: "HEK293T".to_owned(),
            experimental_cell_clo_id: "CLO_0037237".to_owned(),
            organism: Some("Homo sapiens".to_owned()),
            organism_taxon_id: Some(9606),
            ..Default::default()
        })
        .unwrap();
    let gene = storage.save_gene("AR", Some(10_275)).unwrap();

    let mut input = ToxAssayInput::new(
        "reporter",
        cell_line.id,
        "androgen receptor",
        "activation",
        TargetModeOfAction::Agonist,
    );
    input.gene_id = Some(gene.id);
    input.tox21_aid = Some(743_040);
    storage.save_tox_assay(&input).unwrap().id
}

fn create_test_molecule(storage: &Storage, smiles: &str) -> i64 {
    let input = Tox21MoleculeInput {
        pubchem_aid: None,
        tox21_sid: vec![200_001, 200_002],
        smiles: smiles.to_owned(),
        fingerprint: Some(json!([3, 7])),
        cluster: Some(12),
    };
    storage.save_tox21_molecule(&input).unwrap().id
}

#[test]
fn test_gene_names_are_unique() {
    let (storage, _temp_dir) = create_test_storage();
    let gene = storage.save_gene("ESR1", None).unwrap();
    assert_eq!(gene.uniprot_id, None);
    assert!(storage.save_gene("ESR1", Some(1)).unwrap_err().is_duplicate());
}

#[test]
fn test_activity_data_for_assay() {
    let (storage, _temp_dir) = create_test_storage();
    let assay_id = create_test_assay(&storage);
    let molecule_id = create_test_molecule(&storage, "CC(=O)Oc1ccccc1C(=O)O");

    let input = Tox21DataInput {
        molecule_id,
        assay_id,
        activity: Activity::Inconclusive,
        pac50_val: Some(5.2),
        reference: Some("tox21-ar-bla-agonist-p1".to_owned()),
    };
    let saved = storage.add_tox21_data(&input).unwrap();

    let rows = storage.tox21_data_for_assay(assay_id).unwrap();
    assert_eq!(rows, vec![saved]);
    assert_eq!(rows[0].activity, Activity::Inconclusive);
}

#[test]
fn test_molecule_substance_ids_round_trip() {
    let (storage, _temp_dir) = create_test_storage();
    let molecule_id = create_test_molecule(&storage, "O=C(O)c1ccccc1");

    let conn = get_conn(&storage.pool).unwrap();
    let stored: String = conn
        .query_row("SELECT tox21_sid FROM tox21_molecules WHERE id = ?1", params![molecule_id], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(serde_json::from_str::<Vec<i64>>(&stored).unwrap(), vec![200_001, 200_002]);
}

#[test]
fn test_unknown_activity_is_rejected_by_store() {
    let (storage, _temp_dir) = create_test_storage();
    let assay_id = create_test_assay(&storage);
    let molecule_id = create_test_molecule(&storage, "C");

    let conn = get_conn(&storage.pool).unwrap();
    let err = conn
        .execute(
            "INSERT INTO tox21_data (molecule_id, assay_id, activity) VALUES (?1, ?2, 'maybe')",
            params![molecule_id, assay_id],
        )
        .map_err(crate::StorageError::from)
        .unwrap_err();
    assert!(err.is_constraint(), "{err:?}");
    drop(conn);

    assert!(storage.tox21_data_for_assay(assay_id).unwrap().is_empty());
}

#[test]
fn test_assay_needs_existing_cell_line() {
    let (storage, _temp_dir) = create_test_storage();
    let input =
        ToxAssayInput::new("counter screen", 404, "luciferase", "inhibition", TargetModeOfAction::Inhibition);
    assert!(storage.save_tox_assay(&input).unwrap_err().is_constraint());
}
