#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_polymer, create_test_solvent, create_test_storage};
use crate::storage::get_conn;
use chrono::{TimeZone, Utc};
use pinrex_core::{CsstFileInput, LabMaterialRef, PackagingWasteInput, SolubilityDataInput};
use rusqlite::params;

fn csst_input(file_name: &str) -> CsstFileInput {
    CsstFileInput {
        file_name: file_name.to_owned(),
        original_name: "run 14.csv".to_owned(),
        polymers: vec!["PS-1".to_owned(), "PMMA-3".to_owned()],
        solvents: vec!["THF".to_owned()],
        concentrations: vec![5.0, 10.0, 20.0],
        stir_rate: 700.0,
        start_of_experiment: Utc.with_ymd_and_hms(2023, 6, 2, 9, 30, 0).unwrap(),
        version: "1.6.0".to_owned(),
        project: "solubility".to_owned(),
    }
}

#[test]
fn test_csst_file_round_trip() {
    let (storage, _temp_dir) = create_test_storage();
    let saved = storage.save_csst_file(&csst_input("a1b2c3.csv")).unwrap();

    let loaded = storage.get_csst_file("a1b2c3.csv").unwrap().unwrap();
    assert_eq!(loaded.id, saved.id);
    assert_eq!(loaded.polymers, vec!["PS-1", "PMMA-3"]);
    assert_eq!(loaded.concentrations, vec![5.0, 10.0, 20.0]);
    assert_eq!(loaded.start_of_experiment, Utc.with_ymd_and_hms(2023, 6, 2, 9, 30, 0).unwrap());
    assert!(storage.get_csst_file("missing.csv").unwrap().is_none());

    let err = storage.save_csst_file(&csst_input("a1b2c3.csv")).unwrap_err();
    assert!(err.is_duplicate(), "{err:?}");
}

#[test]
fn test_solubility_data_references_csst_file() {
    let (storage, _temp_dir) = create_test_storage();
    let file = storage.save_csst_file(&csst_input("linked.csv")).unwrap();
    let pol_id = create_test_polymer(&storage, "PS-1");
    let sol_id = create_test_solvent(&storage, "C1CCOC1");

    let mut input = SolubilityDataInput::new(pol_id, sol_id, "cloud point", "linked.csv");
    input.csst_file_id = Some(file.id);
    input.conc_mg_per_ml = Some(10.0);
    storage.add_solubility_data(&input).unwrap();

    let rows = storage.solubility_for_polymer(pol_id).unwrap();
    assert_eq!(rows[0].csst_file_id, Some(file.id));
}

#[test]
fn test_lab_material_resolves_polymer_and_solvent() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PS");
    let sol_id = create_test_solvent(&storage, "Cc1ccccc1");

    storage.save_lab_material("BL-PS-01", LabMaterialRef::Polymer(pol_id)).unwrap();
    storage.save_lab_material("toluene", LabMaterialRef::Solvent(sol_id)).unwrap();

    let polymer = storage.get_lab_material("BL-PS-01").unwrap().unwrap();
    assert_eq!(polymer.material, LabMaterialRef::Polymer(pol_id));
    let solvent = storage.get_lab_material("toluene").unwrap().unwrap();
    assert_eq!(solvent.material, LabMaterialRef::Solvent(sol_id));
    assert!(storage.get_lab_material("unknown").unwrap().is_none());
}

#[test]
fn test_material_has_one_lab_name() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PVC");
    storage.save_lab_material("BL-PVC", LabMaterialRef::Polymer(pol_id)).unwrap();

    let err = storage.save_lab_material("BL-PVC-2", LabMaterialRef::Polymer(pol_id)).unwrap_err();
    assert!(err.is_duplicate(), "{err:?}");
}

#[test]
fn test_row_with_both_references_is_rejected_by_store() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PC");
    let sol_id = create_test_solvent(&storage, "CC#N");

    let conn = get_conn(&storage.pool).unwrap();
    let err = conn
        .execute(
            "INSERT INTO brettmann_lab (pol_id, sol_id, name) VALUES (?1, ?2, 'both')",
            params![pol_id, sol_id],
        )
        .map_err(crate::StorageError::from)
        .unwrap_err();
    assert!(err.is_constraint(), "{err:?}");
}

#[test]
fn test_packaging_waste() {
    let (storage, _temp_dir) = create_test_storage();
    let input = PackagingWasteInput {
        value: Some(14_530),
        year: Some(2018),
        waste_type: Some("plastic".to_owned()),
        management_pathway: Some("landfilled".to_owned()),
        reference: Some("EPA facts and figures".to_owned()),
        unit: Some("thousand tons".to_owned()),
    };
    let saved = storage.save_packaging_waste(&input).unwrap();
    assert_eq!(saved.year, Some(2018));

    let conn = get_conn(&storage.pool).unwrap();
    let stored: String = conn
        .query_row(
            "SELECT type FROM containers_and_packaging_waste WHERE id = ?1",
            params![saved.id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "plastic");
}
