#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_chemical, create_test_polymer, create_test_solvent, create_test_storage};
use chrono::{TimeZone, Utc};
use pinrex_core::{
    ChemicalCostInput, ChemicalInput, MonomerInput, SmartsInput, SolubilityDataInput, SolventInput,
};
use serde_json::json;

#[test]
fn test_save_and_get_chemical() {
    let (storage, _temp_dir) = create_test_storage();
    let saved = storage.save_chemical(&ChemicalInput::new("CCO").unwrap().cas("64-17-5")).unwrap();

    assert_eq!(storage.get_chemical(saved.id).unwrap(), Some(saved.clone()));
    assert_eq!(storage.get_chemical_by_smiles("CCO").unwrap(), Some(saved));
    assert!(storage.get_chemical_by_smiles("CCC").unwrap().is_none());
}

#[test]
fn test_duplicate_chemical_smiles_is_rejected() {
    let (storage, _temp_dir) = create_test_storage();
    create_test_chemical(&storage, "c1ccccc1");
    let err = storage.save_chemical(&ChemicalInput::new("c1ccccc1").unwrap()).unwrap_err();
    assert!(err.is_duplicate(), "{err:?}");
}

#[test]
fn test_chemical_costs_are_listed_oldest_first() {
    let (storage, _temp_dir) = create_test_storage();
    let chemical_id = create_test_chemical(&storage, "CC(=O)O");
    let supplier = storage.add_supplier("Acme Chemicals", Some("acme.example")).unwrap();

    for (day, cost) in [(3, 30.0), (1, 10.0)] {
        let input = ChemicalCostInput {
            chemical_id,
            supplier_id: supplier.id,
            cost,
            cost_unit: "USD".to_owned(),
            amount: 100.0,
            amount_unit: "g".to_owned(),
            usd_cost_per_gram: cost / 100.0,
            datetime: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
            note: None,
        };
        storage.add_chemical_cost(&input).unwrap();
    }

    let costs = storage.chemical_costs(chemical_id).unwrap();
    assert_eq!(costs.len(), 2);
    assert_eq!(costs[0].cost, 10.0);
    assert_eq!(costs[1].datetime, Utc.with_ymd_and_hms(2024, 1, 3, 12, 0, 0).unwrap());
}

#[test]
fn test_cost_with_unknown_supplier_is_rejected() {
    let (storage, _temp_dir) = create_test_storage();
    let chemical_id = create_test_chemical(&storage, "N");
    let input = ChemicalCostInput {
        chemical_id,
        supplier_id: 77,
        cost: 1.0,
        cost_unit: "USD".to_owned(),
        amount: 1.0,
        amount_unit: "g".to_owned(),
        usd_cost_per_gram: 1.0,
        datetime: Utc::now(),
        note: None,
    };
    assert!(storage.add_chemical_cost(&input).unwrap_err().is_constraint());
}

#[test]
fn test_substructure_links() {
    let (storage, _temp_dir) = create_test_storage();
    let chemical_id = create_test_chemical(&storage, "C=CC(=O)OC");
    let monomer = storage.save_monomer(&MonomerInput::new("C=CC(=O)OC").unwrap()).unwrap();
    let vinyl = storage.save_smarts(&SmartsInput::new("C=C").unwrap().name("vinyl")).unwrap();
    let ester = storage.save_smarts(&SmartsInput::new("C(=O)O").unwrap().name("ester")).unwrap();

    storage.link_chemical_substructure(chemical_id, vinyl.id).unwrap();
    storage.link_chemical_substructure(chemical_id, ester.id).unwrap();
    storage.link_monomer_substructure(monomer.id, vinyl.id).unwrap();

    assert_eq!(storage.chemical_substructures(chemical_id).unwrap(), vec![vinyl.clone(), ester]);
    assert_eq!(storage.monomer_substructures(monomer.id).unwrap(), vec![vinyl.clone()]);
    assert_eq!(storage.get_smarts(vinyl.id).unwrap(), Some(vinyl.clone()));

    let err = storage.link_chemical_substructure(chemical_id, vinyl.id).unwrap_err();
    assert!(err.is_duplicate(), "{err:?}");
}

#[test]
fn test_save_and_get_monomer() {
    let (storage, _temp_dir) = create_test_storage();
    let input = MonomerInput::new("C=Cc1ccccc1").unwrap().reference("Polymer Handbook", "PH-42");
    let saved = storage.save_monomer(&input).unwrap();

    assert_eq!(storage.get_monomer(saved.id).unwrap(), Some(saved.clone()));
    assert_eq!(storage.get_monomer_by_smiles("C=Cc1ccccc1").unwrap(), Some(saved));
    assert!(storage.save_monomer(&input).unwrap_err().is_duplicate());
}

#[test]
fn test_save_and_get_solvent_with_fingerprints() {
    let (storage, _temp_dir) = create_test_storage();
    let input = SolventInput::new("ClCCl")
        .unwrap()
        .fingerprint(json!([0, 1, 1, 0]))
        .map4_fingerprint(json!([17, 4]));
    let saved = storage.save_solvent(&input).unwrap();

    let loaded = storage.get_solvent_by_smiles("ClCCl").unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(storage.get_solvent(saved.id).unwrap(), Some(saved));
}

#[test]
fn test_solubility_data_for_polymer() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PVA");
    let sol_id = create_test_solvent(&storage, "O");

    let input = SolubilityDataInput::new(pol_id, sol_id, "soluble", "lab notebook 7")
        .temperature_range(20.0, 80.0);
    let saved = storage.add_solubility_data(&input).unwrap();

    let listed = storage.solubility_for_polymer(pol_id).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, saved.id);
    assert_eq!(listed[0].temp_min, Some(20.0));
    assert_eq!(listed[0].temp_max, Some(80.0));
    assert_eq!(listed[0].solubility, "soluble");
    assert!(storage.solubility_for_polymer(pol_id + 1).unwrap().is_empty());
}
