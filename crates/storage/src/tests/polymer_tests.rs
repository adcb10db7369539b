#![expect(clippy::unwrap_used, reason = "test code")]

use super::{create_test_polymer, create_test_storage};
use crate::storage::get_conn;
use pinrex_core::{
    PolymerApplicationInput, PolymerInput, PolymerPropertyInput, PropertyErrorType, PropertyInput,
};
use rusqlite::params;
use serde_json::json;

fn create_test_property(storage: &crate::Storage) -> i64 {
    let input = PropertyInput {
        name: "Glass transition temperature".to_owned(),
        short_name: Some("Tg".to_owned()),
        unit: Some("K".to_owned()),
        plot_symbol: None,
    };
    storage.save_property(&input).unwrap().id
}

#[test]
fn test_save_and_get_polymer() {
    let (storage, _temp_dir) = create_test_storage();
    let input = PolymerInput::with_smiles("*CC(*)c1ccccc1")
        .unwrap()
        .rid("PS-001")
        .pid("P12")
        .category("vinyl")
        .fingerprint(json!({"bits": [1, 5, 9]}));
    let saved = storage.save_polymer(&input).unwrap();

    let by_id = storage.get_polymer(saved.id).unwrap().unwrap();
    assert_eq!(by_id, saved);
    assert_eq!(by_id.fingerprint, Some(json!({"bits": [1, 5, 9]})));

    let by_rid = storage.get_polymer_by_rid("PS-001").unwrap().unwrap();
    assert_eq!(by_rid.id, saved.id);
    assert!(storage.get_polymer_by_rid("missing").unwrap().is_none());
}

#[test]
fn test_duplicate_polymer_rid_is_rejected() {
    let (storage, _temp_dir) = create_test_storage();
    storage.save_polymer(&PolymerInput::default().rid("dup")).unwrap();
    let err = storage.save_polymer(&PolymerInput::default().rid("dup")).unwrap_err();
    assert!(err.is_duplicate(), "{err:?}");
}

#[test]
fn test_polymers_without_smiles_are_allowed() {
    let (storage, _temp_dir) = create_test_storage();
    let a = storage.save_polymer(&PolymerInput::default().rid("A")).unwrap();
    let b = storage.save_polymer(&PolymerInput::default().rid("B")).unwrap();
    assert_ne!(a.id, b.id);
    assert!(a.smiles.is_none());
}

#[test]
fn test_property_with_typed_error_round_trips() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PMMA");
    let property_id = create_test_property(&storage);

    let mut input =
        PolymerPropertyInput::new(pol_id, property_id, 378.0).error(2.5, PropertyErrorType::Sd);
    input.conditions = Some(json!({"rate": "10 K/min"}));
    storage.add_polymer_property(&input).unwrap();

    let values = storage.polymer_properties(pol_id).unwrap();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].error_type, Some(PropertyErrorType::Sd));
    assert_eq!(values[0].error_value, Some(2.5));
    assert_eq!(values[0].conditions, Some(json!({"rate": "10 K/min"})));
}

#[test]
fn test_out_of_enum_error_type_is_rejected_by_store() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PE");
    let property_id = create_test_property(&storage);

    let conn = get_conn(&storage.pool).unwrap();
    let err = conn
        .execute(
            "INSERT INTO polymer_properties (pol_id, property_id, value, error_value, error_type)
             VALUES (?1, ?2, 1.0, 0.1, 'std')",
            params![pol_id, property_id],
        )
        .map_err(crate::StorageError::from)
        .unwrap_err();
    assert!(err.is_constraint(), "{err:?}");
    drop(conn);

    assert!(storage.polymer_properties(pol_id).unwrap().is_empty());
}

#[test]
fn test_property_for_missing_polymer_is_rejected() {
    let (storage, _temp_dir) = create_test_storage();
    let property_id = create_test_property(&storage);
    let err = storage
        .add_polymer_property(&PolymerPropertyInput::new(12_345, property_id, 1.0))
        .unwrap_err();
    assert!(err.is_constraint(), "{err:?}");
}

#[test]
fn test_polymer_applications() {
    let (storage, _temp_dir) = create_test_storage();
    let pol_id = create_test_polymer(&storage, "PLA");
    let input = PolymerApplicationInput {
        pol_id,
        application: "food packaging".to_owned(),
        category: "packaging".to_owned(),
        note: None,
        reference: Some("doi:10.1000/xyz".to_owned()),
    };
    let saved = storage.add_polymer_application(&input).unwrap();

    let listed = storage.polymer_applications(pol_id).unwrap();
    assert_eq!(listed, vec![saved]);
}
