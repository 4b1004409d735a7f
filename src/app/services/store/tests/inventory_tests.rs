//! Tests for the inventory sub-store

use super::*;
use crate::Error;

#[test]
fn test_create_and_get() {
    let db = test_database();
    let id = db
        .inventory()
        .create(&sample_item("Drum belt", 10, "Washer"))
        .unwrap();

    let item = db.inventory().get(id).unwrap();
    assert_eq!(item.id, id);
    assert_eq!(item.name, "Drum belt");
    assert_eq!(item.quantity, 10);
    assert_eq!(item.machine_type, "Washer");
}

#[test]
fn test_get_unknown_is_not_found() {
    let db = test_database();
    let err = db.inventory().get(42).unwrap_err();
    assert!(matches!(
        err,
        Error::NotFound {
            entity: "Inventory item",
            id: 42
        }
    ));
}

#[test]
fn test_list_filtered_by_machine_type() {
    let db = seeded_database();

    let washers = db.inventory().list(Some("Washer")).unwrap();
    assert_eq!(washers.len(), 1);
    assert_eq!(washers[0].name, "Drum belt");

    let all = db.inventory().list(None).unwrap();
    assert_eq!(all.len(), 2);

    let none = db.inventory().list(Some("Press")).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_deduct_reduces_quantity() {
    let db = test_database();
    let id = db
        .inventory()
        .create(&sample_item("Drum belt", 5, "Washer"))
        .unwrap();

    db.inventory().deduct(id, 3).unwrap();
    assert_eq!(db.inventory().available_quantity(id).unwrap(), 2);
}

#[test]
fn test_deduct_never_goes_negative() {
    let db = test_database();
    let id = db
        .inventory()
        .create(&sample_item("Drum belt", 5, "Washer"))
        .unwrap();

    db.inventory().deduct(id, 3).unwrap();

    // Second deduction exceeds what's left: rejected, quantity unchanged.
    let err = db.inventory().deduct(id, 3).unwrap_err();
    match err {
        Error::InsufficientQuantity {
            item_id,
            requested,
            available,
        } => {
            assert_eq!(item_id, id);
            assert_eq!(requested, 3);
            assert_eq!(available, 2);
        }
        other => panic!("Expected InsufficientQuantity, got {:?}", other),
    }
    assert_eq!(db.inventory().available_quantity(id).unwrap(), 2);
}

#[test]
fn test_deduct_exact_quantity_to_zero() {
    let db = test_database();
    let id = db
        .inventory()
        .create(&sample_item("Drum belt", 5, "Washer"))
        .unwrap();

    db.inventory().deduct(id, 5).unwrap();
    assert_eq!(db.inventory().available_quantity(id).unwrap(), 0);

    assert!(db.inventory().deduct(id, 1).is_err());
}

#[test]
fn test_deduct_requires_positive_quantity() {
    let db = test_database();
    let id = db
        .inventory()
        .create(&sample_item("Drum belt", 5, "Washer"))
        .unwrap();

    assert!(matches!(
        db.inventory().deduct(id, 0),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        db.inventory().deduct(id, -2),
        Err(Error::InvalidArgument { .. })
    ));
    assert_eq!(db.inventory().available_quantity(id).unwrap(), 5);
}

#[test]
fn test_deduct_unknown_item() {
    let db = test_database();
    assert!(matches!(
        db.inventory().deduct(42, 1),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_create_rejects_invalid_record() {
    let db = test_database();
    let mut record = sample_item("Drum belt", 5, "Washer");
    record.price = -1.0;
    assert!(db.inventory().create(&record).is_err());
    assert!(db.inventory().list(None).unwrap().is_empty());
}
