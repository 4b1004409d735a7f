//! Tests for the machine sub-store

use super::*;
use crate::app::models::MachineStatus;
use crate::Error;

#[test]
fn test_create_and_get() {
    let db = test_database();
    let c1 = db
        .customers()
        .create(&sample_customer("Lakeside Laundry", 38.8977, -77.0365))
        .unwrap();

    let id = db
        .machines()
        .create(&sample_machine(c1, "Washer", MachineStatus::Good))
        .unwrap();

    let machine = db.machines().get(id).unwrap();
    assert_eq!(machine.id, id);
    assert_eq!(machine.customer_id, c1);
    assert_eq!(machine.machine_type, "Washer");
    assert_eq!(machine.status, MachineStatus::Good);
}

#[test]
fn test_create_unknown_customer_rejected() {
    let db = test_database();
    let err = db
        .machines()
        .create(&sample_machine(42, "Washer", MachineStatus::Good))
        .unwrap_err();
    assert!(matches!(err, Error::ForeignKeyViolation { customer_id: 42 }));
    assert_eq!(db.machines().count().unwrap(), 0);
}

#[test]
fn test_get_unknown_is_not_found() {
    let db = test_database();
    assert!(matches!(
        db.machines().get(5),
        Err(Error::NotFound {
            entity: "Machine",
            id: 5
        })
    ));
}

#[test]
fn test_list_filtered_by_status() {
    let db = seeded_database();

    let needing = db.machines().list(Some(MachineStatus::NeedRepair)).unwrap();
    assert_eq!(needing.len(), 1);
    assert_eq!(needing[0].machine_type, "Dryer");

    let good = db.machines().list(Some(MachineStatus::Good)).unwrap();
    assert_eq!(good.len(), 2);

    let all = db.machines().list(None).unwrap();
    assert_eq!(all.len(), 3);
}

#[test]
fn test_list_with_customer_names() {
    let db = seeded_database();
    let rows = db.machines().list_with_customer().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].customer_name, "Lakeside Laundry");
    assert_eq!(rows[2].customer_name, "Harbor Cleaners");
}

#[test]
fn test_distinct_models_deduplicated_and_sorted() {
    let db = seeded_database();
    // All three seeded machines share one manufacturer/name pair.
    let models = db.machines().distinct_models().unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].manufacturer, "Speed Queen");
    assert_eq!(models[0].name, "SC60");
}

#[test]
fn test_set_status() {
    let db = seeded_database();
    db.machines().set_status(1, MachineStatus::NeedRepair).unwrap();
    assert_eq!(db.machines().get(1).unwrap().status, MachineStatus::NeedRepair);

    db.machines().set_status(1, MachineStatus::Good).unwrap();
    assert_eq!(db.machines().get(1).unwrap().status, MachineStatus::Good);
}

#[test]
fn test_set_status_unknown_machine() {
    let db = test_database();
    assert!(matches!(
        db.machines().set_status(9, MachineStatus::Good),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn test_ids() {
    let db = seeded_database();
    assert_eq!(db.machines().ids().unwrap(), vec![1, 2, 3]);
}
