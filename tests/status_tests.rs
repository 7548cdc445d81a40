mod common;

use common::{count_log, lot_a, test_pool};
use parkwatch::core::area::AreaLogic;
use parkwatch::core::query::QueryLogic;
use parkwatch::core::status::{MAX_CAPACITY, StatusLogic, validate_counts};
use parkwatch::errors::AppError;
use std::thread::sleep;
use std::time::Duration;

#[test]
fn add_status_refreshes_area_timestamp() {
    let mut pool = test_pool();
    let area = AreaLogic::add(&mut pool, "Lot A", "North").unwrap();

    sleep(Duration::from_millis(5));
    let status = StatusLogic::add(&mut pool, area.id, "car", Some(10), Some(4)).unwrap();

    assert_eq!(status.area_id, area.id);
    assert_eq!(status.available(), 6);

    let reloaded = QueryLogic::area_by_id(&pool, area.id).unwrap();
    assert!(reloaded.last_updated > area.last_updated);
    assert_eq!(reloaded.statuses.len(), 1);
    assert_eq!(count_log(&pool, "add_status"), 1);
}

#[test]
fn duplicate_vehicle_type_is_rejected() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);

    let err = StatusLogic::add(&mut pool, lot.id, "car", Some(3), Some(0)).unwrap_err();
    assert!(matches!(err, AppError::DuplicateVehicleType { .. }));

    let after = QueryLogic::area_by_id(&pool, lot.id).unwrap();
    assert_eq!(after.statuses, lot.statuses);
    assert_eq!(after.last_updated, lot.last_updated);
    assert_eq!(count_log(&pool, "add_status"), 2);
}

#[test]
fn add_to_missing_area_is_not_found() {
    let mut pool = test_pool();
    let err = StatusLogic::add(&mut pool, 999, "car", Some(1), Some(0)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn occupied_above_capacity_is_rejected() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);
    let bike = lot.status_for("bike").unwrap().clone();

    let err = StatusLogic::add(&mut pool, lot.id, "bus", Some(2), Some(3)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));

    let err = StatusLogic::update(&mut pool, bike.id, "bike", Some(5), Some(6)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));

    let stored = QueryLogic::status_by_id(&pool, bike.id).unwrap();
    assert_eq!(stored, bike);
    assert!(!QueryLogic::area_by_id(&pool, lot.id).unwrap().has_vehicle_type("bus"));
}

#[test]
fn count_validation_rules() {
    assert_eq!(validate_counts(Some(10), Some(4)).unwrap(), (10, 4));
    assert_eq!(validate_counts(Some(3), None).unwrap(), (3, 0));
    assert_eq!(validate_counts(Some(5), Some(5)).unwrap(), (5, 5));

    // missing capacity counts as 0, which no record may have
    assert!(matches!(validate_counts(None, None), Err(AppError::InvalidRange(_))));
    assert!(matches!(validate_counts(None, Some(1)), Err(AppError::InvalidRange(_))));
    assert!(matches!(validate_counts(Some(4), Some(-1)), Err(AppError::InvalidRange(_))));
    assert!(matches!(validate_counts(Some(-2), Some(-3)), Err(AppError::InvalidRange(_))));
    assert!(matches!(validate_counts(Some(0), Some(0)), Err(AppError::InvalidRange(_))));
}

#[test]
fn quick_set_returns_new_availability() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);
    let car = lot.status_for("car").unwrap().clone();

    let outcome = StatusLogic::quick_set_occupied(&mut pool, car.id, Some(7)).unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.occupied, 7);
    assert_eq!(outcome.available, 3);

    let full = StatusLogic::quick_set_occupied(&mut pool, car.id, Some(10)).unwrap();
    assert_eq!(full.available, 0);
    assert!(QueryLogic::status_by_id(&pool, car.id).unwrap().is_full());

    let json = serde_json::to_value(full).unwrap();
    assert_eq!(json, serde_json::json!({"success": true, "available": 0, "occupied": 10}));
}

#[test]
fn quick_set_out_of_bounds_keeps_stored_value() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);
    let car = lot.status_for("car").unwrap().clone();

    for bad in [None, Some(-1), Some(11)] {
        let err = StatusLogic::quick_set_occupied(&mut pool, car.id, bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidRange(_)), "value {bad:?}");
    }

    assert_eq!(QueryLogic::status_by_id(&pool, car.id).unwrap().occupied, 4);
    assert_eq!(count_log(&pool, "set_status"), 0);
}

#[test]
fn quick_set_on_missing_record_is_not_found() {
    let mut pool = test_pool();
    let err = StatusLogic::quick_set_occupied(&mut pool, 42, Some(1)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn update_replaces_type_and_counters() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);
    let car = lot.status_for("car").unwrap().clone();

    let updated = StatusLogic::update(&mut pool, car.id, "van", Some(12), Some(2)).unwrap();
    assert_eq!(updated.vehicle_type, "van");
    assert_eq!(updated.available(), 10);

    let area = QueryLogic::area_by_id(&pool, lot.id).unwrap();
    assert!(area.has_vehicle_type("van"));
    assert!(!area.has_vehicle_type("car"));
    assert_eq!(area.available_spots(), 10);
}

#[test]
fn update_does_not_recheck_vehicle_type_uniqueness() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);
    let car = lot.status_for("car").unwrap().clone();

    // renaming "car" to the existing "bike" is accepted on the update path
    StatusLogic::update(&mut pool, car.id, "bike", Some(10), Some(4)).unwrap();

    let area = QueryLogic::area_by_id(&pool, lot.id).unwrap();
    let bikes = area.statuses.iter().filter(|s| s.vehicle_type == "bike").count();
    assert_eq!(bikes, 2);
}

#[test]
fn delete_status_removes_only_that_record() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);
    let bike = lot.status_for("bike").unwrap().clone();

    let removed = StatusLogic::delete(&mut pool, bike.id).unwrap();
    assert_eq!(removed.vehicle_type, "bike");

    assert!(QueryLogic::status_by_id(&pool, bike.id).unwrap_err().is_not_found());
    let area = QueryLogic::area_by_id(&pool, lot.id).unwrap();
    assert_eq!(area.statuses.len(), 1);
    assert_eq!(area.available_spots(), 6);

    assert!(StatusLogic::delete(&mut pool, bike.id).unwrap_err().is_not_found());
}

#[test]
fn vehicle_types_are_open_ended() {
    let mut pool = test_pool();
    let area = AreaLogic::add(&mut pool, "Depot", "Harbour").unwrap();

    for t in ["car", "truck", "e-scooter"] {
        StatusLogic::add(&mut pool, area.id, t, Some(2), Some(1)).unwrap();
    }

    let area = QueryLogic::area_by_id(&pool, area.id).unwrap();
    let types: Vec<&str> = area.statuses.iter().map(|s| s.vehicle_type.as_str()).collect();
    assert_eq!(types, vec!["car", "e-scooter", "truck"]);
}

#[test]
fn capacity_is_bounded() {
    assert_eq!(
        validate_counts(Some(MAX_CAPACITY), Some(0)).unwrap(),
        (MAX_CAPACITY, 0)
    );
    assert!(matches!(
        validate_counts(Some(MAX_CAPACITY + 1), Some(0)),
        Err(AppError::InvalidRange(_))
    ));
    assert!(matches!(
        validate_counts(Some(i64::MAX), Some(0)),
        Err(AppError::InvalidRange(_))
    ));
}

#[test]
fn huge_capacities_are_rejected_and_totals_stay_exact() {
    let mut pool = test_pool();
    let area = AreaLogic::add(&mut pool, "Stadium", "Ring road").unwrap();

    let err = StatusLogic::add(&mut pool, area.id, "car", Some(i64::MAX), Some(0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));

    let car = StatusLogic::add(&mut pool, area.id, "car", Some(1), Some(0)).unwrap();
    let err = StatusLogic::update(&mut pool, car.id, "car", Some(i64::MAX), Some(0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange(_)));

    StatusLogic::update(&mut pool, car.id, "car", Some(MAX_CAPACITY), Some(0)).unwrap();
    StatusLogic::add(&mut pool, area.id, "bus", Some(MAX_CAPACITY), Some(1)).unwrap();

    let area = QueryLogic::area_by_id(&pool, area.id).unwrap();
    assert_eq!(area.total_capacity(), 2 * MAX_CAPACITY);
    assert_eq!(area.available_spots(), 2 * MAX_CAPACITY - 1);

    let stats = QueryLogic::dashboard(&pool).unwrap().stats;
    assert_eq!(stats.total_capacity, 2 * MAX_CAPACITY);
    assert_eq!(stats.total_available, 2 * MAX_CAPACITY - 1);
}
