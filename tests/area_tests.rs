mod common;

use common::{count_log, lot_a, test_pool};
use parkwatch::core::area::AreaLogic;
use parkwatch::core::query::QueryLogic;
use parkwatch::core::status::StatusLogic;
use parkwatch::errors::AppError;
use parkwatch::models::views::AreaStatusView;

#[test]
fn add_area_starts_empty() {
    let mut pool = test_pool();
    let area = AreaLogic::add(&mut pool, "Lot A", "North entrance").unwrap();

    assert!(area.id > 0);
    assert!(area.statuses.is_empty());
    assert_eq!(area.available_spots(), 0);
    assert_eq!(area.created_at, area.last_updated);
    assert_eq!(count_log(&pool, "add_area"), 1);
}

#[test]
fn duplicate_area_name_is_rejected() {
    let mut pool = test_pool();
    AreaLogic::add(&mut pool, "Lot A", "North").unwrap();

    let err = AreaLogic::add(&mut pool, "Lot A", "South").unwrap_err();
    assert!(matches!(err, AppError::DuplicateName(ref n) if n == "Lot A"));

    assert_eq!(QueryLogic::list_areas(&pool).unwrap().len(), 1);
    assert_eq!(count_log(&pool, "add_area"), 1);
}

#[test]
fn rename_to_own_name_is_allowed() {
    let mut pool = test_pool();
    let area = AreaLogic::add(&mut pool, "Lot A", "North").unwrap();

    let updated = AreaLogic::rename(&mut pool, area.id, "Lot A", "North gate").unwrap();
    assert_eq!(updated.name, "Lot A");
    assert_eq!(updated.location, "North gate");
}

#[test]
fn rename_to_another_areas_name_fails() {
    let mut pool = test_pool();
    let a = AreaLogic::add(&mut pool, "Lot A", "North").unwrap();
    AreaLogic::add(&mut pool, "Lot B", "South").unwrap();

    let err = AreaLogic::rename(&mut pool, a.id, "Lot B", "Elsewhere").unwrap_err();
    assert!(matches!(err, AppError::DuplicateName(_)));

    let unchanged = QueryLogic::area_by_id(&pool, a.id).unwrap();
    assert_eq!(unchanged.name, "Lot A");
    assert_eq!(unchanged.location, "North");
}

#[test]
fn rename_missing_area_is_not_found() {
    let mut pool = test_pool();
    let err = AreaLogic::rename(&mut pool, 5, "X", "Y").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_cascades_to_status_records() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);
    let status_ids: Vec<i64> = lot.statuses.iter().map(|s| s.id).collect();

    let removed = AreaLogic::delete(&mut pool, lot.id).unwrap();
    assert_eq!(removed.name, "Lot A");
    assert_eq!(removed.statuses.len(), 2);

    assert!(QueryLogic::area_by_id(&pool, lot.id).unwrap_err().is_not_found());
    for id in status_ids {
        assert!(QueryLogic::status_by_id(&pool, id).unwrap_err().is_not_found());
    }

    let orphans: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM parking_status", [], |r| r.get(0))
        .unwrap();
    assert_eq!(orphans, 0);

    assert!(AreaLogic::delete(&mut pool, lot.id).unwrap_err().is_not_found());
}

#[test]
fn deleted_ids_are_not_reused() {
    let mut pool = test_pool();
    let first = AreaLogic::add(&mut pool, "Old", "Gone").unwrap();
    AreaLogic::delete(&mut pool, first.id).unwrap();

    let second = AreaLogic::add(&mut pool, "New", "Here").unwrap();
    assert_ne!(second.id, first.id);
    assert!(QueryLogic::area_by_id(&pool, first.id).unwrap_err().is_not_found());
}

#[test]
fn list_is_ordered_by_name() {
    let mut pool = test_pool();
    for name in ["Zeta", "Alpha", "Mid"] {
        AreaLogic::add(&mut pool, name, "Somewhere").unwrap();
    }

    let names: Vec<String> = QueryLogic::list_areas(&pool)
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
}

#[test]
fn search_matches_name_or_location_ignoring_case() {
    let mut pool = test_pool();
    AreaLogic::add(&mut pool, "Central Plaza", "Market Street").unwrap();
    AreaLogic::add(&mut pool, "Riverside", "Harbour Road").unwrap();
    AreaLogic::add(&mut pool, "Airport", "Terminal plaza exit").unwrap();

    let hits: Vec<String> = QueryLogic::search(&pool, "PLAZA")
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(hits, vec!["Airport", "Central Plaza"]);

    assert_eq!(QueryLogic::search(&pool, "harbour").unwrap().len(), 1);
    assert!(QueryLogic::search(&pool, "nowhere").unwrap().is_empty());
    // no wildcard semantics
    assert!(QueryLogic::search(&pool, "%").unwrap().is_empty());
}

#[test]
fn blank_search_returns_everything() {
    let mut pool = test_pool();
    AreaLogic::add(&mut pool, "A", "x").unwrap();
    AreaLogic::add(&mut pool, "B", "y").unwrap();

    assert_eq!(QueryLogic::search(&pool, "").unwrap().len(), 2);
    assert_eq!(QueryLogic::search(&pool, "   ").unwrap().len(), 2);
}

#[test]
fn search_items_carry_counts() {
    let mut pool = test_pool();
    lot_a(&mut pool);

    let items = QueryLogic::search_items(&pool, "lot").unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].status_count, 2);
    assert_eq!(items[0].available_spots, 6);
}

#[test]
fn status_view_json_shape() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);

    let view = QueryLogic::status_view(&pool, lot.id).unwrap();
    assert_eq!(view, AreaStatusView::from(&lot));

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["areaId"], lot.id);
    assert_eq!(json["areaName"], "Lot A");
    assert_eq!(json["location"], "North entrance");
    assert_eq!(json["available_spots"], 6);

    let statuses = json["statuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0]["vehicle_type"], "bike");
    assert_eq!(statuses[0]["available"], 0);
    assert_eq!(statuses[1]["vehicle_type"], "car");
    assert_eq!(statuses[1]["available"], 6);

    let ts = json["last_updated"].as_str().unwrap();
    assert!(ts.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[test]
fn status_view_of_empty_area() {
    let mut pool = test_pool();
    let area = AreaLogic::add(&mut pool, "Empty", "Nowhere").unwrap();

    let view = QueryLogic::status_view(&pool, area.id).unwrap();
    assert!(view.statuses.is_empty());
    assert_eq!(view.available_spots, 0);

    assert!(QueryLogic::status_view(&pool, 404).unwrap_err().is_not_found());
}

#[test]
fn owning_area_resolves_back_reference() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);
    let other = AreaLogic::add(&mut pool, "Lot B", "South").unwrap();
    let bus = StatusLogic::add(&mut pool, other.id, "bus", Some(4), Some(1)).unwrap();

    let owner = QueryLogic::owning_area(&pool, &lot.statuses[0]).unwrap();
    assert_eq!(owner.id, lot.id);
    assert_eq!(QueryLogic::owning_area(&pool, &bus).unwrap().name, "Lot B");
}

#[test]
fn dashboard_totals_follow_mutations() {
    let mut pool = test_pool();
    let lot = lot_a(&mut pool);

    let before = QueryLogic::dashboard(&pool).unwrap();
    assert_eq!(before.stats.total_available, 6);

    let car = lot.status_for("car").unwrap();
    StatusLogic::quick_set_occupied(&mut pool, car.id, Some(0)).unwrap();

    let after = QueryLogic::dashboard(&pool).unwrap();
    assert_eq!(after.stats.total_available, 10);
    assert_eq!(after.stats.total_occupied, 5);
}
