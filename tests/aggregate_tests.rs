mod common;

use common::{area, record};
use parkwatch::core::aggregate::GlobalStats;
use parkwatch::models::views::DashboardView;

#[test]
fn lot_a_totals() {
    let lot = area(
        1,
        "Lot A",
        vec![record(1, 1, "car", 10, 4), record(2, 1, "bike", 5, 5)],
    );

    assert_eq!(lot.available_spots(), 6);
    assert_eq!(lot.total_capacity(), 15);
    assert_eq!(lot.total_occupied(), 9);
    assert!((lot.occupancy_rate() - 60.0).abs() < 1e-9);
}

#[test]
fn area_without_records_is_empty_not_an_error() {
    let empty = area(7, "Empty", vec![]);

    assert_eq!(empty.available_spots(), 0);
    assert_eq!(empty.total_capacity(), 0);
    assert_eq!(empty.occupancy_rate(), 0.0);
}

#[test]
fn available_never_goes_negative() {
    // only reachable through hand-built data; the store rejects it
    let broken = record(1, 1, "car", 3, 5);
    assert_eq!(broken.available(), 0);
    assert!(broken.is_full());

    let lot = area(1, "Lot", vec![broken, record(2, 1, "bike", 4, 1)]);
    assert_eq!(lot.available_spots(), 3);
}

#[test]
fn status_record_helpers() {
    let s = record(1, 1, "bus", 4, 1);
    assert_eq!(s.available(), 3);
    assert!(!s.is_full());
    assert!((s.occupancy_percentage() - 25.0).abs() < 1e-9);

    let full = record(2, 1, "bus", 4, 4);
    assert!(full.is_full());
    assert_eq!(full.available(), 0);
}

#[test]
fn global_stats_match_per_area_sums() {
    let areas = vec![
        area(
            1,
            "Lot A",
            vec![record(1, 1, "car", 10, 4), record(2, 1, "bike", 5, 5)],
        ),
        area(2, "Lot B", vec![record(3, 2, "car", 20, 0)]),
        area(3, "Lot C", vec![]),
    ];

    let stats = GlobalStats::collect(&areas);
    assert_eq!(stats, GlobalStats::from_area_totals(&areas));

    assert_eq!(stats.total_areas, 3);
    assert_eq!(stats.total_capacity, 35);
    assert_eq!(stats.total_occupied, 9);
    assert_eq!(stats.total_available, 26);
    assert_eq!(
        stats.total_available,
        stats.total_capacity - stats.total_occupied
    );
}

#[test]
fn global_stats_of_nothing() {
    let stats = GlobalStats::collect(&[]);
    assert_eq!(stats, GlobalStats::default());
    assert_eq!(stats.occupancy_rate(), 0.0);
}

#[test]
fn dashboard_view_lists_every_area() {
    let areas = vec![
        area(1, "Lot A", vec![record(1, 1, "car", 10, 4)]),
        area(2, "Lot B", vec![]),
    ];

    let view = DashboardView::build(&areas);
    assert_eq!(view.stats.total_areas, 2);
    assert_eq!(view.areas.len(), 2);
    assert_eq!(view.areas[0].available_spots, 6);
    assert_eq!(view.areas[1].occupancy_rate, 0.0);

    let json = serde_json::to_value(&view).expect("serialize dashboard");
    assert_eq!(json["stats"]["total_capacity"], 10);
    assert_eq!(json["areas"][0]["statuses"][0]["vehicle_type"], "car");
}
