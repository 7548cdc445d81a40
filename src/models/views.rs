//! JSON-shaped projections handed to the outer layer.

use super::area::Area;
use super::status::StatusRecord;
use crate::core::aggregate::GlobalStats;
use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusView {
    pub vehicle_type: String,
    pub capacity: i64,
    pub occupied: i64,
    pub available: i64,
}

impl From<&StatusRecord> for StatusView {
    fn from(s: &StatusRecord) -> Self {
        Self {
            vehicle_type: s.vehicle_type.clone(),
            capacity: s.capacity,
            occupied: s.occupied,
            available: s.available(),
        }
    }
}

/// Availability of one area, as served by the public status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaStatusView {
    #[serde(rename = "areaId")]
    pub area_id: i64,
    #[serde(rename = "areaName")]
    pub area_name: String,
    pub location: String,
    pub statuses: Vec<StatusView>,
    pub available_spots: i64,
    pub last_updated: Option<String>,
}

impl From<&Area> for AreaStatusView {
    fn from(area: &Area) -> Self {
        Self {
            area_id: area.id,
            area_name: area.name.clone(),
            location: area.location.clone(),
            statuses: area.statuses.iter().map(StatusView::from).collect(),
            available_spots: area.available_spots(),
            last_updated: Some(area.last_updated.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchItem {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub status_count: usize,
    pub available_spots: i64,
}

impl From<&Area> for SearchItem {
    fn from(area: &Area) -> Self {
        Self {
            id: area.id,
            name: area.name.clone(),
            location: area.location.clone(),
            status_count: area.statuses.len(),
            available_spots: area.available_spots(),
        }
    }
}

/// Result of a quick occupancy update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickSetOutcome {
    pub success: bool,
    pub available: i64,
    pub occupied: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardArea {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub total_capacity: i64,
    pub total_occupied: i64,
    pub available_spots: i64,
    pub occupancy_rate: f64,
    pub statuses: Vec<StatusView>,
}

impl From<&Area> for DashboardArea {
    fn from(area: &Area) -> Self {
        Self {
            id: area.id,
            name: area.name.clone(),
            location: area.location.clone(),
            total_capacity: area.total_capacity(),
            total_occupied: area.total_occupied(),
            available_spots: area.available_spots(),
            occupancy_rate: area.occupancy_rate(),
            statuses: area.statuses.iter().map(StatusView::from).collect(),
        }
    }
}

/// Administrative summary: global totals plus one row per area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub stats: GlobalStats,
    pub areas: Vec<DashboardArea>,
}

impl DashboardView {
    pub fn build(areas: &[Area]) -> Self {
        Self {
            stats: GlobalStats::collect(areas),
            areas: areas.iter().map(DashboardArea::from).collect(),
        }
    }
}
