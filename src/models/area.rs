use super::status::StatusRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A named parking location together with the status records it owns,
/// ordered by vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub statuses: Vec<StatusRecord>,
}

impl Area {
    /// Total available spots across all vehicle types (0 without records).
    pub fn available_spots(&self) -> i64 {
        self.statuses.iter().map(StatusRecord::available).sum()
    }

    pub fn total_capacity(&self) -> i64 {
        self.statuses.iter().map(|s| s.capacity).sum()
    }

    pub fn total_occupied(&self) -> i64 {
        self.statuses.iter().map(|s| s.occupied).sum()
    }

    /// Occupied share of the total capacity, as a percentage.
    /// An area without capacity reports 0.0.
    pub fn occupancy_rate(&self) -> f64 {
        let capacity = self.total_capacity();
        if capacity == 0 {
            return 0.0;
        }
        (self.total_occupied() as f64 / capacity as f64) * 100.0
    }

    pub fn status_for(&self, vehicle_type: &str) -> Option<&StatusRecord> {
        self.statuses.iter().find(|s| s.vehicle_type == vehicle_type)
    }

    pub fn has_vehicle_type(&self, vehicle_type: &str) -> bool {
        self.status_for(vehicle_type).is_some()
    }
}
