use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-vehicle-type counters owned by a parking area.
///
/// `area_id` only points back at the owning area; the area itself holds
/// the records (see `Area::statuses`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusRecord {
    pub id: i64,
    pub area_id: i64,           // ⇔ parking_status.area_id (FK parking_areas.id)
    pub vehicle_type: String,   // ⇔ parking_status.vehicle_type ("car", "bike", ...)
    pub capacity: i64,          // ⇔ parking_status.capacity (>= 1)
    pub occupied: i64,          // ⇔ parking_status.occupied (0..=capacity)
    pub created_at: DateTime<Utc>,
}

impl StatusRecord {
    /// Free spots for this vehicle type, never negative.
    pub fn available(&self) -> i64 {
        (self.capacity - self.occupied).max(0)
    }

    pub fn is_full(&self) -> bool {
        self.occupied >= self.capacity
    }

    pub fn occupancy_percentage(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.occupied as f64 / self.capacity as f64) * 100.0
    }
}
