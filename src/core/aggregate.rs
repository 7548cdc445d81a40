use crate::models::area::Area;
use serde::Serialize;

/// Totals across every parking area, shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GlobalStats {
    pub total_areas: usize,
    pub total_capacity: i64,
    pub total_occupied: i64,
    pub total_available: i64,
}

impl GlobalStats {
    /// Capacity and occupancy are summed record by record; availability
    /// is summed from each area's `available_spots`.
    pub fn collect(areas: &[Area]) -> Self {
        let mut stats = GlobalStats {
            total_areas: areas.len(),
            ..Default::default()
        };

        for area in areas {
            for status in &area.statuses {
                stats.total_capacity += status.capacity;
                stats.total_occupied += status.occupied;
            }
            stats.total_available += area.available_spots();
        }

        stats
    }

    /// Same totals, derived from the per-area sums only.
    pub fn from_area_totals(areas: &[Area]) -> Self {
        GlobalStats {
            total_areas: areas.len(),
            total_capacity: areas.iter().map(Area::total_capacity).sum(),
            total_occupied: areas.iter().map(Area::total_occupied).sum(),
            total_available: areas.iter().map(Area::available_spots).sum(),
        }
    }

    pub fn occupancy_rate(&self) -> f64 {
        if self.total_capacity == 0 {
            return 0.0;
        }
        (self.total_occupied as f64 / self.total_capacity as f64) * 100.0
    }
}
