use crate::core::area::AreaLogic;
use crate::core::status::StatusLogic;
use crate::core::validate;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::wipe_all;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

/// name, location, base capacity
const SAMPLE_AREAS: &[(&str, &str, i64)] = &[
    ("Central Plaza", "1 Market Street, City Centre", 120),
    ("Riverside Garage", "12 Riverside Avenue", 80),
    ("Airport Long-Term", "Terminal Road, North Gate", 300),
    ("University Lot B", "Campus North, Science Park", 60),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub areas_added: usize,
    pub areas_skipped: usize,
    pub statuses_added: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResetReport {
    pub areas: usize,
    pub statuses: usize,
    pub accounts: usize,
}

pub struct SeedLogic;

impl SeedLogic {
    /// Insert the sample areas with one record per vehicle type.
    /// Areas whose name already exists are left alone.
    ///
    /// Vehicle types are normalized like CLI input and deduplicated first;
    /// an invalid one aborts before anything is written. Each area is
    /// committed together with its records.
    pub fn seed(pool: &mut DbPool, vehicle_types: &[String]) -> AppResult<SeedReport> {
        let vehicle_types = normalized_types(vehicle_types)?;
        let mut report = SeedReport::default();

        for (area_idx, (name, location, base)) in SAMPLE_AREAS.iter().enumerate() {
            let added = pool.with_tx(|tx| {
                let area = AreaLogic::add_in(tx, name, location)?;

                for (type_idx, vehicle_type) in vehicle_types.iter().enumerate() {
                    let (capacity, occupied) = sample_counts(*base, area_idx, type_idx);
                    StatusLogic::add_in(tx, area.id, vehicle_type, Some(capacity), Some(occupied))?;
                }
                Ok(vehicle_types.len())
            });

            match added {
                Ok(n) => {
                    report.areas_added += 1;
                    report.statuses_added += n;
                }
                Err(AppError::DuplicateName(_)) => {
                    warning(format!("Area '{}' already exists, skipped.", name));
                    report.areas_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        pool.with_tx(|tx| {
            audit(
                tx,
                "seed",
                "",
                &format!(
                    "Seeded {} area(s) with {} status record(s)",
                    report.areas_added, report.statuses_added
                ),
            )
        })?;

        Ok(report)
    }

    /// Delete every area, status record and account in one transaction.
    pub fn reset(pool: &mut DbPool) -> AppResult<ResetReport> {
        pool.with_tx(|tx| {
            let (areas, statuses, accounts) = wipe_all(tx)?;
            audit(
                tx,
                "reset",
                "",
                &format!("Removed {areas} area(s), {statuses} status record(s), {accounts} account(s)"),
            )?;
            Ok(ResetReport {
                areas,
                statuses,
                accounts,
            })
        })
    }
}

/// Lowercased, trimmed and deduplicated, in first-seen order.
fn normalized_types(raw: &[String]) -> AppResult<Vec<String>> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for t in raw {
        let t = validate::vehicle_type(t)?;
        if !out.contains(&t) {
            out.push(t);
        }
    }
    Ok(out)
}

/// Deterministic sample numbers: capacity shrinks with the type index,
/// occupancy cycles through 0%, 25%, 50% and 75%.
fn sample_counts(base: i64, area_idx: usize, type_idx: usize) -> (i64, i64) {
    let capacity = (base / (type_idx as i64 * 3 + 1)).max(1);
    let quarter = ((area_idx + type_idx) % 4) as i64;
    (capacity, capacity * quarter / 4)
}
