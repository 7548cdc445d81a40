use crate::db::pool::DbPool;
use crate::db::queries::{get_area, get_status, load_areas};
use crate::errors::AppResult;
use crate::models::area::Area;
use crate::models::status::StatusRecord;
use crate::models::views::{AreaStatusView, DashboardView, SearchItem};

/// Read-only access used by the public views and the dashboard.
pub struct QueryLogic;

impl QueryLogic {
    pub fn area_by_id(pool: &DbPool, id: i64) -> AppResult<Area> {
        get_area(&pool.conn, id)
    }

    pub fn status_by_id(pool: &DbPool, id: i64) -> AppResult<StatusRecord> {
        get_status(&pool.conn, id)
    }

    /// Resolve the area a status record belongs to.
    pub fn owning_area(pool: &DbPool, status: &StatusRecord) -> AppResult<Area> {
        get_area(&pool.conn, status.area_id)
    }

    /// Every area ordered by name.
    pub fn list_areas(pool: &DbPool) -> AppResult<Vec<Area>> {
        load_areas(&pool.conn)
    }

    /// Areas whose name or location contains `q`, ignoring case.
    /// A blank query matches everything.
    pub fn search(pool: &DbPool, q: &str) -> AppResult<Vec<Area>> {
        let areas = load_areas(&pool.conn)?;
        let needle = q.trim().to_lowercase();

        if needle.is_empty() {
            return Ok(areas);
        }

        Ok(areas
            .into_iter()
            .filter(|a| {
                a.name.to_lowercase().contains(&needle)
                    || a.location.to_lowercase().contains(&needle)
            })
            .collect())
    }

    pub fn status_view(pool: &DbPool, area_id: i64) -> AppResult<AreaStatusView> {
        let area = get_area(&pool.conn, area_id)?;
        Ok(AreaStatusView::from(&area))
    }

    pub fn search_items(pool: &DbPool, q: &str) -> AppResult<Vec<SearchItem>> {
        Ok(Self::search(pool, q)?.iter().map(SearchItem::from).collect())
    }

    pub fn dashboard(pool: &DbPool) -> AppResult<DashboardView> {
        let areas = load_areas(&pool.conn)?;
        Ok(DashboardView::build(&areas))
    }
}
