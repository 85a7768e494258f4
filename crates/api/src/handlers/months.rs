//! Handlers for the month-names listing.
//!
//! A small fixed catalog that exercises paging and both sort fields end to
//! end through [`ListParams`].

use axum::extract::State;
use axum::Json;
use pagesort_core::{ConstraintSpec, ListRequest, SortDirection};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ListParams;
use crate::response::PageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// Sort fields accepted by `GET /api/v1/months`.
pub const MONTH_SORT_FIELDS: [&str; 2] = ["name", "days"];

/// Page size bound for the month listing; a single page holds the full year.
pub const MONTHS_PAGE_LIMIT: i64 = 12;

/// Constraints for `GET /api/v1/months`.
pub fn months_spec() -> ConstraintSpec {
    ConstraintSpec::new()
        .with_default_limit(MONTHS_PAGE_LIMIT)
        .with_max_limit(MONTHS_PAGE_LIMIT)
        .with_sort_fields(MONTH_SORT_FIELDS)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A month and its length in a common (non-leap) year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthInfo {
    pub name: &'static str,
    pub days: u32,
}

const CALENDAR: [MonthInfo; 12] = [
    MonthInfo { name: "January", days: 31 },
    MonthInfo { name: "February", days: 28 },
    MonthInfo { name: "March", days: 31 },
    MonthInfo { name: "April", days: 30 },
    MonthInfo { name: "May", days: 31 },
    MonthInfo { name: "June", days: 30 },
    MonthInfo { name: "July", days: 31 },
    MonthInfo { name: "August", days: 31 },
    MonthInfo { name: "September", days: 30 },
    MonthInfo { name: "October", days: 31 },
    MonthInfo { name: "November", days: 30 },
    MonthInfo { name: "December", days: 31 },
];

/// The twelve months in calendar order.
#[derive(Debug, Clone)]
pub struct MonthCatalog {
    months: Vec<MonthInfo>,
}

impl Default for MonthCatalog {
    fn default() -> Self {
        Self {
            months: CALENDAR.to_vec(),
        }
    }
}

impl MonthCatalog {
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Sort and slice the catalog for one request.
    ///
    /// Sorting is stable, so months that tie on `days` keep calendar order in
    /// both directions. An offset past the end yields an empty page.
    pub fn page(&self, request: &ListRequest) -> Vec<MonthInfo> {
        let mut months = self.months.clone();
        let descending = request.sort_dir() == SortDirection::Descending;

        match request.sort_by() {
            Some("name") if descending => months.sort_by(|a, b| b.name.cmp(a.name)),
            Some("name") => months.sort_by(|a, b| a.name.cmp(b.name)),
            Some("days") if descending => months.sort_by(|a, b| b.days.cmp(&a.days)),
            Some("days") => months.sort_by_key(|m| m.days),
            _ => {}
        }

        let offset = usize::try_from(request.offset()).unwrap_or(0);
        let limit = usize::try_from(request.limit()).unwrap_or(0);
        months.into_iter().skip(offset).take(limit).collect()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/months
///
/// List month names, paged by `offset`/`limit` and sorted by `name` or `days`.
pub async fn list_months(
    State(state): State<AppState>,
    ListParams(request): ListParams,
) -> AppResult<Json<PageResponse<MonthInfo>>> {
    let months = state.months.page(&request);

    tracing::debug!(
        count = months.len(),
        offset = request.offset(),
        "Returning month entries",
    );

    Ok(Json(PageResponse::new(months, &request, state.months.len())))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
