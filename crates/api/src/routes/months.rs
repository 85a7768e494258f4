//! Route definitions for the month-names listing.

use axum::routing::get;
use axum::Router;
use pagesort_core::ConfigError;

use crate::extract::list_constraints;
use crate::handlers::months;
use crate::state::AppState;

/// Month routes mounted at `/months`.
///
/// ```text
/// GET    /                  -> list_months (offset, limit, sortBy=name|days, sortDir)
/// ```
///
/// Fails if the month constraints do not pass their registration check.
pub fn router() -> Result<Router<AppState>, ConfigError> {
    Ok(Router::new()
        .route("/", get(months::list_months))
        .route_layer(list_constraints(months::months_spec())?))
}
