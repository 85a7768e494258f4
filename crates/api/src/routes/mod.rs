pub mod health;
pub mod months;

use axum::Router;
use pagesort_core::ConfigError;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /months                                          month names (paged, sortable)
/// ```
///
/// Every list route registers its constraints here, so a misconfigured spec
/// surfaces as an error before the server binds.
pub fn api_routes() -> Result<Router<AppState>, ConfigError> {
    Ok(Router::new()
        // Month names listing.
        .nest("/months", months::router()?))
}
