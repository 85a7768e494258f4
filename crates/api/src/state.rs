use std::sync::Arc;

use crate::handlers::months::MonthCatalog;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone, Default)]
pub struct AppState {
    /// Month catalog served by the months listing.
    pub months: Arc<MonthCatalog>,
}
