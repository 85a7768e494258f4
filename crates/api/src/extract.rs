//! List-parameter extractor for Axum handlers.
//!
//! A route opts in by attaching its constraints with [`list_constraints`]:
//!
//! ```ignore
//! Router::new()
//!     .route("/", get(list_items))
//!     .route_layer(list_constraints(ConstraintSpec::new().with_sort_fields(["name"]))?)
//! ```
//!
//! and its handler takes a [`ListParams`] argument. Requests whose query
//! string breaks the constraints are rejected with a 400 before the handler
//! runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::Extension;
use pagesort_core::{register, CheckedSpec, ConfigError, ConstraintSpec, ListRequest, RawListParams};

use crate::error::AppError;

/// Check `spec` and wrap it in a layer that makes it visible to
/// [`ListParams`]. Advisories from the check are logged once, here.
pub fn list_constraints(spec: ConstraintSpec) -> Result<Extension<CheckedSpec>, ConfigError> {
    let checked = register(spec)?;
    for advisory in checked.advisories() {
        tracing::info!(%advisory, "List constraints advisory");
    }
    Ok(Extension(checked))
}

/// Normalized list parameters of the current request.
///
/// ```ignore
/// async fn list_items(ListParams(request): ListParams) -> AppResult<Json<()>> {
///     tracing::info!(offset = request.offset(), limit = request.limit(), "listing");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListParams(pub ListRequest);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path();
        let spec = parts.extensions.get::<CheckedSpec>().ok_or_else(|| {
            AppError::InternalError(format!("no list constraints registered for {path}"))
        })?;

        let query = parts.uri.query().unwrap_or_default();
        let raw = RawListParams::from_pairs(form_urlencoded::parse(query.as_bytes()));
        tracing::debug!(
            path,
            offset = ?raw.offset,
            limit = ?raw.limit,
            sort_by = ?raw.sort_by,
            sort_dir = ?raw.sort_dir,
            "Resolving list parameters",
        );

        match spec.normalize(&raw) {
            Ok(request) => {
                tracing::debug!(
                    offset = request.offset(),
                    limit = request.limit(),
                    sort_by = ?request.sort_by(),
                    sort_dir = %request.sort_dir(),
                    "Resolved list request",
                );
                Ok(ListParams(request))
            }
            Err(failure) => {
                tracing::warn!(
                    error = %failure,
                    field = ?failure.field(),
                    value = ?failure.value(),
                    "Rejected list parameters",
                );
                Err(failure.into())
            }
        }
    }
}
