//! Per-endpoint constraints on list parameters.

use indexmap::IndexSet;
use serde::Deserialize;

use crate::error::ValidationFailure;
use crate::params::RawListParams;
use crate::request::ListRequest;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default lowest accepted offset.
pub const DEFAULT_MIN_OFFSET: i64 = 0;

/// Default offset when the request carries none.
pub const DEFAULT_OFFSET: i64 = 0;

/// Default lowest accepted limit.
pub const DEFAULT_MIN_LIMIT: i64 = 1;

/// Default highest accepted limit.
pub const DEFAULT_MAX_LIMIT: i64 = 100;

/// Default limit when the request carries none.
pub const DEFAULT_LIMIT: i64 = 25;

// ---------------------------------------------------------------------------
// ConstraintSpec
// ---------------------------------------------------------------------------

/// Bounds and sort vocabulary for one endpoint's list parameters.
///
/// Specs are built once at route registration and shared read-only by every
/// request to that endpoint. They deserialize from camelCase JSON with every
/// field optional:
///
/// ```
/// use pagesort_core::ConstraintSpec;
///
/// let spec: ConstraintSpec =
///     serde_json::from_str(r#"{ "maxLimit": 12, "validSortFields": ["name", "days"] }"#)
///         .unwrap();
/// assert_eq!(spec.max_limit(), 12);
/// assert_eq!(spec.default_limit(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConstraintSpec {
    min_offset: i64,
    default_offset: i64,
    min_limit: i64,
    max_limit: i64,
    default_limit: i64,
    valid_sort_fields: IndexSet<String>,
    default_sort_by: Option<String>,
}

impl Default for ConstraintSpec {
    fn default() -> Self {
        Self {
            min_offset: DEFAULT_MIN_OFFSET,
            default_offset: DEFAULT_OFFSET,
            min_limit: DEFAULT_MIN_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
            default_limit: DEFAULT_LIMIT,
            valid_sort_fields: IndexSet::new(),
            default_sort_by: None,
        }
    }
}

impl ConstraintSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_offset(mut self, min_offset: i64) -> Self {
        self.min_offset = min_offset;
        self
    }

    pub fn with_default_offset(mut self, default_offset: i64) -> Self {
        self.default_offset = default_offset;
        self
    }

    pub fn with_min_limit(mut self, min_limit: i64) -> Self {
        self.min_limit = min_limit;
        self
    }

    pub fn with_max_limit(mut self, max_limit: i64) -> Self {
        self.max_limit = max_limit;
        self
    }

    pub fn with_default_limit(mut self, default_limit: i64) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Replace the sort vocabulary. Declaration order is kept and is the
    /// order listed in "Invalid sort field" messages; duplicates collapse.
    pub fn with_sort_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_sort_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_sort_by(mut self, field: impl Into<String>) -> Self {
        self.default_sort_by = Some(field.into());
        self
    }

    pub fn min_offset(&self) -> i64 {
        self.min_offset
    }

    pub fn default_offset(&self) -> i64 {
        self.default_offset
    }

    pub fn min_limit(&self) -> i64 {
        self.min_limit
    }

    pub fn max_limit(&self) -> i64 {
        self.max_limit
    }

    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    pub fn valid_sort_fields(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.valid_sort_fields.iter().map(String::as_str)
    }

    /// The configured default sort field, treating a blank value as unset.
    pub fn default_sort_by(&self) -> Option<&str> {
        self.default_sort_by
            .as_deref()
            .filter(|field| !field.trim().is_empty())
    }

    /// Whether any sort field is accepted at all.
    pub fn allows_sorting(&self) -> bool {
        !self.valid_sort_fields.is_empty()
    }

    /// Exact, case-sensitive membership in the sort vocabulary.
    pub fn is_sort_field(&self, field: &str) -> bool {
        self.valid_sort_fields.contains(field)
    }

    /// Comma-joined sort vocabulary, in declaration order.
    pub fn sort_fields_csv(&self) -> String {
        self.valid_sort_fields().collect::<Vec<_>>().join(", ")
    }

    /// Normalize one request's raw parameters against this spec.
    pub fn normalize(&self, raw: &RawListParams) -> Result<ListRequest, ValidationFailure> {
        crate::normalize::normalize(raw, self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
