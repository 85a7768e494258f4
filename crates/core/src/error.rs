//! Error types produced by the core.
//!
//! [`ValidationFailure`] is the per-request error returned by the normalizer.
//! [`ConfigError`] is the registration-time error returned by the spec
//! checker; it never shows up on the request path.

use std::fmt;

/// Which rule a [`ValidationFailure`] violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// `offset` or `limit` is not a decimal integer.
    ParameterParse,
    /// `offset` or `limit` is outside the configured bounds.
    RangeViolation,
    /// A sort field was supplied but the resource allows no sorting.
    SortFieldDisallowed,
    /// A sort field was supplied that is not in the resource's vocabulary.
    SortFieldUnknown,
    /// `sortDir` is neither `asc` nor `desc`.
    SortDirectionInvalid,
}

impl FailureKind {
    /// Stable upper-case code, suitable for machine-readable error bodies.
    pub const fn code(self) -> &'static str {
        match self {
            FailureKind::ParameterParse => "PARAMETER_PARSE",
            FailureKind::RangeViolation => "RANGE_VIOLATION",
            FailureKind::SortFieldDisallowed => "SORT_FIELD_DISALLOWED",
            FailureKind::SortFieldUnknown => "SORT_FIELD_UNKNOWN",
            FailureKind::SortDirectionInvalid => "SORT_DIRECTION_INVALID",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The first rule violated while normalizing one request's list parameters.
///
/// `Display` renders exactly [`message`](Self::message); callers may match on
/// that text. `field` names the offending query parameter and `value` holds
/// the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    kind: FailureKind,
    message: String,
    field: Option<&'static str>,
    value: Option<String>,
}

impl ValidationFailure {
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self) -> Option<&'static str> {
        self.field
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn new(
        kind: FailureKind,
        message: String,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message,
            field: Some(field),
            value: Some(value.into()),
        }
    }

    pub(crate) fn unparsable(field: &'static str, raw: &str) -> Self {
        Self::new(
            FailureKind::ParameterParse,
            format!("Invalid {field} parameter: {raw}"),
            field,
            raw,
        )
    }

    pub(crate) fn offset_below_min(offset: i64, min_offset: i64) -> Self {
        Self::new(
            FailureKind::RangeViolation,
            format!("Offset cannot be less than {min_offset}"),
            crate::params::OFFSET_PARAM,
            offset.to_string(),
        )
    }

    pub(crate) fn limit_below_min(limit: i64, min_limit: i64) -> Self {
        Self::new(
            FailureKind::RangeViolation,
            format!("Limit cannot be less than {min_limit}"),
            crate::params::LIMIT_PARAM,
            limit.to_string(),
        )
    }

    pub(crate) fn limit_above_max(limit: i64, max_limit: i64) -> Self {
        Self::new(
            FailureKind::RangeViolation,
            format!("Limit cannot be greater than {max_limit}"),
            crate::params::LIMIT_PARAM,
            limit.to_string(),
        )
    }

    pub(crate) fn sorting_disallowed(sort_by: &str) -> Self {
        Self::new(
            FailureKind::SortFieldDisallowed,
            "Sorting is not allowed for this resource".to_string(),
            crate::params::SORT_BY_PARAM,
            sort_by,
        )
    }

    pub(crate) fn unknown_sort_field(sort_by: &str, valid_options: &str) -> Self {
        Self::new(
            FailureKind::SortFieldUnknown,
            format!("Invalid sort field: {sort_by}. Valid options are: {valid_options}"),
            crate::params::SORT_BY_PARAM,
            sort_by,
        )
    }

    pub(crate) fn invalid_sort_direction(sort_dir: &str) -> Self {
        Self::new(
            FailureKind::SortDirectionInvalid,
            format!("Invalid sort direction: {sort_dir}. Valid options are: asc, desc"),
            crate::params::SORT_DIR_PARAM,
            sort_dir,
        )
    }
}

/// A [`ConstraintSpec`](crate::ConstraintSpec) that must not be served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("min_offset must be >= 0, got {0}")]
    NegativeMinOffset(i64),

    #[error("min_limit must be >= 1, got {0}")]
    MinLimitBelowOne(i64),

    #[error("min_limit ({min}) must not exceed max_limit ({max})")]
    LimitRangeInverted { min: i64, max: i64 },

    #[error("default_offset ({default}) must be >= min_offset ({min})")]
    DefaultOffsetBelowMin { default: i64, min: i64 },

    #[error("default_limit ({default}) must be within [{min}, {max}]")]
    DefaultLimitOutOfRange { default: i64, min: i64, max: i64 },

    #[error("default_sort_by `{default}` must be one of the valid sort fields: {valid}")]
    UnknownDefaultSort { default: String, valid: String },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
