//! One-time consistency check of a [`ConstraintSpec`] at route registration.
//!
//! [`check_spec`] catches specs that would reject every request or that name
//! a default sort field outside their own vocabulary. [`register`] wraps a
//! spec that passed into a [`CheckedSpec`], the form the HTTP layer accepts.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{ConfigError, ValidationFailure};
use crate::params::RawListParams;
use crate::request::ListRequest;
use crate::spec::ConstraintSpec;

/// A non-fatal note about a spec that is otherwise valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// Sort fields are configured but requests without `sortBy` stay unsorted.
    MissingDefaultSort { valid: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::MissingDefaultSort { valid } => write!(
                f,
                "valid sort fields are configured ({valid}) but no default sort field is set"
            ),
        }
    }
}

/// Check a spec for misconfiguration.
///
/// Bounds are checked first, then the default sort field. The first fatal
/// problem is returned as a [`ConfigError`]; otherwise the advisories (possibly
/// none) are returned.
pub fn check_spec(spec: &ConstraintSpec) -> Result<Vec<Advisory>, ConfigError> {
    check_bounds(spec)?;

    let mut advisories = Vec::new();
    match spec.default_sort_by() {
        Some(default) if spec.allows_sorting() && !spec.is_sort_field(default) => {
            return Err(ConfigError::UnknownDefaultSort {
                default: default.to_owned(),
                valid: spec.sort_fields_csv(),
            });
        }
        None if spec.allows_sorting() => advisories.push(Advisory::MissingDefaultSort {
            valid: spec.sort_fields_csv(),
        }),
        _ => {}
    }
    Ok(advisories)
}

fn check_bounds(spec: &ConstraintSpec) -> Result<(), ConfigError> {
    if spec.min_offset() < 0 {
        return Err(ConfigError::NegativeMinOffset(spec.min_offset()));
    }
    if spec.min_limit() < 1 {
        return Err(ConfigError::MinLimitBelowOne(spec.min_limit()));
    }
    if spec.min_limit() > spec.max_limit() {
        return Err(ConfigError::LimitRangeInverted {
            min: spec.min_limit(),
            max: spec.max_limit(),
        });
    }
    if spec.default_offset() < spec.min_offset() {
        return Err(ConfigError::DefaultOffsetBelowMin {
            default: spec.default_offset(),
            min: spec.min_offset(),
        });
    }
    if !(spec.min_limit()..=spec.max_limit()).contains(&spec.default_limit()) {
        return Err(ConfigError::DefaultLimitOutOfRange {
            default: spec.default_limit(),
            min: spec.min_limit(),
            max: spec.max_limit(),
        });
    }
    Ok(())
}

/// Check `spec` and seal it for sharing across requests.
pub fn register(spec: ConstraintSpec) -> Result<CheckedSpec, ConfigError> {
    let advisories = check_spec(&spec)?;
    Ok(CheckedSpec {
        spec: Arc::new(spec),
        advisories: advisories.into(),
    })
}

/// A [`ConstraintSpec`] that passed [`check_spec`].
///
/// Cheap to clone; every clone shares the same spec.
#[derive(Debug, Clone)]
pub struct CheckedSpec {
    spec: Arc<ConstraintSpec>,
    advisories: Arc<[Advisory]>,
}

impl CheckedSpec {
    pub fn spec(&self) -> &ConstraintSpec {
        &self.spec
    }

    /// Advisories raised when the spec was registered.
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub fn normalize(&self, raw: &RawListParams) -> Result<ListRequest, ValidationFailure> {
        self.spec.normalize(raw)
    }
}

impl Deref for CheckedSpec {
    type Target = ConstraintSpec;

    fn deref(&self) -> &ConstraintSpec {
        &self.spec
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
