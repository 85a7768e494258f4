//! Normalization and validation of list-query parameters.
//!
//! An endpoint declares a [`ConstraintSpec`] (offset/limit bounds and sort
//! vocabulary), checks it once with [`register`], and then runs every
//! request's raw `offset`, `limit`, `sortBy` and `sortDir` values through
//! [`normalize`]. The result is either a bounded [`ListRequest`] or the first
//! [`ValidationFailure`] encountered.
//!
//! This crate performs no I/O and holds no shared mutable state.

pub mod checker;
pub mod error;
pub mod normalize;
pub mod params;
pub mod request;
pub mod spec;

pub use checker::{check_spec, register, Advisory, CheckedSpec};
pub use error::{ConfigError, FailureKind, ValidationFailure};
pub use normalize::normalize;
pub use params::RawListParams;
pub use request::{ListRequest, SortDirection};
pub use spec::ConstraintSpec;
