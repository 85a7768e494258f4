//! The list-parameter normalization pipeline.
//!
//! Steps run in a fixed order and the first failure is returned:
//!
//! 1. parse `offset` (or take the default)
//! 2. parse `limit` (or take the default)
//! 3. resolve the effective sort field
//! 4. offset lower bound
//! 5. limit lower then upper bound
//! 6. sort field against the vocabulary
//! 7. sort direction
//!
//! Parse failures therefore always win over range and sort failures.

use crate::error::ValidationFailure;
use crate::params::{RawListParams, LIMIT_PARAM, OFFSET_PARAM};
use crate::request::{ListRequest, SortDirection};
use crate::spec::ConstraintSpec;

/// Turn raw list parameters into a [`ListRequest`], or report the first
/// rule they break.
///
/// # Examples
///
/// ```
/// use pagesort_core::{normalize, ConstraintSpec, RawListParams, SortDirection};
///
/// let spec = ConstraintSpec::new()
///     .with_default_limit(12)
///     .with_max_limit(12)
///     .with_sort_fields(["name", "days"]);
///
/// let request = normalize(&RawListParams::default(), &spec).unwrap();
/// assert_eq!((request.offset(), request.limit()), (0, 12));
/// assert_eq!(request.sort_dir(), SortDirection::Ascending);
///
/// let raw = RawListParams::from_pairs([("limit", "1000")]);
/// let failure = normalize(&raw, &spec).unwrap_err();
/// assert_eq!(failure.message(), "Limit cannot be greater than 12");
/// ```
pub fn normalize(
    raw: &RawListParams,
    spec: &ConstraintSpec,
) -> Result<ListRequest, ValidationFailure> {
    let offset = parse_or_default(OFFSET_PARAM, raw.offset.as_deref(), spec.default_offset())?;
    let limit = parse_or_default(LIMIT_PARAM, raw.limit.as_deref(), spec.default_limit())?;
    let sort_by = resolve_sort_by(raw.sort_by.as_deref(), spec);

    validate_offset(offset, spec)?;
    validate_limit(limit, spec)?;
    validate_sort_by(sort_by.as_deref(), spec)?;
    validate_sort_dir(raw.sort_dir.as_deref())?;

    let sort_dir = SortDirection::from_param(raw.sort_dir.as_deref());
    Ok(ListRequest::new(offset, limit, sort_by, sort_dir))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Decimal integer with at most a leading minus sign.
fn parse_integer(raw: &str) -> Option<i64> {
    if raw.starts_with('+') {
        return None;
    }
    raw.parse().ok()
}

fn parse_or_default(
    field: &'static str,
    raw: Option<&str>,
    default: i64,
) -> Result<i64, ValidationFailure> {
    match raw {
        Some(value) if !is_blank(value) => {
            parse_integer(value).ok_or_else(|| ValidationFailure::unparsable(field, value))
        }
        _ => Ok(default),
    }
}

/// An explicit non-blank `sortBy` always wins; otherwise the spec default
/// applies, and without one the raw value is kept as sent.
fn resolve_sort_by(raw: Option<&str>, spec: &ConstraintSpec) -> Option<String> {
    match raw {
        Some(field) if !is_blank(field) => Some(field.to_owned()),
        _ => spec
            .default_sort_by()
            .or(raw)
            .map(str::to_owned),
    }
}

fn validate_offset(offset: i64, spec: &ConstraintSpec) -> Result<(), ValidationFailure> {
    if offset < spec.min_offset() {
        return Err(ValidationFailure::offset_below_min(offset, spec.min_offset()));
    }
    Ok(())
}

fn validate_limit(limit: i64, spec: &ConstraintSpec) -> Result<(), ValidationFailure> {
    if limit < spec.min_limit() {
        return Err(ValidationFailure::limit_below_min(limit, spec.min_limit()));
    }
    if limit > spec.max_limit() {
        return Err(ValidationFailure::limit_above_max(limit, spec.max_limit()));
    }
    Ok(())
}

fn validate_sort_by(sort_by: Option<&str>, spec: &ConstraintSpec) -> Result<(), ValidationFailure> {
    let Some(field) = sort_by.filter(|field| !is_blank(field)) else {
        return Ok(());
    };
    if !spec.allows_sorting() {
        return Err(ValidationFailure::sorting_disallowed(field));
    }
    if !spec.is_sort_field(field) {
        return Err(ValidationFailure::unknown_sort_field(
            field,
            &spec.sort_fields_csv(),
        ));
    }
    Ok(())
}

fn validate_sort_dir(sort_dir: Option<&str>) -> Result<(), ValidationFailure> {
    match sort_dir {
        Some(dir) if !is_blank(dir) && !SortDirection::is_valid_param(dir) => {
            Err(ValidationFailure::invalid_sort_direction(dir))
        }
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::FailureKind;

    fn months_spec() -> ConstraintSpec {
        ConstraintSpec::new()
            .with_default_limit(12)
            .with_max_limit(12)
            .with_sort_fields(["name", "days"])
    }

    fn default_sort_spec() -> ConstraintSpec {
        months_spec().with_default_sort_by("name")
    }

    fn no_sort_spec() -> ConstraintSpec {
        ConstraintSpec::new().with_default_limit(12).with_max_limit(12)
    }

    fn raw(pairs: &[(&str, &str)]) -> RawListParams {
        RawListParams::from_pairs(pairs.iter().copied())
    }

    fn failure(pairs: &[(&str, &str)], spec: &ConstraintSpec) -> ValidationFailure {
        normalize(&raw(pairs), spec).unwrap_err()
    }

    // -- defaults ------------------------------------------------------------

    #[test]
    fn empty_input_uses_defaults() {
        let request = normalize(&RawListParams::default(), &months_spec()).unwrap();
        assert_eq!(request.offset(), 0);
        assert_eq!(request.limit(), 12);
        assert_eq!(request.sort_by(), None);
        assert_eq!(request.sort_dir(), SortDirection::Ascending);
    }

    #[test]
    fn blank_offset_and_limit_use_defaults() {
        let spec = months_spec().with_default_offset(3);
        let request = normalize(&raw(&[("offset", ""), ("limit", "   ")]), &spec).unwrap();
        assert_eq!(request.offset(), 3);
        assert_eq!(request.limit(), 12);
    }

    #[test]
    fn valid_values_pass_through_unchanged() {
        let spec = ConstraintSpec::new();
        for (offset, limit) in [(0, 1), (2, 5), (1_000_000, 100)] {
            let (offset_raw, limit_raw) = (offset.to_string(), limit.to_string());
            let request = normalize(
                &raw(&[("offset", offset_raw.as_str()), ("limit", limit_raw.as_str())]),
                &spec,
            )
            .unwrap();
            assert_eq!((request.offset(), request.limit()), (offset, limit));
        }
    }

    // -- parsing -------------------------------------------------------------

    #[test]
    fn non_numeric_offset_fails_with_field_and_value() {
        let err = failure(&[("offset", "abc")], &months_spec());
        assert_eq!(err.message(), "Invalid offset parameter: abc");
        assert_eq!(err.kind(), FailureKind::ParameterParse);
        assert_eq!(err.field(), Some("offset"));
        assert_eq!(err.value(), Some("abc"));
    }

    #[test]
    fn non_numeric_limit_fails() {
        let err = failure(&[("limit", "abc")], &months_spec());
        assert_eq!(err.message(), "Invalid limit parameter: abc");
        assert_eq!(err.field(), Some("limit"));
    }

    #[test]
    fn rejects_plus_sign_grouping_and_decimals() {
        for bad in ["+5", "1,000", "1.5", " 5", "--1", "99999999999999999999"] {
            let err = failure(&[("offset", bad)], &months_spec());
            assert_eq!(err.kind(), FailureKind::ParameterParse, "input {bad:?}");
        }
    }

    #[test]
    fn parse_failure_precedes_range_and_sort_checks() {
        let err = failure(
            &[("limit", "x"), ("offset", "-1"), ("sortBy", "bogus"), ("sortDir", "up")],
            &months_spec(),
        );
        assert_eq!(err.message(), "Invalid limit parameter: x");

        let err = failure(&[("offset", "x"), ("limit", "y")], &months_spec());
        assert_eq!(err.message(), "Invalid offset parameter: x");
    }

    // -- ranges --------------------------------------------------------------

    #[test]
    fn negative_offset_fails() {
        let err = failure(&[("offset", "-1")], &months_spec());
        assert_eq!(err.message(), "Offset cannot be less than 0");
        assert_eq!(err.kind(), FailureKind::RangeViolation);
    }

    #[test]
    fn zero_limit_fails() {
        let err = failure(&[("limit", "0")], &months_spec());
        assert_eq!(err.message(), "Limit cannot be less than 1");
    }

    #[test]
    fn limit_above_max_fails() {
        let err = failure(&[("limit", "1000")], &months_spec());
        assert_eq!(err.message(), "Limit cannot be greater than 12");
        assert_eq!(err.value(), Some("1000"));
    }

    #[test]
    fn range_failure_precedes_sort_failure() {
        let err = failure(&[("offset", "-1"), ("sortBy", "bogus")], &months_spec());
        assert_eq!(err.message(), "Offset cannot be less than 0");
    }

    // -- sort field ----------------------------------------------------------

    #[test]
    fn unknown_sort_field_lists_options_in_declaration_order() {
        let err = failure(&[("sortBy", "invalid")], &months_spec());
        assert_eq!(
            err.message(),
            "Invalid sort field: invalid. Valid options are: name, days"
        );
        assert_eq!(err.kind(), FailureKind::SortFieldUnknown);
    }

    #[test]
    fn sorting_disallowed_without_vocabulary() {
        let err = failure(&[("sortBy", "name")], &no_sort_spec());
        assert_eq!(err.message(), "Sorting is not allowed for this resource");
        assert_matches!(err.kind(), FailureKind::SortFieldDisallowed);
    }

    #[test]
    fn sorting_disallowed_regardless_of_direction() {
        for dir in ["asc", "desc", "bogus", ""] {
            let err = failure(&[("sortBy", "name"), ("sortDir", dir)], &no_sort_spec());
            assert_matches!(err.kind(), FailureKind::SortFieldDisallowed);
        }
    }

    #[test]
    fn no_sort_spec_still_accepts_pagination() {
        let request = normalize(&raw(&[("offset", "1"), ("limit", "5")]), &no_sort_spec()).unwrap();
        assert_eq!((request.offset(), request.limit()), (1, 5));
        assert_eq!(request.sort_by(), None);
    }

    #[test]
    fn valid_sort_field_without_direction_is_ascending() {
        let request = normalize(&raw(&[("sortBy", "name")]), &months_spec()).unwrap();
        assert_eq!(request.sort_by(), Some("name"));
        assert!(request.is_ascending());
    }

    #[test]
    fn empty_sort_by_is_kept_and_not_validated() {
        let request =
            normalize(&raw(&[("sortBy", ""), ("sortDir", "desc")]), &no_sort_spec()).unwrap();
        assert_eq!(request.sort_by(), Some(""));
        assert_eq!(request.sort_dir(), SortDirection::Descending);
    }

    // -- default sort --------------------------------------------------------

    #[test]
    fn default_sort_applies_when_absent() {
        let request = normalize(&RawListParams::default(), &default_sort_spec()).unwrap();
        assert_eq!(request.sort_by(), Some("name"));
        assert_eq!(request.sort_dir(), SortDirection::Ascending);
    }

    #[test]
    fn blank_sort_by_does_not_override_default() {
        for blank in ["", "  "] {
            let request = normalize(&raw(&[("sortBy", blank)]), &default_sort_spec()).unwrap();
            assert_eq!(request.sort_by(), Some("name"));
        }
    }

    #[test]
    fn explicit_sort_by_overrides_default() {
        let request = normalize(&raw(&[("sortBy", "days")]), &default_sort_spec()).unwrap();
        assert_eq!(request.sort_by(), Some("days"));

        let err = failure(&[("sortBy", "bogus")], &default_sort_spec());
        assert_eq!(err.kind(), FailureKind::SortFieldUnknown);
    }

    #[test]
    fn default_sort_works_with_custom_direction() {
        let request = normalize(&raw(&[("sortDir", "desc")]), &default_sort_spec()).unwrap();
        assert_eq!(request.sort_by(), Some("name"));
        assert_eq!(request.sort_dir(), SortDirection::Descending);
    }

    #[test]
    fn unchecked_invalid_default_sort_fails_on_request() {
        let spec = months_spec().with_default_sort_by("invalid");
        let err = normalize(&RawListParams::default(), &spec).unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid sort field: invalid. Valid options are: name, days"
        );
    }

    // -- sort direction ------------------------------------------------------

    #[test]
    fn invalid_sort_direction_fails() {
        let err = failure(&[("sortBy", "name"), ("sortDir", "invalid")], &months_spec());
        assert_eq!(
            err.message(),
            "Invalid sort direction: invalid. Valid options are: asc, desc"
        );
        assert_eq!(err.field(), Some("sortDir"));
    }

    #[test]
    fn sort_direction_is_case_insensitive_and_normalized() {
        let request = normalize(&raw(&[("sortBy", "name"), ("sortDir", "DESC")]), &months_spec())
            .unwrap();
        assert_eq!(request.sort_dir().as_str(), "desc");

        let request = normalize(&raw(&[("sortDir", "Asc")]), &months_spec()).unwrap();
        assert_eq!(request.sort_dir().as_str(), "asc");
    }

    #[test]
    fn blank_sort_direction_is_ascending() {
        let request = normalize(&raw(&[("sortDir", " ")]), &months_spec()).unwrap();
        assert!(request.is_ascending());
    }

    // -- misc ----------------------------------------------------------------

    #[test]
    fn parameter_order_does_not_matter() {
        let a = normalize(
            &raw(&[("sortDir", "desc"), ("limit", "5"), ("sortBy", "days"), ("offset", "1")]),
            &months_spec(),
        )
        .unwrap();
        let b = normalize(
            &raw(&[("offset", "1"), ("sortBy", "days"), ("limit", "5"), ("sortDir", "desc")]),
            &months_spec(),
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.offset(), 1);
        assert_eq!(a.limit(), 5);
        assert_eq!(a.sort_by(), Some("days"));
        assert_eq!(a.sort_dir(), SortDirection::Descending);
    }

    #[test]
    fn method_form_matches_free_function() {
        let spec = months_spec();
        let input = raw(&[("offset", "2")]);
        assert_eq!(spec.normalize(&input), normalize(&input, &spec));
    }
}
