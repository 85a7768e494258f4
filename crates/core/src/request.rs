//! The validated list request handed to data-fetching code.

use std::fmt;

use crate::spec::DEFAULT_LIMIT;

/// Sort direction of a [`ListRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Lower-case query form: `"asc"` or `"desc"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// SQL keyword for an `ORDER BY` clause.
    pub const fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }

    /// Map a raw `sortDir` value to a direction.
    ///
    /// Only a case-insensitive `desc` yields [`SortDirection::Descending`];
    /// anything else, including absence, is ascending.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some(dir) if dir.eq_ignore_ascii_case("desc") => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// Whether `raw` is a recognised direction (`asc`/`desc`, any case).
    pub fn is_valid_param(raw: &str) -> bool {
        raw.eq_ignore_ascii_case("asc") || raw.eq_ignore_ascii_case("desc")
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized offset, limit and sort for one list request.
///
/// Only the normalizer builds these, so a value in hand has passed every
/// rule of its endpoint's spec. For a spec accepted by
/// [`check_spec`](crate::check_spec), `offset >= 0` and `limit >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    offset: i64,
    limit: i64,
    sort_by: Option<String>,
    sort_dir: SortDirection,
}

impl ListRequest {
    pub(crate) fn new(
        offset: i64,
        limit: i64,
        sort_by: Option<String>,
        sort_dir: SortDirection,
    ) -> Self {
        Self {
            offset,
            limit,
            sort_by,
            sort_dir,
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Effective sort field. May be an empty string when the client sent an
    /// explicitly empty `sortBy` and the endpoint has no default.
    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn sort_dir(&self) -> SortDirection {
        self.sort_dir
    }

    pub fn is_ascending(&self) -> bool {
        self.sort_dir == SortDirection::Ascending
    }
}

impl Default for ListRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_LIMIT, None, SortDirection::Ascending)
    }
}
