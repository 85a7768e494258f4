//! Raw, unvalidated list parameters as they arrive in a query string.

/// Query parameter carrying the number of items to skip.
pub const OFFSET_PARAM: &str = "offset";

/// Query parameter carrying the page size.
pub const LIMIT_PARAM: &str = "limit";

/// Query parameter carrying the sort field.
pub const SORT_BY_PARAM: &str = "sortBy";

/// Query parameter carrying the sort direction.
pub const SORT_DIR_PARAM: &str = "sortDir";

/// The four raw list parameters of one request, each absent or a single value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl RawListParams {
    /// Collect list parameters from decoded `(name, value)` query pairs.
    ///
    /// Only the first value of a repeated name is kept. Names other than
    /// `offset`, `limit`, `sortBy` and `sortDir` are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                OFFSET_PARAM => &mut params.offset,
                LIMIT_PARAM => &mut params.limit,
                SORT_BY_PARAM => &mut params.sort_by,
                SORT_DIR_PARAM => &mut params.sort_dir,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }
}
