//! Response envelopes for list handlers.
//!
//! Paged listings respond with `{ "data": [...], "meta": {...} }`, where
//! `meta` echoes the window that was applied.

use pagesort_core::ListRequest;
use serde::Serialize;

/// `{ "data": [...], "meta": { ... } }` for one page of a listing.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// The offset, limit and sort a page was cut with, plus the unpaged total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub offset: i64,
    pub limit: i64,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub sort_dir: &'static str,
}

impl PageMeta {
    pub fn new(request: &ListRequest, total: usize) -> Self {
        Self {
            offset: request.offset(),
            limit: request.limit(),
            total,
            sort_by: request.sort_by().map(str::to_owned),
            sort_dir: request.sort_dir().as_str(),
        }
    }
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(data: Vec<T>, request: &ListRequest, total: usize) -> Self {
        Self {
            data,
            meta: PageMeta::new(request, total),
        }
    }
}
