//! HTTP glue for `pagesort-core`.
//!
//! Exposes the building blocks (config, error mapping, the list-parameter
//! extractor, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
