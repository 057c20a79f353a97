//! HTTP API handlers for amuse-server

pub mod query;

pub use query::{get_query, QueryError};
