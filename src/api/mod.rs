//! API module for the HTTP endpoints
//!
//! Thin glue over `Ingestor` and `Reporter`; handlers hold no state beyond
//! the shared store handle.

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, create_router_with_limit, serve};
pub use state::AppState;
