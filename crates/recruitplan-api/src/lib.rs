//! recruitplan-api library root.
//!
//! Exposes the router and configuration so that integration tests can
//! exercise them directly without going through the Lambda runtime.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
