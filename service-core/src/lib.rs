//! service-core: Shared infrastructure for the trail-explorer services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
