//! Cross-cutting HTTP plumbing shared by HRDesk services.

pub mod config;
pub mod middleware;
pub mod tracing;
