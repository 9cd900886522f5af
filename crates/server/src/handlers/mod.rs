//! # API Route Handlers
//!
//! This module organizes the Axum route handlers for the `puxa-server`. The
//! general handlers cover the root, health and fallback routes, and the
//! content handlers cover the placeholder analysis endpoints.

pub mod content;
pub mod general;

// Re-export all handlers so the router can reach them under `handlers::`.
pub use content::*;
pub use general::*;
