//! HTTP request handlers, one module per resource.

pub mod alerts;
pub mod auth;
pub mod catches;
pub mod conditions;
pub mod hotspots;
pub mod predictions;
pub mod stats;
