//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts where the insert is not built from a core type
//! - Response projections for joined or aggregated queries

pub mod catch_log;
pub mod environmental;
pub mod hotspot;
pub mod prediction;
pub mod user;
