//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod catch_repo;
pub mod environmental_repo;
pub mod hotspot_repo;
pub mod prediction_repo;
pub mod user_repo;

pub use catch_repo::CatchRepo;
pub use environmental_repo::EnvironmentalRepo;
pub use hotspot_repo::HotspotRepo;
pub use prediction_repo::PredictionRepo;
pub use user_repo::UserRepo;
