//! Pure domain logic for the Pelagic fishing-conditions API.
//!
//! Everything in this crate is I/O-free: environmental condition
//! simulation, favorability scoring, prediction building and ranking,
//! advisory alert generation, and the geo/anonymization helpers the
//! HTTP layer composes with the persistence layer.

pub mod alert;
pub mod anonymize;
pub mod conditions;
pub mod error;
pub mod favorability;
pub mod geo;
pub mod prediction;
pub mod types;
