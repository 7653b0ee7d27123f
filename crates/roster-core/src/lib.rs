//! # Roster Core
//!
//! Core types, validation rules, and error definitions for the Roster
//! user dashboard. Everything here is pure; network access lives in
//! `roster-repository` and orchestration in `roster-service`.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod query;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use query::*;
pub use result::*;
pub use telemetry::*;
pub use traits::*;
pub use validation::*;
