//! Domain entities of the user dashboard.

pub mod entities;

pub use entities::*;
