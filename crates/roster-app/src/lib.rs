//! # Roster App
//!
//! Wiring for the dashboard binary: builds the HTTP repository and the
//! dashboard from configuration.

pub mod startup;
