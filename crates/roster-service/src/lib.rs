//! # Roster Service
//!
//! Application layer of the user dashboard: the list pipeline that derives
//! the visible page, and the dashboard controller that drives the
//! repository and owns the view state.

pub mod dashboard;
pub mod list_processor;

pub use dashboard::*;
pub use list_processor::{process, total_pages};
