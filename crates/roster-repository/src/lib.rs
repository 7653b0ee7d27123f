//! # Roster Repository
//!
//! The dashboard's only I/O boundary: four remote operations over the users
//! REST resource, plus the record mapper that translates between the API's
//! user shape and the domain [`roster_core::User`].
//!
//! ```text
//! Dashboard
//!   ↓  Arc<dyn UserRepository>   (trait)
//! HttpUserRepository             (reqwest, JSON)
//!   ↓  ExternalUser  ⇄  mapper  ⇄  User
//! Remote API
//! ```

pub mod dto;
pub mod http;
pub mod mapper;
pub mod traits;

pub use dto::*;
pub use http::*;
pub use mapper::*;
pub use traits::*;
