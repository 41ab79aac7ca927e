//! Web layer for the station router.
//!
//! Exposes station management, lookup and route search as a JSON API.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, SharedIndex};
