//! Web layer for the station range search.
//!
//! Provides HTTP endpoints for the range search and station autocomplete.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
