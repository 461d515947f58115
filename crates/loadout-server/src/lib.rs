//! HTTP API for the loadout advisor.
//!
//! A thin Axum layer over [`loadout_advisor::Advisor`]. The advisor is
//! immutable and every request carries its own questionnaire and shuffle
//! cursor in the query string, so handlers share one [`AppState`] without
//! locking.
//!
//! # Modules
//!
//! - [`error`] -- [`ApiError`] and its JSON response body
//! - [`handlers`] -- Endpoint handlers
//! - [`router`] -- Route table and middleware
//! - [`server`] -- Bind, serve, and shutdown
//! - [`state`] -- Shared application state
//!
//! [`ApiError`]: error::ApiError

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
