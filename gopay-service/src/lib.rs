//! gopay-service: simulated GoPay wallet top-up endpoint.
//!
//! Partner banks post a top-up request; the service validates it, checks the
//! phone number against a fixed registry of GoPay accounts and answers with
//! `SUCCESS` plus a generated reference id, or `FAILED` with a reason. No
//! money moves and nothing is stored.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
