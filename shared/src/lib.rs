//! Shared domain and API types for the Datebook calendar service.

pub mod api;
pub mod models;
