//! Request handlers for the `/api` surface.

pub mod auth;
pub mod posts;
