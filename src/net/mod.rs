//! Networking modules for the login endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the `POST /login` call and `token` reads the payload of
//! the token it returns.

pub mod api;
pub mod token;
