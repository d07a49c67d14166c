//! Request handlers.
//!
//! Handlers decode bodies with [`crate::extract::StrictJson`], reply through
//! [`crate::json`], and map failures via [`crate::error::AppError`].

pub mod broker;
