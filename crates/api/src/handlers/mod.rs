//! Request handlers.
//!
//! Handlers validate input, delegate to the repositories in
//! `brainlogger_db` and map errors via [`AppError`](crate::error::AppError).

pub mod log;
