//! Terminal frontend for BrainLogger.
//!
//! A capture form (content + type picker) above the list of open tasks,
//! talking to the API server over HTTP.

pub mod api;
pub mod app;
pub mod capture;
pub mod config;
pub mod task_list;
pub mod type_picker;
pub mod types;
