//! Repository structs wrapping the SQL for each table.

pub mod log_entry_repo;

pub use log_entry_repo::LogEntryRepo;
