//! Command handlers - extracted from main.rs for testability

pub mod check;
pub mod config;
pub mod generate;

pub use check::{execute_check, CheckSummary};
pub use config::execute_config;
pub use generate::{execute_generate, render_document, write_document};
