//! Terminal output handlers

pub mod cli_handler;

pub use cli_handler::CliOutput;
