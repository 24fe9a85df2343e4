//! CLI module
//!
//! Command-line interface around the service helpers.
//!
//! # Commands
//!
//! - `api` - Print the API description document
//! - `page-links` - Print one page of a layer as KML with page links
//! - `validate` - Validate the settings file
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, DocumentFormat};
pub use runner::Runner;
pub use server::{router, serve, ServerConfig};
