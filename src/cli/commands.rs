//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// OGC service helpers CLI
#[derive(Parser, Debug)]
#[command(name = "ogc-kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Service settings file (YAML)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Public base URL of the server
    #[arg(short, long, global = true, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the API description document
    Api {
        /// Document encoding
        #[arg(short, long, default_value = "json")]
        format: DocumentFormat,

        /// Custom API description template (YAML)
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Print one page of a layer as KML, with page links
    PageLinks {
        /// Layer as prefix:name
        #[arg(short, long)]
        layer: String,

        /// Offset of the first feature
        #[arg(long, default_value = "0")]
        start_index: u32,

        /// Page size
        #[arg(long)]
        max_features: Option<u32>,

        /// Disable previous/next links
        #[arg(long)]
        no_rel_links: bool,
    },

    /// Validate the settings file
    Validate,

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Encoding of the API description document
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}
