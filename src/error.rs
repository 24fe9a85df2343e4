//! Error types for ogc-kit
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for ogc-kit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Catalog / URL Errors
    // ============================================================================
    #[error("No namespace registered for URI '{uri}'")]
    NamespaceNotFound { uri: String },

    #[error("Layer '{prefix}:{name}' not found in catalog")]
    LayerNotFound { prefix: String, name: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Service Errors
    // ============================================================================
    #[error("Service error: {message}")]
    Service { message: String },

    #[error("Unsupported output format: {format}")]
    UnsupportedFormat { format: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("XML encoding error: {0}")]
    Xml(#[from] quick_xml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a namespace lookup error
    pub fn namespace_not_found(uri: impl Into<String>) -> Self {
        Self::NamespaceNotFound { uri: uri.into() }
    }

    /// Create a layer lookup error
    pub fn layer_not_found(prefix: impl Into<String>, name: impl Into<String>) -> Self {
        Self::LayerNotFound {
            prefix: prefix.into(),
            name: name.into(),
        }
    }

    /// Create a service error
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Whether the error comes from something the client asked for,
    /// rather than from the server's own state
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::LayerNotFound { .. } | Error::UnsupportedFormat { .. }
        )
    }
}

/// Result type alias for ogc-kit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
