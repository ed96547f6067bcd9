//! Boardwalk: a two-phase crawler for paginated job-listing sites
//!
//! This crate walks a sequence of listing pages, extracts a stub per result
//! entry, follows each stub to its detail page, and emits one merged record
//! per posting. The crawl stops when a listing page no longer advertises a
//! next page and every detail fetch has resolved.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod record;
pub mod stats;
pub mod url;

use thiserror::Error;

/// Main error type for Boardwalk operations
#[derive(Debug, Error)]
pub enum BoardwalkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Sink(#[from] output::SinkError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Failed to resolve URL: {0}")]
    Resolve(String),
}

/// Result type alias for Boardwalk operations
pub type Result<T> = std::result::Result<T, BoardwalkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use record::{DetailFields, JobRecord, ListingStub};
pub use stats::CrawlStats;
