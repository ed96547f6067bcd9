//! Configuration loading and validation
//!
//! Boardwalk is configured through a TOML file: the seed listing URL, the
//! user agent and politeness settings handed to the fetch executor, and the
//! output path. The crawl core itself never reads process-wide settings.

mod parser;
mod types;
mod validation;

pub use parser::{load_config, load_config_with_hash};
pub use types::{Config, CrawlerConfig, OutputConfig};
pub use validation::validate;
