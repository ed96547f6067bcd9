use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// Checks that the seed URL is a fetchable HTTP(S) URL and that the
/// numeric settings leave the crawler able to make progress.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_seed_url(&config.crawler.seed_url)?;

    if config.crawler.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent must not be empty".to_string(),
        ));
    }

    if config.crawler.max_concurrent_details == 0 {
        return Err(ConfigError::Validation(
            "max-concurrent-details must be at least 1".to_string(),
        ));
    }

    if config.crawler.request_timeout == 0 {
        return Err(ConfigError::Validation(
            "request-timeout must be at least 1 second".to_string(),
        ));
    }

    if config.output.records_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "records-path must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_seed_url(seed: &str) -> Result<(), ConfigError> {
    let url =
        Url::parse(seed).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{}: only http and https seeds are supported",
            seed
        )));
    }

    Ok(())
}
