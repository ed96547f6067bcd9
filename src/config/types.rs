use serde::Deserialize;

/// Main configuration structure for Boardwalk
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
///
/// Everything except the seed URL is executor policy: the coordinator never
/// reads these settings, it only hands them to the fetch executor at
/// construction.
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// First listing page to fetch
    #[serde(rename = "seed-url")]
    pub seed_url: String,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Politeness delay before each request (milliseconds)
    #[serde(rename = "download-delay", default = "default_download_delay")]
    pub download_delay: u64,

    /// Delay between retry attempts (milliseconds)
    #[serde(rename = "retry-delay", default = "default_retry_delay")]
    pub retry_delay: u64,

    /// Retry attempts for transient failures, beyond the first try
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Maximum number of detail fetches in flight at once
    #[serde(rename = "max-concurrent-details", default = "default_max_concurrent_details")]
    pub max_concurrent_details: u32,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON Lines records file
    #[serde(rename = "records-path")]
    pub records_path: String,
}

fn default_user_agent() -> String {
    // Listing sites tend to serve crawlers differently; identify as a
    // desktop browser the way the upstream feeds expect.
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/70.0.3538.77 Safari/537.36"
        .to_string()
}

fn default_download_delay() -> u64 {
    1000
}

fn default_retry_delay() -> u64 {
    5000
}

fn default_max_retries() -> u32 {
    3
}

fn default_max_concurrent_details() -> u32 {
    5
}

fn default_request_timeout() -> u64 {
    30
}
