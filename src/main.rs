//! Boardwalk main entry point
//!
//! Command-line interface for the Boardwalk job-listing crawler.

use anyhow::Context;
use boardwalk::config::load_config_with_hash;
use boardwalk::crawler::crawl;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Boardwalk: a two-phase job-listing crawler
///
/// Boardwalk walks a paginated listing site, follows every result entry to
/// its detail page, and writes one merged record per posting as JSON Lines.
#[derive(Parser, Debug)]
#[command(name = "boardwalk")]
#[command(version)]
#[command(about = "Two-phase crawler for paginated job-listing sites", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    tracing::info!("Configuration loaded (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let stats = crawl(config).await.context("crawl failed")?;

    println!(
        "Crawl finished: {} records from {} listing pages ({} failed requests)",
        stats.records_emitted,
        stats.listing_pages,
        stats.failed_requests()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("boardwalk=info,warn"),
            1 => EnvFilter::new("boardwalk=debug,info"),
            2 => EnvFilter::new("boardwalk=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &boardwalk::config::Config) {
    println!("=== Boardwalk Dry Run ===\n");

    println!("Crawler:");
    println!("  Seed URL: {}", config.crawler.seed_url);
    println!("  User agent: {}", config.crawler.user_agent);
    println!("  Download delay: {}ms", config.crawler.download_delay);
    println!(
        "  Retries: {} (delay {}ms)",
        config.crawler.max_retries, config.crawler.retry_delay
    );
    println!(
        "  Max concurrent detail fetches: {}",
        config.crawler.max_concurrent_details
    );
    println!("  Request timeout: {}s", config.crawler.request_timeout);

    println!("\nOutput:");
    println!("  Records: {}", config.output.records_path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would start crawling at {}", config.crawler.seed_url);
}
