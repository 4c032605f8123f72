//! Policy-Sift main entry point
//!
//! Command-line interface for the single-domain article crawler.

use anyhow::Context;
use clap::Parser;
use policy_sift::config::load_config_with_hash;
use policy_sift::crawler::crawl;
use policy_sift::output::write_csv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Policy-Sift: a single-domain article crawler
///
/// Walks one content site, extracts structured fields from every article
/// page, and keeps the articles whose body text matches the configured
/// keyword list. Results are written as semicolon-delimited CSV.
#[derive(Parser, Debug)]
#[command(name = "policy-sift")]
#[command(version)]
#[command(about = "Crawl a content site for keyword-relevant articles", long_about = None)]
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

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(&config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("policy_sift=info,warn"),
            1 => EnvFilter::new("policy_sift=debug,info"),
            2 => EnvFilter::new("policy_sift=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &policy_sift::config::Config) {
    println!("=== Policy-Sift Dry Run ===\n");

    println!("Site:");
    println!("  Root: {}", config.site.root);
    println!("  Keywords ({}):", config.site.keywords.len());
    for keyword in &config.site.keywords {
        println!("    - {}", keyword);
    }

    println!("\nFetch:");
    println!("  Request timeout: {}s", config.fetch.request_timeout_secs);
    println!("  Request delay: {}ms", config.fetch.request_delay_ms);
    println!("  User agent: {}", config.fetch.user_agent);

    println!("\nLimits:");
    match config.limits.max_pages {
        Some(n) => println!("  Max pages: {}", n),
        None => println!("  Max pages: unbounded"),
    }
    match config.limits.max_depth {
        Some(n) => println!("  Max depth: {}", n),
        None => println!("  Max depth: unbounded"),
    }
    if config.limits.deny_paths.is_empty() {
        println!("  Deny paths: none");
    } else {
        println!("  Deny paths: {}", config.limits.deny_paths.join(", "));
    }

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would crawl {} from its root", config.site.root);
}

/// Handles the main crawl operation
async fn handle_crawl(config: &policy_sift::config::Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl of {} with {} keywords",
        config.site.root,
        config.site.keywords.len()
    );

    let records = crawl(config).await?;

    if records.is_empty() {
        println!("No articles matched the configured keywords; no CSV written.");
        return Ok(());
    }

    println!("\n--- Articles found with keywords ---");
    for record in &records {
        println!("Title : {}", record.title);
        println!("URL   : {}", record.url);
        println!("Author: {}", record.author);
        println!("Date  : {}", record.publication_date);
        println!("Keywords found: {}", record.matched_keywords.join(", "));
        println!("{}", "-".repeat(30));
    }

    let path = PathBuf::from(&config.output.csv_path);
    write_csv(&records, &path)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;

    println!("\n{} article(s) saved to {}", records.len(), path.display());
    Ok(())
}
