//! CLI administration tool for shortlink.
//!
//! Manages short URLs, shows statistics, and performs database checks
//! directly against PostgreSQL without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- links create https://example.com
//!
//! # List the newest links
//! cargo run --bin admin -- links list --limit 20
//!
//! # Inspect or delete a link
//! cargo run --bin admin -- links show aB3_x9
//! cargo run --bin admin -- links delete aB3_x9 -y
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server. `DATABASE_URL` (or the `DB_*`
//! components) is required; `BASE_URL`, `SHORT_CODE_LENGTH` and
//! `SHORTEN_POLICY` affect `links create`.

use shortlink::application::services::UrlService;
use shortlink::config::{Config, mask_connection_string};
use shortlink::domain::entities::UrlRecord;
use shortlink::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type Service = UrlService<PgUrlRepository>;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinksAction {
    /// List links, newest first
    List {
        #[arg(short, long, default_value_t = 25)]
        limit: i64,

        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },

    /// Show a single link with its click count
    Show { code: String },

    /// Shorten a URL
    Create { url: String },

    /// Delete a link
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_USER/DB_PASSWORD/DB_NAME) must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Links { action } => {
            let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));
            let service = UrlService::new(repository, config.shortener_settings());
            handle_links_action(action, &service).await?
        }
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

async fn handle_links_action(action: LinksAction, service: &Service) -> Result<()> {
    match action {
        LinksAction::List { limit, offset } => list_links(service, limit, offset).await,
        LinksAction::Show { code } => show_link(service, &code).await,
        LinksAction::Create { url } => create_link(service, &url).await,
        LinksAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

/// Lists links in a table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Code         Clicks   Created            URL
///   ────────────────────────────────────────────────────────────
///   aB3_x9       12       2026-01-15 10:30   https://example.com
/// ```
async fn list_links(service: &Service, limit: i64, offset: i64) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let (records, total) = service.list(limit, offset).await?;

    if records.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<12} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<12} {:<8} {:<18} {}",
            record.short_code.cyan(),
            record.click_count.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            truncate(&record.original_url, 60)
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        records.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_link(service: &Service, code: &str) -> Result<()> {
    let stats = service.stats(code).await?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  Code:      {}", stats.short_code.cyan());
    println!("  Short URL: {}", service.short_url(&stats.short_code).bright_yellow());
    println!("  Target:    {}", stats.original_url);
    println!(
        "  Created:   {}",
        stats
            .created_at
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
            .bright_black()
    );
    println!(
        "  Clicks:    {}",
        stats.click_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn create_link(service: &Service, url: &str) -> Result<()> {
    let outcome = service.shorten(url).await?;
    let record: &UrlRecord = &outcome.record;

    if outcome.created {
        println!("{}", "✅ Short URL created".green().bold());
    } else {
        println!("{}", "ℹ️  URL already shortened".yellow());
    }
    println!();
    println!(
        "  {} → {}",
        service.short_url(&record.short_code).bright_yellow().bold(),
        record.original_url
    );
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &Service, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Link".bright_blue().bold());
    println!();

    let stats = service.stats(code).await?;

    println!("  Code:   {}", stats.short_code.cyan());
    println!("  Target: {}", stats.original_url);
    println!(
        "  Clicks: {}",
        stats.click_count.to_string().bright_black()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service.delete(code).await?;

    println!();
    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays link and click totals.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(click_count), 0)::BIGINT FROM urls")
            .fetch_one(pool)
            .await?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            if let Some(ref url) = config.database_url {
                println!("  Connection: {}", mask_connection_string(url).bright_black());
            }
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
