//! products-server entry point
//!
//! Usage:
//!   products-server --bind 127.0.0.1:8080
//!   RUST_LOG=products_server=debug products-server
//!
//! Environment variables:
//!   DATABASE_URL   PostgreSQL connection string (or --database-url / .env)
//!   RUST_LOG       Log filter (default: info)

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use products_server::db::{create_pool, migrations};
use products_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "products-server",
    author,
    version,
    about = "HTTP API for the products catalog"
)]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
        cors_permissive: cli.cors_permissive,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
