//! todoapi CLI - runs the to-do item HTTP service
//!
//! Subcommands:
//! - `serve`: create the schema, then serve `/todoitems` until shutdown
//! - `init-schema`: create the schema and exit

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use config::TodoApiConfig;
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "todoapi",
    author,
    version,
    about = "CRUD HTTP service for to-do items backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.todoapi/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the todo_items table and exit
    InitSchema(commands::init_schema::InitSchemaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env never overrides variables that are already set
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    let config = TodoApiConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, &config).await?,
        Commands::InitSchema(args) => commands::init_schema::run_init_schema(args, &config).await?,
    }
    Ok(())
}
