//! Schema creation command

use anyhow::{Context, Result};
use clap::Parser;

use todoapi_server::db::schema;
use todoapi_server::PgConnectionFactory;

use crate::config::TodoApiConfig;

/// Arguments for the init-schema command
#[derive(Parser, Debug)]
pub struct InitSchemaArgs {
    /// Database connection string (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the todo_items table once
pub async fn run_init_schema(args: InitSchemaArgs, config: &TodoApiConfig) -> Result<()> {
    let database_url = config.resolve_database_url(args.database_url)?;

    let factory = PgConnectionFactory::open(&database_url, config.connection_options())
        .await
        .context("Failed to connect to database")?;

    schema::initialize(&factory)
        .await
        .context("Failed to create todo_items table")?;

    Ok(())
}
