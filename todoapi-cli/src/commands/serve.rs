//! HTTP server command
//!
//! Connects to the store, creates the schema and serves until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use todoapi_server::{run_server, PgConnectionFactory, ServerConfig};

use crate::config::TodoApiConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "TODOAPI_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database connection string (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Skip table creation (database already initialised with `init-schema`)
    #[arg(long)]
    pub skip_schema_init: bool,
}

impl ServeArgs {
    fn server_config(&self, config: &TodoApiConfig) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: self
                .bind
                .or(config.server.bind)
                .unwrap_or(defaults.bind_addr),
            cors_permissive: self.cors_permissive
                || config.server.cors_permissive.unwrap_or(defaults.cors_permissive),
            init_schema: !self.skip_schema_init,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config: &TodoApiConfig) -> Result<()> {
    let database_url = config.resolve_database_url(args.database_url.clone())?;
    let server_config = args.server_config(config);

    tracing::info!("Starting todoapi server on {}", server_config.bind_addr);

    let factory = PgConnectionFactory::open(&database_url, config.connection_options())
        .await
        .context("Failed to connect to database")?;

    // Run server (blocks until shutdown)
    run_server(Arc::new(factory), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
