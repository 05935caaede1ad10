//! todoapi-server: HTTP CRUD service over to-do items
//!
//! Exposes five JSON endpoints under `/todoitems`, each backed by a single
//! PostgreSQL connection acquired for the lifetime of the request.

pub mod db;
pub mod http;
pub mod models;

pub use db::{ConnectionFactory, ConnectionOptions, DbError, PgConnectionFactory};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::TodoItemDto;
