//! Database layer - connection provider, schema initializer and repositories
//!
//! # Design Principles
//!
//! - One connection per request, acquired through [`ConnectionFactory`]
//! - Connections are owned handles released on drop, on every exit path
//! - Every statement commits on its own; no multi-statement transactions

pub mod connection;
pub mod repos;
pub mod schema;

pub use connection::{ConnectionFactory, ConnectionOptions, DbConnection, PgConnectionFactory};
pub use repos::{Item, ItemRepo, NewItem};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Store unreachable or credentials rejected
    #[error("connection error")]
    Connection(#[source] sqlx::Error),

    /// Statement failed, including constraint violations
    #[error("database error")]
    Query(#[from] sqlx::Error),
}
