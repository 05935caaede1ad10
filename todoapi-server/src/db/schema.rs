//! One-time schema creation
//!
//! The statement is not guarded with `IF NOT EXISTS`: it expects a freshly
//! provisioned database and fails if the table is already there.

use super::{ConnectionFactory, DbError};

pub const CREATE_TODO_ITEMS: &str = r#"
    CREATE TABLE todo_items (
        id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        item_name VARCHAR(255) NOT NULL,
        is_complete BOOLEAN NOT NULL,
        secret TEXT
    )
"#;

/// Create the `todo_items` table.
///
/// # Errors
///
/// Returns [`DbError::Connection`] if no connection can be acquired and
/// [`DbError::Query`] if the statement fails (e.g. the table exists).
pub async fn initialize(factory: &dyn ConnectionFactory) -> Result<(), DbError> {
    tracing::info!("Creating todo_items table...");

    let mut conn = factory.connect().await?;
    sqlx::query(CREATE_TODO_ITEMS).execute(&mut *conn).await?;

    tracing::info!("todo_items table created");
    Ok(())
}
