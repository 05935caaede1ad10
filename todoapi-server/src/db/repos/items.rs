//! To-do item repository
//!
//! Borrows one connection for the duration of a request. Reads and writes
//! are separate statements; nothing here spans a transaction.

use sqlx::{FromRow, PgConnection};

use crate::db::DbError;

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i32,
    pub item_name: Option<String>,
    pub is_complete: bool,
    /// Internal only, never mapped to a response
    pub secret: Option<String>,
}

/// Fields supplied by the caller on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub item_name: Option<String>,
    pub is_complete: bool,
}

/// Item repository
pub struct ItemRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ItemRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List every item, in whatever order the store returns them.
    pub async fn list(&mut self) -> Result<Vec<Item>, DbError> {
        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, item_name, is_complete, secret
            FROM todo_items
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(items)
    }

    /// Get a single item by id.
    pub async fn get(&mut self, id: i32) -> Result<Option<Item>, DbError> {
        let item: Option<Item> = sqlx::query_as(
            r#"
            SELECT id, item_name, is_complete, secret
            FROM todo_items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(item)
    }

    /// Insert an item, returning the stored row with its assigned id.
    ///
    /// A missing name violates the NOT NULL constraint and comes back as
    /// [`DbError::Query`].
    pub async fn create(&mut self, new: &NewItem) -> Result<Item, DbError> {
        let item: Item = sqlx::query_as(
            r#"
            INSERT INTO todo_items (item_name, is_complete)
            VALUES ($1, $2)
            RETURNING id, item_name, is_complete, secret
            "#,
        )
        .bind(new.item_name.as_deref())
        .bind(new.is_complete)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(item)
    }

    /// Overwrite name and completion flag. Returns rows affected.
    pub async fn update(&mut self, item: &Item) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE todo_items
            SET item_name = $1, is_complete = $2
            WHERE id = $3
            "#,
        )
        .bind(item.item_name.as_deref())
        .bind(item.is_complete)
        .bind(item.id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete an item by id. Returns rows affected.
    pub async fn delete(&mut self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}
