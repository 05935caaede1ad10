//! To-do item wire shape

use serde::{Deserialize, Serialize};

use crate::db::Item;

/// External view of an item: `{"id", "itemName", "isComplete"}`.
///
/// The internal `secret` column has no field here, so it is neither
/// serialized nor accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    /// Ignored on input; the store assigns ids.
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
}

impl From<Item> for TodoItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            item_name: item.item_name,
            is_complete: item.is_complete,
        }
    }
}
