//! Wire representations exchanged over HTTP

pub mod item;

pub use item::TodoItemDto;
