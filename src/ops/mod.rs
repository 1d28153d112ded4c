pub mod list_store;
pub mod view;

pub use list_store::{Intent, ListStore};
