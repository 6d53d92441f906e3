pub mod document;
pub mod error;
pub mod inventory;
pub mod repository;

pub use document::{Document, InventoryItem};
pub use error::PantryError;
pub use inventory::{available_items, AvailableItems};
pub use repository::InventoryRepository;
