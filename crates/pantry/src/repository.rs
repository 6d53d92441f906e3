use crate::document::Document;
use crate::error::PantryError;

/// Read side of the pantry store.
///
/// The selector is built against this trait rather than a concrete store so
/// tests can substitute an in-memory double and callers can back it with
/// whatever their application persists inventory in. The contract is
/// synchronous: each call either returns the full record set or fails.
pub trait InventoryRepository {
    /// Fetch every inventory record currently in the store.
    fn find(&self) -> Result<Vec<Document>, PantryError>;
}

impl<R: InventoryRepository + ?Sized> InventoryRepository for &R {
    fn find(&self) -> Result<Vec<Document>, PantryError> {
        (**self).find()
    }
}
