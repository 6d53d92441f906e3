use std::collections::HashMap;

use crate::document::InventoryItem;
use crate::error::PantryError;
use crate::repository::InventoryRepository;

/// Pantry stock keyed by item name.
pub type AvailableItems = HashMap<String, f64>;

/// Collect the pantry items whose stock meets `minimum_quantity`.
///
/// Every record fetched from the store is validated before any filtering
/// happens, so a malformed record fails the whole call even when that record
/// would not have met the threshold anyway. A threshold above every stock
/// level yields an empty map, not an error.
pub fn available_items<R: InventoryRepository>(
    repo: &R,
    minimum_quantity: f64,
) -> Result<AvailableItems, PantryError> {
    let records = repo.find()?;

    let items = records
        .iter()
        .map(InventoryItem::from_document)
        .collect::<Result<Vec<_>, _>>()?;

    let available: AvailableItems = items
        .into_iter()
        .filter(|item| item.quantity >= minimum_quantity)
        .map(|item| (item.name, item.quantity))
        .collect();

    tracing::debug!(
        count = available.len(),
        minimum_quantity,
        "filtered available pantry items"
    );

    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use serde_json::{json, Value};

    struct FakeInventory {
        records: Vec<Document>,
    }

    impl InventoryRepository for FakeInventory {
        fn find(&self) -> Result<Vec<Document>, PantryError> {
            Ok(self.records.clone())
        }
    }

    fn record(name: &str, quantity: Value, unit: &str) -> Document {
        match json!({ "name": name, "quantity": quantity, "unit": unit }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn orchard() -> FakeInventory {
        FakeInventory {
            records: vec![
                record("Apple", json!(10.0), "kg"),
                record("Banana", json!(5.0), "kg"),
            ],
        }
    }

    #[test]
    fn test_all_items_meet_threshold() {
        let available = available_items(&orchard(), 1.0).unwrap();

        assert_eq!(available.len(), 2);
        assert!(available.contains_key("Apple"));
        assert!(available.contains_key("Banana"));
    }

    #[test]
    fn test_threshold_above_all_stock_yields_empty() {
        let available = available_items(&orchard(), 11.0).unwrap();

        assert!(available.is_empty(), "no stock reaches 11kg");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let available = available_items(&orchard(), 5.0).unwrap();

        assert!(available.contains_key("Banana"), "5.0 >= 5.0 must qualify");
    }

    #[test]
    fn test_quantities_are_preserved() {
        let available = available_items(&orchard(), 1.0).unwrap();

        assert_eq!(available["Apple"], 10.0);
        assert_eq!(available["Banana"], 5.0);
    }

    #[test]
    fn test_invalid_record_fails_even_when_it_would_not_qualify() {
        let repo = FakeInventory {
            records: vec![
                record("Apple", json!(10.0), "kg"),
                // Below any reasonable threshold, but still malformed.
                record("Banana", json!("0"), "kg"),
            ],
        };

        let err = available_items(&repo, 100.0).unwrap_err();
        assert!(err.is_record_error(), "expected record error, got {err:?}");
    }

    #[test]
    fn test_store_error_propagates() {
        struct BrokenInventory;

        impl InventoryRepository for BrokenInventory {
            fn find(&self) -> Result<Vec<Document>, PantryError> {
                Err(PantryError::Store(anyhow::anyhow!("connection lost")))
            }
        }

        let err = available_items(&BrokenInventory, 1.0).unwrap_err();
        assert!(matches!(err, PantryError::Store(_)));
    }
}
