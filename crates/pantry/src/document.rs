use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PantryError;

/// Raw record shape returned by an inventory store. Document stores hand
/// back untyped maps, so field presence and types are checked here rather
/// than assumed.
pub type Document = Map<String, Value>;

/// A validated pantry item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl InventoryItem {
    /// Extract a typed item from a raw store record.
    ///
    /// Validation is strict: a missing field yields
    /// [`PantryError::MissingField`] and a present-but-mistyped field yields
    /// [`PantryError::FieldType`]. A record never degrades into a partial
    /// item.
    pub fn from_document(doc: &Document) -> Result<Self, PantryError> {
        let name = require_string(doc, "name")?;
        let quantity = require_number(doc, "quantity")?;
        let unit = require_string(doc, "unit")?;

        Ok(InventoryItem {
            name: name.to_owned(),
            quantity,
            unit: unit.to_owned(),
        })
    }
}

impl TryFrom<&Document> for InventoryItem {
    type Error = PantryError;

    fn try_from(doc: &Document) -> Result<Self, Self::Error> {
        InventoryItem::from_document(doc)
    }
}

fn require_field<'a>(doc: &'a Document, field: &'static str) -> Result<&'a Value, PantryError> {
    doc.get(field).ok_or(PantryError::MissingField { field })
}

fn require_string<'a>(doc: &'a Document, field: &'static str) -> Result<&'a str, PantryError> {
    let value = require_field(doc, field)?;
    value.as_str().ok_or(PantryError::FieldType {
        field,
        expected: "string",
        found: json_type(value),
    })
}

fn require_number(doc: &Document, field: &'static str) -> Result<f64, PantryError> {
    let value = require_field(doc, field)?;
    value.as_f64().ok_or(PantryError::FieldType {
        field,
        expected: "number",
        found: json_type(value),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, quantity: Value, unit: &str) -> Document {
        match json!({ "name": name, "quantity": quantity, "unit": unit }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_valid_record_parses() {
        let doc = record("Apple", json!(10.0), "kg");
        let item = InventoryItem::from_document(&doc).unwrap();

        assert_eq!(item.name, "Apple");
        assert_eq!(item.quantity, 10.0);
        assert_eq!(item.unit, "kg");
    }

    #[test]
    fn test_integer_quantity_accepted() {
        let doc = record("Flour", json!(3), "kg");
        let item = InventoryItem::from_document(&doc).unwrap();

        assert_eq!(item.quantity, 3.0);
    }

    #[test]
    fn test_string_quantity_is_a_type_error() {
        let doc = record("Banana", json!("5"), "kg");
        let err = InventoryItem::from_document(&doc).unwrap_err();

        match err {
            PantryError::FieldType {
                field, expected, ..
            } => {
                assert_eq!(field, "quantity");
                assert_eq!(expected, "number");
            }
            other => panic!("expected FieldType error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_quantity_is_a_field_error() {
        let doc = match json!({ "name": "Apple" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let err = InventoryItem::from_document(&doc).unwrap_err();

        match err {
            PantryError::MissingField { field } => assert_eq!(field, "quantity"),
            other => panic!("expected MissingField error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_string_name_is_a_type_error() {
        let doc = match json!({ "name": 42, "quantity": 1.0, "unit": "kg" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let err = InventoryItem::from_document(&doc).unwrap_err();

        assert!(err.is_record_error(), "expected record error, got {err:?}");
    }
}
