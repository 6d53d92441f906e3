use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("inventory record is missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("inventory record field `{field}` must be a {expected}, found {found}")]
    FieldType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("inventory store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl PantryError {
    /// True for record-shape failures (missing or mistyped fields), as
    /// opposed to store-level failures.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            PantryError::MissingField { .. } | PantryError::FieldType { .. }
        )
    }
}
