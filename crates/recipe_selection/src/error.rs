use std::path::PathBuf;

use pantry::PantryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error(transparent)]
    Pantry(#[from] PantryError),

    #[error("failed to read recipe catalog at {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid recipe file {path}: {source}")]
    InvalidRecipe {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
