pub mod diet;
pub mod error;
pub mod readiness;
pub mod recipe;
pub mod selector;

pub use diet::Diet;
pub use error::SelectionError;
pub use readiness::calculate_readiness;
pub use recipe::{load_recipes, Recipe};
pub use selector::{RecipeSelector, SelectionMode, SelectorConfig};
