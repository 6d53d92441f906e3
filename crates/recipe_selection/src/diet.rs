use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Dietary categories a recipe can be tagged with.
///
/// A closed set passed by value; recipe eligibility is a plain membership
/// test against the tags on the recipe.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    #[default]
    Normal,
    Vegetarian,
    Vegan,
}
