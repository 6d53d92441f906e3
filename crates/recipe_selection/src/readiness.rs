use pantry::AvailableItems;

use crate::recipe::Recipe;

/// Score how completely the pantry covers a recipe's ingredient needs.
///
/// Each ingredient contributes `min(available / required, 1.0)`, or 0.0 when
/// the item is not in the pantry at all; the score is the average over all
/// ingredients, so it lands in [0.0, 1.0]. A recipe with no ingredients
/// scores 0.0 and is therefore never selectable.
///
/// # Examples
/// ```
/// use pantry::AvailableItems;
/// use recipe_selection::{calculate_readiness, Recipe};
///
/// let recipe = Recipe {
///     name: "Apple Pie".to_string(),
///     diets: vec![],
///     ingredients: [("Apple".to_string(), 4.0), ("Flour".to_string(), 1.0)]
///         .into_iter()
///         .collect(),
/// };
///
/// let mut pantry = AvailableItems::new();
/// pantry.insert("Apple".to_string(), 2.0); // half the apples we need
/// pantry.insert("Flour".to_string(), 5.0); // more than enough
///
/// assert_eq!(calculate_readiness(&recipe, &pantry), 0.75);
/// ```
pub fn calculate_readiness(recipe: &Recipe, available: &AvailableItems) -> f64 {
    if recipe.ingredients.is_empty() {
        return 0.0;
    }

    let covered: f64 = recipe
        .ingredients
        .iter()
        .map(|(name, required)| ingredient_coverage(available.get(name).copied(), *required))
        .sum();

    covered / recipe.ingredients.len() as f64
}

fn ingredient_coverage(stock: Option<f64>, required: f64) -> f64 {
    // A non-positive requirement is vacuously met.
    if required <= 0.0 {
        return 1.0;
    }

    match stock {
        Some(stock) => (stock / required).clamp(0.0, 1.0),
        None => 0.0,
    }
}
