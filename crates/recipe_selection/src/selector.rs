use pantry::{available_items, AvailableItems, InventoryRepository};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::diet::Diet;
use crate::error::SelectionError;
use crate::readiness::calculate_readiness;
use crate::recipe::Recipe;

/// How [`RecipeSelector::select`] picks among the qualifying recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Highest readiness wins; ties go to the earliest catalog entry.
    Best,
    /// Uniform draw among qualifiers; a seed makes the draw reproducible.
    Random { seed: Option<u64> },
}

/// Tuning knobs for the selector.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Stock an item must reach before it counts as available.
    pub minimum_quantity: f64,
    /// Recipes scoring at or below this readiness are discarded.
    pub readiness_threshold: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            minimum_quantity: 1.0,
            readiness_threshold: 0.0,
        }
    }
}

/// Picks a preparable recipe for a diet from a caller-supplied catalog.
///
/// The selector reads pantry stock through the injected
/// [`InventoryRepository`], scores every recipe tagged with the requested
/// diet against what is available, and returns one recipe name. Each call is
/// a stateless computation over the current store contents.
///
/// # Examples
/// ```
/// use pantry::{Document, InventoryRepository, PantryError};
/// use recipe_selection::{Diet, Recipe, RecipeSelector, SelectionMode};
/// use serde_json::{json, Value};
///
/// struct FixedPantry(Vec<Document>);
///
/// impl InventoryRepository for FixedPantry {
///     fn find(&self) -> Result<Vec<Document>, PantryError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let record = |v: Value| match v {
///     Value::Object(map) => map,
///     _ => unreachable!(),
/// };
/// let pantry = FixedPantry(vec![
///     record(json!({ "name": "Tomato", "quantity": 6.0, "unit": "kg" })),
/// ]);
///
/// let mut selector = RecipeSelector::new(pantry);
/// selector.set_recipes(vec![Recipe {
///     name: "Tomato Soup".to_string(),
///     diets: vec![Diet::Vegan],
///     ingredients: [("Tomato".to_string(), 4.0)].into_iter().collect(),
/// }]);
///
/// let choice = selector.select(Diet::Vegan, SelectionMode::Best).unwrap();
/// assert_eq!(choice.as_deref(), Some("Tomato Soup"));
/// ```
pub struct RecipeSelector<R: InventoryRepository> {
    repository: R,
    recipes: Vec<Recipe>,
    config: SelectorConfig,
}

impl<R: InventoryRepository> RecipeSelector<R> {
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, SelectorConfig::default())
    }

    pub fn with_config(repository: R, config: SelectorConfig) -> Self {
        RecipeSelector {
            repository,
            recipes: Vec::new(),
            config,
        }
    }

    /// Replace the catalog used by subsequent selections. Catalog order is
    /// meaningful: [`SelectionMode::Best`] breaks ties in favor of earlier
    /// entries.
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Pantry items meeting the configured stock threshold.
    pub fn available_items(&self) -> Result<AvailableItems, SelectionError> {
        Ok(available_items(
            &self.repository,
            self.config.minimum_quantity,
        )?)
    }

    /// Pick one recipe for `diet`, or `None` when nothing qualifies.
    ///
    /// A recipe qualifies when it is tagged with `diet` and its readiness
    /// against the current pantry exceeds the configured threshold. An empty
    /// catalog, a diet no recipe carries, or all-zero readiness all yield
    /// `Ok(None)` rather than an error; only pantry failures surface as
    /// `Err`.
    pub fn select(
        &self,
        diet: Diet,
        mode: SelectionMode,
    ) -> Result<Option<String>, SelectionError> {
        if self.recipes.is_empty() {
            return Ok(None);
        }

        let available = self.available_items()?;

        let candidates: Vec<(&Recipe, f64)> = self
            .recipes
            .iter()
            .filter(|recipe| recipe.matches_diet(diet))
            .map(|recipe| (recipe, calculate_readiness(recipe, &available)))
            .filter(|(_, readiness)| *readiness > self.config.readiness_threshold)
            .collect();

        if candidates.is_empty() {
            tracing::debug!(%diet, "no recipe qualifies");
            return Ok(None);
        }

        let chosen = match mode {
            SelectionMode::Best => best_candidate(&candidates),
            SelectionMode::Random { seed } => random_candidate(&candidates, seed),
        };

        tracing::debug!(%diet, recipe = %chosen, ?mode, "selected recipe");

        Ok(Some(chosen))
    }

    /// Controller-style entry point: `take_best` picks the top scorer,
    /// otherwise a random qualifier.
    pub fn get_recipe(&self, diet: Diet, take_best: bool) -> Result<Option<String>, SelectionError> {
        let mode = if take_best {
            SelectionMode::Best
        } else {
            SelectionMode::Random { seed: None }
        };
        self.select(diet, mode)
    }
}

// Strictly-greater comparison keeps the first of equally-scored entries.
fn best_candidate(candidates: &[(&Recipe, f64)]) -> String {
    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    best.0.name.clone()
}

fn random_candidate(candidates: &[(&Recipe, f64)], seed: Option<u64>) -> String {
    let index = match seed {
        Some(seed) => StdRng::seed_from_u64(seed).random_range(0..candidates.len()),
        None => rand::rng().random_range(0..candidates.len()),
    };
    candidates[index].0.name.clone()
}
