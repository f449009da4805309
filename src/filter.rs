use log::debug;

use crate::model::{Recipe, RecipeHit};

/// Drop every hit that uses an excluded ingredient
///
/// Terms match as case-insensitive substrings of each ingredient's food name,
/// so `nut` also removes `peanut` and `nutmeg`. Surviving hits keep their order.
pub fn filter_excluded(hits: Vec<RecipeHit>, exclusions: &[String]) -> Vec<RecipeHit> {
    if exclusions.is_empty() {
        return hits;
    }

    let folded: Vec<String> = exclusions.iter().map(|term| term.to_lowercase()).collect();

    hits.into_iter()
        .filter(|hit| {
            let excluded = is_excluded(&hit.recipe, &folded);
            if excluded {
                debug!("Excluding '{}'", hit.recipe.label);
            }
            !excluded
        })
        .collect()
}

/// Whether any already-lowercased term occurs in any of the recipe's ingredients
pub fn is_excluded(recipe: &Recipe, folded_exclusions: &[String]) -> bool {
    recipe.ingredients.iter().any(|ingredient| {
        let food = ingredient.food.to_lowercase();
        folded_exclusions.iter().any(|term| food.contains(term.as_str()))
    })
}
