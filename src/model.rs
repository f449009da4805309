use serde::Deserialize;

/// What the user asked for, collected once per run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Free text sent as the search term; commas are passed through untouched
    pub ingredient_query: String,
    /// Ingredients to keep out of the results, in the order they were entered
    pub exclusions: Vec<String>,
    /// Lowercased cuisine type, `None` for no preference
    pub cuisine: Option<String>,
    /// Unvalidated calorie range such as `100-300`, `None` for no preference
    pub calorie_range: Option<String>,
}

impl SearchCriteria {
    pub fn new(ingredient_query: impl Into<String>) -> Self {
        Self {
            ingredient_query: ingredient_query.into(),
            ..Default::default()
        }
    }
}

/// Body of a recipe search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<RecipeHit>,
}

/// One recipe returned by the search API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeHit {
    pub recipe: Recipe,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recipe {
    pub label: String,
    pub url: String,
    /// Minutes; the API reports zero when it does not know
    #[serde(rename = "totalTime", default)]
    pub total_time: Option<f64>,
    #[serde(rename = "yield", default)]
    pub servings: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ingredient {
    pub food: String,
}

impl From<Recipe> for RecipeHit {
    fn from(recipe: Recipe) -> Self {
        RecipeHit { recipe }
    }
}
