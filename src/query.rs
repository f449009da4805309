use url::Url;

use crate::config::SearchConfig;
use crate::model::SearchCriteria;

/// Ordered query parameters; a name may appear more than once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for one search, in the order the API documents them
    ///
    /// Exclusions become one `excluded` pair each. Cuisine and calories are
    /// only sent when the user gave a preference.
    pub fn for_criteria(criteria: &SearchCriteria, config: &SearchConfig) -> Self {
        let mut params = Self::new();
        params.push("type", "public");
        params.push("q", &criteria.ingredient_query);
        params.push("app_id", &config.app_id);
        params.push("app_key", &config.app_key);

        for exclusion in &criteria.exclusions {
            params.push("excluded", exclusion);
        }
        if let Some(cuisine) = &criteria.cuisine {
            params.push("cuisineType", cuisine);
        }
        if let Some(calories) = &criteria.calorie_range {
            params.push("calories", calories);
        }

        params
    }

    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.pairs.push((name, value.into()));
    }

    /// All values recorded under `name`, in insertion order
    #[cfg(test)]
    fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    #[cfg(test)]
    fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Append the parameters to `base`, percent-encoding every value
    pub fn to_url(&self, base: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(base, self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
    }
}
