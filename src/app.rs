use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::info;

use crate::client::RecipeSearch;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::filter::filter_excluded;
use crate::input::Prompter;
use crate::report::save_report;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing survived the search and exclusion filter; no file was written
    NoResults,
    /// `count` recipes were written to `path`
    Saved { count: usize, path: PathBuf },
}

/// Collect preferences, search, filter and save the report
///
/// Prompts are answered from `input`; prompts and progress notices go to
/// `output`.
pub fn run<S, R, W>(
    config: &SearchConfig,
    search: &S,
    input: R,
    mut output: W,
) -> Result<Outcome, SearchError>
where
    S: RecipeSearch + ?Sized,
    R: BufRead,
    W: Write,
{
    let criteria = Prompter::new(input, &mut output).collect_criteria()?;

    let url = search.request_url(&criteria)?;
    writeln!(output, "URL with all filters: {}", url)?;

    let hits = search.search(&criteria)?;
    let total = hits.len();
    let filtered = filter_excluded(hits, &criteria.exclusions);
    info!(
        "{} of {} hits left after excluding {:?}",
        filtered.len(),
        total,
        criteria.exclusions
    );

    if filtered.is_empty() {
        writeln!(output, "No results found. Please try again.")?;
        return Ok(Outcome::NoResults);
    }

    writeln!(
        output,
        "Found {} recipes matching your criteria.\n",
        filtered.len()
    )?;

    let path = PathBuf::from(&config.output_file);
    let count = save_report(&path, &filtered)?;
    writeln!(output, "Results have been written to {}", config.output_file)?;

    Ok(Outcome::Saved { count, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, Recipe, RecipeHit, SearchCriteria};
    use crate::query::QueryParams;
    use std::cell::RefCell;
    use std::io::Cursor;
    use url::Url;

    /// Returns canned hits and remembers the criteria it was asked for
    struct CannedSearch {
        config: SearchConfig,
        hits: Vec<RecipeHit>,
        seen: RefCell<Option<SearchCriteria>>,
    }

    impl CannedSearch {
        fn new(config: &SearchConfig, hits: Vec<RecipeHit>) -> Self {
            Self {
                config: config.clone(),
                hits,
                seen: RefCell::new(None),
            }
        }
    }

    impl RecipeSearch for CannedSearch {
        fn request_url(&self, criteria: &SearchCriteria) -> Result<Url, SearchError> {
            Ok(QueryParams::for_criteria(criteria, &self.config).to_url(&self.config.base_url)?)
        }

        fn search(&self, criteria: &SearchCriteria) -> Result<Vec<RecipeHit>, SearchError> {
            *self.seen.borrow_mut() = Some(criteria.clone());
            Ok(self.hits.clone())
        }
    }

    fn hit(label: &str, foods: &[&str]) -> RecipeHit {
        Recipe {
            label: label.to_string(),
            url: format!("https://example.com/{}", label),
            ingredients: foods
                .iter()
                .map(|f| Ingredient {
                    food: f.to_string(),
                })
                .collect(),
            ..Default::default()
        }
        .into()
    }

    fn config_in(dir: &tempfile::TempDir) -> SearchConfig {
        SearchConfig {
            output_file: dir
                .path()
                .join("recipes search.txt")
                .to_string_lossy()
                .into_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_saves_filtered_recipes() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let search = CannedSearch::new(
            &config,
            vec![
                hit("smoothie", &["peanut butter", "banana"]),
                hit("toast", &["banana", "honey"]),
            ],
        );

        let mut output = Vec::new();
        let outcome = run(
            &config,
            &search,
            Cursor::new("banana\nyes\nnut\nno\n\n\n"),
            &mut output,
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Saved {
                count: 1,
                path: PathBuf::from(&config.output_file)
            }
        );
        let seen = search.seen.borrow().clone().unwrap();
        assert_eq!(seen.exclusions, vec!["nut"]);

        let stdout = String::from_utf8(output).unwrap();
        assert!(stdout.contains("URL with all filters: https://api.edamam.com/api/recipes/v2?"));
        assert!(stdout.contains("excluded=nut"));
        assert!(stdout.contains("Found 1 recipes matching your criteria."));
        assert!(stdout.contains("Results have been written to"));

        let report = std::fs::read_to_string(&config.output_file).unwrap();
        assert!(report.starts_with("Recipe 1:\nTitle: toast\n"));
        assert!(!report.contains("smoothie"));
    }

    #[test]
    fn test_run_without_results_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let search = CannedSearch::new(&config, Vec::new());

        let mut output = Vec::new();
        let outcome = run(&config, &search, Cursor::new("caviar\nno\n\n\n"), &mut output).unwrap();

        assert_eq!(outcome, Outcome::NoResults);
        let stdout = String::from_utf8(output).unwrap();
        assert!(stdout.contains("No results found. Please try again."));
        assert!(!std::path::Path::new(&config.output_file).exists());
    }

    #[test]
    fn test_run_everything_excluded() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let search = CannedSearch::new(&config, vec![hit("pesto", &["Pine Nuts", "basil"])]);

        let mut output = Vec::new();
        let outcome = run(
            &config,
            &search,
            Cursor::new("basil\nyes\nNUT\nno\n\n\n"),
            &mut output,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::NoResults);
        assert!(!std::path::Path::new(&config.output_file).exists());
    }
}
