//! Interactive collection of search preferences.
//!
//! Every prompt accepts any answer. End of input reads as an empty line, which
//! resolves each question to "no" or "no preference".

use std::io::{self, BufRead, Write};

use log::debug;

use crate::model::SearchCriteria;

const INGREDIENT_PROMPT: &str = "Enter an ingredient or several ingredients separated by comma: ";
const EXCLUDE_PROMPT: &str = "Do you want to exclude any ingredients from the search? yes/no ";
const EXCLUSION_PROMPT: &str = "Please enter an ingredient you want to exclude: ";
const EXCLUDE_MORE_PROMPT: &str = "Do you want to exclude another ingredient? yes/no ";
const CUISINE_PROMPT: &str = "Enter a cuisine type (e.g., American, Chinese, Italian etc.) or leave blank for no preference: ";
const CALORIE_PROMPT: &str = "Enter calorie range (e.g., 100-300) or leave blank for no preference: ";

/// Asks questions on `output` and reads the answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run every prompt in order and build the criteria for this search
    pub fn collect_criteria(&mut self) -> io::Result<SearchCriteria> {
        let ingredient_query = self.ask_ingredients()?;
        let exclusions = self.ask_exclusions()?;
        let cuisine = self.ask_cuisine()?;
        let calorie_range = self.ask_calorie_range()?;

        let criteria = SearchCriteria {
            ingredient_query,
            exclusions,
            cuisine,
            calorie_range,
        };
        debug!("Collected search criteria: {:?}", criteria);
        Ok(criteria)
    }

    pub fn ask_ingredients(&mut self) -> io::Result<String> {
        self.prompt(INGREDIENT_PROMPT)
    }

    /// Ask whether to exclude anything, then collect one term per round until
    /// the user stops answering `yes`
    ///
    /// Terms are kept exactly as typed; the filter folds case later.
    pub fn ask_exclusions(&mut self) -> io::Result<Vec<String>> {
        let mut exclusions = Vec::new();
        if !self.confirm(EXCLUDE_PROMPT)? {
            return Ok(exclusions);
        }

        loop {
            exclusions.push(self.prompt(EXCLUSION_PROMPT)?);
            // Only an exact `yes` asks again
            if self.prompt(EXCLUDE_MORE_PROMPT)? != "yes" {
                break;
            }
        }

        Ok(exclusions)
    }

    pub fn ask_cuisine(&mut self) -> io::Result<Option<String>> {
        let cuisine = self.prompt(CUISINE_PROMPT)?;
        Ok(non_empty(cuisine.trim().to_lowercase()))
    }

    pub fn ask_calorie_range(&mut self) -> io::Result<Option<String>> {
        let calories = self.prompt(CALORIE_PROMPT)?;
        Ok(non_empty(calories.trim().to_string()))
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(question)?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }

    /// Print `question` and return the answer without its line terminator
    fn prompt(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim_end_matches(['\n', '\r']);
        Ok(answer.to_string())
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
