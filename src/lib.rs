//! Interactive recipe search.
//!
//! Asks for ingredients and preferences, queries the recipe search API, drops
//! hits that use an excluded ingredient and writes the rest, with a shopping
//! list, to a text file.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod model;
pub mod query;
pub mod report;

pub use app::{run, Outcome};
pub use client::{RecipeSearch, RecipeSearchClient};
pub use config::SearchConfig;
pub use error::SearchError;
pub use model::{Ingredient, Recipe, RecipeHit, SearchCriteria, SearchResponse};
