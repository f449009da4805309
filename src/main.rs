use std::io;
use std::process::ExitCode;

use log::error;

use recipe_search::{run, RecipeSearchClient, SearchConfig, SearchError};

fn main() -> ExitCode {
    env_logger::init();

    match search() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn search() -> Result<recipe_search::Outcome, SearchError> {
    let config = SearchConfig::load()?;
    let client = RecipeSearchClient::new(&config)?;

    run(&config, &client, io::stdin().lock(), io::stdout().lock())
}
