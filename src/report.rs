use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::SearchError;
use crate::model::{Recipe, RecipeHit};

const NOT_AVAILABLE: &str = "Not available";

/// Render minutes as `H hours and M minutes`
///
/// Missing, zero and negative values all render as "Not available".
/// Fractional minutes are truncated.
pub fn format_total_time(total_time: Option<f64>) -> String {
    match total_time {
        Some(minutes) if minutes > 0.0 => {
            let minutes = minutes as u64;
            format!("{} hours and {} minutes", minutes / 60, minutes % 60)
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Servings keep their decimal point, so `4.0` renders as `4.0`
pub fn format_servings(servings: Option<f64>) -> String {
    match servings {
        Some(servings) => format!("{:?}", servings),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Write one recipe block followed by a blank separator line
pub fn write_recipe<W: Write>(recipe: &Recipe, out: &mut W) -> io::Result<()> {
    writeln!(out, "Title: {}", recipe.label)?;
    writeln!(out, "URL: {}", recipe.url)?;
    writeln!(out, "Total Time: {}", format_total_time(recipe.total_time))?;
    writeln!(out, "Servings: {}", format_servings(recipe.servings))?;

    if recipe.ingredients.is_empty() {
        writeln!(out, "No ingredients found.")?;
    } else {
        writeln!(out, "Shopping List:")?;
        for ingredient in &recipe.ingredients {
            writeln!(out, "- {}", ingredient.food.to_lowercase())?;
        }
    }

    writeln!(out)
}

/// Write every hit as a block headed `Recipe {n}:`, counting from 1
pub fn write_report<W: Write>(hits: &[RecipeHit], out: &mut W) -> io::Result<()> {
    for (index, hit) in hits.iter().enumerate() {
        writeln!(out, "Recipe {}:", index + 1)?;
        write_recipe(&hit.recipe, out)?;
    }
    Ok(())
}

/// Create or truncate `path` and write the report to it
///
/// Returns the number of recipes written.
pub fn save_report(path: impl AsRef<Path>, hits: &[RecipeHit]) -> Result<usize, SearchError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(hits, &mut writer)?;
    writer.flush()?;

    info!("Wrote {} recipes to {}", hits.len(), path.display());
    Ok(hits.len())
}
