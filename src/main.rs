use std::collections::HashSet;
use std::env;
use std::fs;

use paprika_import::import_recipes;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide a recipe archive path as an argument")?;

    let bytes = fs::read(path)?;
    let (recipes, report) = import_recipes(&bytes, &HashSet::new())?;

    for recipe in &recipes {
        println!(
            "{} ({} ingredients, {} steps)",
            recipe.title,
            recipe.ingredients.len(),
            recipe.instructions.len()
        );
    }
    println!("imported {}, skipped {}", report.imported, report.skipped);
    for message in &report.errors {
        eprintln!("warning: {}", message);
    }

    Ok(())
}
