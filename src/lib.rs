//! # paprika-import
//!
//! Importer for Paprika-style recipe export archives.
//!
//! An export file is either a ZIP container of per-recipe gzip-compressed
//! JSON entries, a single gzip member, or bare JSON. This crate detects
//! the container format, walks the ZIP/gzip structures directly (only the
//! narrow subset the exporting application produces), decompresses each
//! entry, and turns the loosely-typed records inside into structured
//! [`Recipe`] values — including a grammar parser for free-text
//! ingredient lines ("1 1/2 tbsp olive oil, divided") and duration
//! strings ("1 hr 30 min").
//!
//! ## Example
//!
//! ```no_run
//! use std::collections::HashSet;
//! use paprika_import::import_recipes;
//!
//! fn main() -> Result<(), paprika_import::ImportError> {
//!     let bytes = std::fs::read("backup.paprikarecipes")?;
//!     let existing: HashSet<String> = HashSet::new();
//!
//!     let (recipes, report) = import_recipes(&bytes, &existing)?;
//!     println!("imported {}, skipped {}", report.imported, report.skipped);
//!     for recipe in &recipes {
//!         println!("  {}", recipe.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! One bad entry never aborts an import: corrupt members and malformed
//! records are reported in [`ImportReport::errors`] while the rest of
//! the archive goes through.

pub mod archive;
pub mod error;
pub mod model;
pub mod parse;
pub mod record;

mod import;

pub use error::ImportError;
pub use import::import_recipes;
pub use model::{ImportReport, Recipe, RecipeIngredient, Unit};
