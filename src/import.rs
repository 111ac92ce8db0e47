//! Import orchestration: archive bytes in, constructed recipes and a
//! summary report out.

use std::collections::HashSet;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::{debug, warn};

use crate::archive::{self, ArchiveFormat, RawArchiveEntry};
use crate::error::ImportError;
use crate::model::{ImportReport, Recipe, RecipeIngredient, DEFAULT_SERVINGS};
use crate::parse::{duration, ingredient};
use crate::record::{self, RecipeRecord};

/// Import every recipe from an export archive.
///
/// `existing_titles` holds the lowercased titles already present in the
/// caller's store; matching records are counted as skipped rather than
/// constructed again. The same suppression applies between entries of
/// one archive, so an export containing a recipe twice yields it once.
///
/// A single bad entry (corrupt member, malformed JSON, missing name) is
/// recorded in the report and skipped; the call only fails as a whole
/// when the input is not a readable archive at all or when no entry
/// yields a usable record.
pub fn import_recipes(
    archive_bytes: &[u8],
    existing_titles: &HashSet<String>,
) -> Result<(Vec<Recipe>, ImportReport), ImportError> {
    let (format, entries) = archive::extract_entries(archive_bytes)?;
    debug!("extracted {} entries", entries.len());

    let mut recipes = Vec::new();
    let mut report = ImportReport::default();
    let mut seen_titles: HashSet<String> = HashSet::new();

    for extracted in entries {
        let entry = match extracted {
            Ok(entry) => entry,
            Err(message) => {
                // Corrupt member; already isolated by the archive layer
                report.errors.push(message);
                continue;
            }
        };
        for decoded in decode_entry(format, &entry)? {
            match decoded {
                Ok(record) => assemble(
                    record,
                    existing_titles,
                    &mut seen_titles,
                    &mut recipes,
                    &mut report,
                ),
                Err(message) => report.errors.push(message),
            }
        }
    }

    if recipes.is_empty() && report.skipped == 0 {
        return Err(ImportError::NoRecipesFound);
    }

    report.imported = recipes.len();
    Ok((recipes, report))
}

/// Decode one archive entry into records.
///
/// Container entries that fail to decode are recoverable (`Err(message)`
/// items); a bare-JSON input that fails to decode means the whole input
/// was unrecognizable, which is fatal.
fn decode_entry(
    format: ArchiveFormat,
    entry: &RawArchiveEntry,
) -> Result<Vec<Result<RecipeRecord, String>>, ImportError> {
    match format {
        ArchiveFormat::Json => {
            let records = record::decode_batch(&entry.bytes).map_err(|_| ImportError::InvalidFile)?;
            Ok(records.into_iter().map(Ok).collect())
        }
        ArchiveFormat::Zip | ArchiveFormat::Gzip => match record::decode(&entry.bytes) {
            Ok(record) => Ok(vec![Ok(record)]),
            Err(e) => Ok(vec![Err(format!("{}: invalid recipe JSON ({})", entry.name, e))]),
        },
    }
}

/// Apply duplicate suppression and turn one record into a [`Recipe`].
fn assemble(
    record: RecipeRecord,
    existing_titles: &HashSet<String>,
    seen_titles: &mut HashSet<String>,
    recipes: &mut Vec<Recipe>,
    report: &mut ImportReport,
) {
    let title = match record.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            report.errors.push("skipped a record with no name".to_string());
            return;
        }
    };

    let key = title.to_lowercase();
    if existing_titles.contains(&key) || seen_titles.contains(&key) {
        debug!("skipping duplicate title '{}'", title);
        report.skipped += 1;
        return;
    }
    seen_titles.insert(key);

    recipes.push(build_recipe(title, record));
}

fn build_recipe(title: String, record: RecipeRecord) -> Recipe {
    let ingredients = record
        .ingredients
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| {
            let parsed = ingredient::parse_line(line);
            RecipeIngredient {
                name: parsed.name,
                quantity: parsed.quantity,
                unit: parsed.unit,
                note: parsed.note,
                order: i as u32,
            }
        })
        .collect();

    let instructions = record
        .directions
        .as_deref()
        .unwrap_or_default()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    Recipe {
        image: record.photo_data.as_deref().and_then(|b64| decode_photo(&title, b64)),
        summary: record.description.or(record.notes),
        source_url: record.source_url,
        servings: record
            .servings
            .as_ref()
            .and_then(|s| first_integer(&s.as_text()))
            .unwrap_or(DEFAULT_SERVINGS),
        prep_minutes: record.prep_time.as_deref().and_then(duration::parse_minutes),
        cook_minutes: record.cook_time.as_deref().and_then(duration::parse_minutes),
        instructions,
        tags: record.categories,
        favorite: record.on_favorites,
        ingredients,
        title,
    }
}

/// Base64-decode the embedded photo; a bad payload degrades to no image
fn decode_photo(title: &str, b64: &str) -> Option<Vec<u8>> {
    let compact: String = b64.chars().filter(|c| !c.is_whitespace()).collect();
    match BASE64.decode(compact) {
        Ok(bytes) if !bytes.is_empty() => Some(bytes),
        Ok(_) => None,
        Err(e) => {
            warn!("'{}': discarding unreadable photo data ({})", title, e);
            None
        }
    }
}

/// First run of ASCII digits in the text, as a positive integer
fn first_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<u32>().ok().filter(|n| *n > 0)
}
