//! Ingredient-line grammar.
//!
//! Free-text lines like `"1 1/2 tbsp olive oil, divided"` are split into
//! quantity, unit, name and preparation note. Parsing never fails: recipe
//! text is messy, so anything unrecognized degrades to a usable default
//! (quantity 1, unit [`Unit::Piece`], the raw text as the name) instead
//! of dropping the ingredient.

use crate::model::{Unit, DEFAULT_QUANTITY};

/// A quantity matched at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedQuantity {
    /// Always positive; non-positive amounts are treated as no match
    pub value: f64,
    /// Bytes of input the match consumed, including the trailing gap
    pub consumed: usize,
}

/// One structured ingredient line, before it is given a display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub note: Option<String>,
}

/// Unit synonyms, longest spelling first so that e.g. "tablespoons" can
/// never lose to a shorter prefix. Matching is case-insensitive and
/// requires a word boundary (space, end of string, or period) after the
/// keyword, so "clove" inside a longer word does not match.
const UNIT_SYNONYMS: &[(&str, Unit)] = &[
    ("tablespoons", Unit::Tablespoon),
    ("milliliters", Unit::Milliliter),
    ("millilitres", Unit::Milliliter),
    ("tablespoon", Unit::Tablespoon),
    ("milliliter", Unit::Milliliter),
    ("millilitre", Unit::Milliliter),
    ("kilograms", Unit::Kilogram),
    ("teaspoons", Unit::Teaspoon),
    ("kilogram", Unit::Kilogram),
    ("packages", Unit::Package),
    ("teaspoon", Unit::Teaspoon),
    ("package", Unit::Package),
    ("pinches", Unit::Pinch),
    ("ounces", Unit::Ounce),
    ("pounds", Unit::Pound),
    ("cloves", Unit::Clove),
    ("slices", Unit::Slice),
    ("pieces", Unit::Piece),
    ("liters", Unit::Liter),
    ("litres", Unit::Liter),
    ("dashes", Unit::Dash),
    ("ounce", Unit::Ounce),
    ("pound", Unit::Pound),
    ("clove", Unit::Clove),
    ("slice", Unit::Slice),
    ("piece", Unit::Piece),
    ("pinch", Unit::Pinch),
    ("liter", Unit::Liter),
    ("litre", Unit::Liter),
    ("grams", Unit::Gram),
    ("tbsps", Unit::Tablespoon),
    ("cups", Unit::Cup),
    ("gram", Unit::Gram),
    ("tbsp", Unit::Tablespoon),
    ("tsps", Unit::Teaspoon),
    ("dash", Unit::Dash),
    ("cans", Unit::Can),
    ("cup", Unit::Cup),
    ("tbs", Unit::Tablespoon),
    ("tsp", Unit::Teaspoon),
    ("lbs", Unit::Pound),
    ("kgs", Unit::Kilogram),
    ("pkg", Unit::Package),
    ("can", Unit::Can),
    ("oz", Unit::Ounce),
    ("lb", Unit::Pound),
    ("kg", Unit::Kilogram),
    ("ml", Unit::Milliliter),
    ("g", Unit::Gram),
    ("l", Unit::Liter),
];

/// Parse one trimmed line of ingredient text.
pub fn parse_line(line: &str) -> ParsedIngredient {
    let raw = line.trim();

    // Text after the last comma is a preparation note ("..., sifted")
    let (body, note) = match raw.rfind(',') {
        Some(idx) => {
            let tail = raw[idx + 1..].trim();
            let note = if tail.is_empty() {
                None
            } else {
                Some(tail.to_string())
            };
            (raw[..idx].trim(), note)
        }
        None => (raw, None),
    };

    let body = normalize_vulgar_fractions(body);

    let (quantity, after_quantity) = match parse_quantity(&body) {
        Some(q) => (q.value, body[q.consumed..].trim_start()),
        None => (DEFAULT_QUANTITY, body.as_str()),
    };

    let (unit, after_unit) = match match_unit(after_quantity) {
        Some((unit, rest)) => (unit, rest),
        None => (Unit::Piece, after_quantity),
    };

    let mut name = after_unit.trim().to_string();
    if name.is_empty() {
        // "2 cups" alone: better to keep the whole text than lose the line
        name = body.trim().to_string();
    }
    if name.is_empty() {
        name = raw.to_string();
    }

    ParsedIngredient {
        name,
        quantity,
        unit,
        note,
    }
}

/// Parse a leading quantity: a mixed number ("1 1/2"), a bare fraction
/// ("3/4"), or a decimal/integer. Returns `None` when the text does not
/// begin with a usable positive amount.
pub fn parse_quantity(text: &str) -> Option<ParsedQuantity> {
    let mut tokens = text.split_whitespace();
    let first = tokens.next()?;
    let second = tokens.next();

    // Mixed number: "<int> <int>/<int>"
    if let (Ok(whole), Some(second)) = (first.parse::<u32>(), second) {
        if let Some(frac) = parse_fraction(second) {
            let value = whole as f64 + frac;
            if value > 0.0 {
                return Some(ParsedQuantity {
                    value,
                    consumed: offset_after(text, second)?,
                });
            }
            return None;
        }
    }

    // Bare fraction: "<int>/<int>"
    if let Some(frac) = parse_fraction(first) {
        if frac > 0.0 {
            return Some(ParsedQuantity {
                value: frac,
                consumed: offset_after(text, first)?,
            });
        }
        return None;
    }

    // Decimal or integer; reject exotic float spellings like "inf"
    if !first.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let value = first.parse::<f64>().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    Some(ParsedQuantity {
        value,
        consumed: offset_after(text, first)?,
    })
}

/// Simple fraction "n/d" with a non-zero denominator
fn parse_fraction(token: &str) -> Option<f64> {
    let (num, den) = token.split_once('/')?;
    let num = num.parse::<u32>().ok()?;
    let den = den.parse::<u32>().ok()?;
    if den == 0 {
        return None;
    }
    Some(num as f64 / den as f64)
}

/// Byte offset just past `token`'s occurrence within `text`
fn offset_after(text: &str, token: &str) -> Option<usize> {
    let start = token.as_ptr() as usize - text.as_ptr() as usize;
    if start > text.len() {
        return None;
    }
    Some(start + token.len())
}

/// Match a leading unit keyword, returning the unit and the text after
/// the keyword (and a directly attached period, as in "tsp. salt").
fn match_unit(text: &str) -> Option<(Unit, &str)> {
    let bytes = text.as_bytes();
    for (keyword, unit) in UNIT_SYNONYMS {
        let len = keyword.len();
        if bytes.len() < len || !bytes[..len].eq_ignore_ascii_case(keyword.as_bytes()) {
            continue;
        }
        match bytes.get(len) {
            None => return Some((*unit, "")),
            Some(b' ') | Some(b'.') => return Some((*unit, &text[len + 1..])),
            _ => continue,
        }
    }
    None
}

/// Rewrite unicode vulgar fractions to their "n/m" spelling so the
/// quantity parser sees one grammar. "1½" gains a separating space to
/// become a mixed number.
fn normalize_vulgar_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let ascii = match c {
            '½' => "1/2",
            '⅓' => "1/3",
            '⅔' => "2/3",
            '¼' => "1/4",
            '¾' => "3/4",
            '⅛' => "1/8",
            '⅜' => "3/8",
            '⅝' => "5/8",
            '⅞' => "7/8",
            _ => {
                out.push(c);
                continue;
            }
        };
        if out.ends_with(|p: char| p.is_ascii_digit()) {
            out.push(' ');
        }
        out.push_str(ascii);
    }
    out
}
