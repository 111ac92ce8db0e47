use serde::Serialize;

/// Servings assigned when the servings text yields no integer.
pub const DEFAULT_SERVINGS: u32 = 4;

/// Quantity assigned when an ingredient line carries no parseable amount.
pub const DEFAULT_QUANTITY: f64 = 1.0;

/// A recipe assembled from one archive entry, ready for insertion into
/// the host application's store. The importer constructs these but does
/// not own their persisted lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub title: String,
    pub summary: Option<String>,
    pub source_url: Option<String>,
    pub servings: u32,
    pub prep_minutes: Option<u32>,
    pub cook_minutes: Option<u32>,
    /// Trimmed, non-empty instruction lines in source order
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    /// Decoded photo bytes, if the entry carried a valid base64 image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
    pub favorite: bool,
    /// Ingredient entries in source order
    pub ingredients: Vec<RecipeIngredient>,
}

/// One structured ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    /// Preparation note, e.g. "sifted" from "2 cups flour, sifted"
    pub note: Option<String>,
    /// Display position within the recipe, starting at 0
    pub order: u32,
}

/// Measurement units recognized by the ingredient-line parser.
///
/// Anything the parser cannot match falls back to [`Unit::Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    Cup,
    Tablespoon,
    Teaspoon,
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Ounce,
    Pound,
    Pinch,
    Dash,
    Clove,
    Can,
    Package,
    Slice,
    Piece,
}

impl Unit {
    /// Short human-readable form for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::Cup => "cup",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Milliliter => "ml",
            Unit::Liter => "l",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
            Unit::Pinch => "pinch",
            Unit::Dash => "dash",
            Unit::Clove => "clove",
            Unit::Can => "can",
            Unit::Package => "package",
            Unit::Slice => "slice",
            Unit::Piece => "piece",
        }
    }

    /// Whether this unit counts whole items rather than measuring them
    pub fn is_count(&self) -> bool {
        matches!(
            self,
            Unit::Piece | Unit::Clove | Unit::Can | Unit::Package | Unit::Slice
        )
    }
}

/// Outcome of one import call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportReport {
    /// Recipes constructed and handed back for insertion
    pub imported: usize,
    /// Entries skipped because their title already existed
    pub skipped: usize,
    /// Human-readable messages for entries that failed and were skipped
    pub errors: Vec<String>,
}
