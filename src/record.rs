use serde::Deserialize;

/// A field that shows up as either a JSON string or a number depending on
/// the exporting application's version.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Text(String),
    Number(f64),
}

impl LooseValue {
    /// Normalize to text; numbers print without a trailing ".0"
    pub fn as_text(&self) -> String {
        match self {
            LooseValue::Text(s) => s.clone(),
            LooseValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }
}

/// One recipe as it appears in an archive entry's JSON.
///
/// Every field is optional: exports from different application versions
/// omit fields freely, and absence is never an error. Defaulting happens
/// later, when the record is turned into a [`Recipe`](crate::model::Recipe).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeRecord {
    pub uid: Option<String>,
    pub name: Option<String>,
    /// Multi-line free text, one ingredient per line
    pub ingredients: Option<String>,
    /// Multi-line free text, one step per line
    pub directions: Option<String>,
    pub servings: Option<LooseValue>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub notes: Option<String>,
    pub source_url: Option<String>,
    pub nutritional_info: Option<String>,
    /// Base64-encoded photo
    pub photo_data: Option<String>,
    #[serde(default)]
    pub on_favorites: bool,
    #[serde(default)]
    pub categories: Vec<String>,
    pub rating: Option<LooseValue>,
    pub difficulty: Option<LooseValue>,
    pub description: Option<String>,
}

/// Decode one archive entry's JSON object.
///
/// Failure is per-entry recoverable; the orchestrator records it and
/// moves on to the next entry.
pub fn decode(bytes: &[u8]) -> Result<RecipeRecord, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Decode a bare-JSON input, accepting either a single object or a
/// top-level array of objects.
pub fn decode_batch(bytes: &[u8]) -> Result<Vec<RecipeRecord>, serde_json::Error> {
    decode(bytes)
        .map(|record| vec![record])
        .or_else(|_| serde_json::from_slice::<Vec<RecipeRecord>>(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let json = br#"{
            "uid": "ABC-123",
            "name": "Shakshuka",
            "ingredients": "4 eggs\n1 can crushed tomatoes",
            "directions": "Simmer tomatoes.\nCrack in eggs.",
            "servings": "2 servings",
            "prep_time": "10 min",
            "cook_time": "20 min",
            "source_url": "https://example.com/shakshuka",
            "on_favorites": true,
            "categories": ["Breakfast", "Vegetarian"],
            "rating": 5,
            "description": "Eggs poached in tomato sauce"
        }"#;

        let record = decode(json).unwrap();
        assert_eq!(record.name.as_deref(), Some("Shakshuka"));
        assert_eq!(record.servings.unwrap().as_text(), "2 servings");
        assert_eq!(record.rating.unwrap().as_text(), "5");
        assert!(record.on_favorites);
        assert_eq!(record.categories.len(), 2);
        assert!(record.photo_data.is_none());
    }

    #[test]
    fn test_every_field_optional() {
        let record = decode(b"{}").unwrap();
        assert!(record.name.is_none());
        assert!(!record.on_favorites);
        assert!(record.categories.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record = decode(br#"{"name":"Toast","scale":"1x","photo_hash":"ff"}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("Toast"));
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(decode(b"{\"name\": ").is_err());
    }

    #[test]
    fn test_decode_batch_accepts_array() {
        let records = decode_batch(br#"[{"name":"A"},{"name":"B"}]"#).unwrap();
        assert_eq!(records.len(), 2);

        let single = decode_batch(br#"{"name":"Solo"}"#).unwrap();
        assert_eq!(single.len(), 1);
    }
}
