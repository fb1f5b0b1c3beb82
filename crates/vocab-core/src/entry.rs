use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Difficulty tier of a vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Parse tier from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" => Some(Difficulty::Basic),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    /// Get tier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// One authoritative vocabulary entry from a word list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabEntry {
    pub id: u32,
    pub word: String,
    pub definition: String,
    pub part_of_speech: String,
    pub synonyms: Vec<String>,
    /// Every entry carries exactly two example sentences
    pub examples: [String; 2],
    pub difficulty: Difficulty,
}

/// One word row in the target document
///
/// Descriptive fields are either present-and-non-empty or absent; an empty
/// string in the source JSON parses to `None`. Unknown per-record fields
/// round-trip through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub word: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub definition: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub part_of_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordRecord {
    /// A record stays eligible for filling until it carries a definition
    pub fn is_unfilled(&self) -> bool {
        self.definition.is_none()
    }

    /// Copy all five descriptive fields from an entry in one step
    pub fn fill_from(&mut self, entry: &VocabEntry) {
        self.definition = Some(entry.definition.clone());
        self.part_of_speech = Some(entry.part_of_speech.clone());
        self.synonyms = Some(entry.synonyms.clone());
        self.examples = Some(entry.examples.to_vec());
        self.difficulty = Some(entry.difficulty.as_str().to_string());
    }
}

/// The word document: a `words` array plus whatever other top-level
/// metadata the file carries, preserved verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabDocument {
    pub words: Vec<WordRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VocabDocument {
    /// Number of records that already carry a definition
    pub fn filled_count(&self) -> usize {
        self.words.iter().filter(|w| !w.is_unfilled()).count()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> VocabEntry {
        VocabEntry {
            id: 21,
            word: "aid".to_string(),
            definition: "Help, typically of a practical nature".to_string(),
            part_of_speech: "noun/verb".to_string(),
            synonyms: vec!["help".to_string(), "assist".to_string()],
            examples: [
                "International aid was provided.".to_string(),
                "The software will aid researchers.".to_string(),
            ],
            difficulty: Difficulty::Basic,
        }
    }

    #[test]
    fn empty_definition_parses_as_absent() {
        let record: WordRecord =
            serde_json::from_str(r#"{"id": 21, "word": "aid", "definition": ""}"#).unwrap();
        assert!(record.definition.is_none());
        assert!(record.is_unfilled());
    }

    #[test]
    fn missing_descriptive_fields_parse_as_absent() {
        let record: WordRecord = serde_json::from_str(r#"{"id": 21}"#).unwrap();
        assert!(record.definition.is_none());
        assert!(record.part_of_speech.is_none());
        assert!(record.synonyms.is_none());
        assert!(record.examples.is_none());
        assert!(record.difficulty.is_none());
    }

    #[test]
    fn unknown_record_fields_round_trip() {
        let json = r#"{"id": 21, "word": "aid", "mastered": true}"#;
        let record: WordRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra.get("mastered"), Some(&Value::Bool(true)));

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out.get("mastered"), Some(&Value::Bool(true)));
    }

    #[test]
    fn absent_fields_are_omitted_on_write() {
        let record: WordRecord =
            serde_json::from_str(r#"{"id": 21, "word": "aid", "definition": ""}"#).unwrap();
        let out = serde_json::to_value(&record).unwrap();
        assert!(out.get("definition").is_none());
    }

    #[test]
    fn fill_from_sets_all_five_fields() {
        let mut record: WordRecord = serde_json::from_str(r#"{"id": 21}"#).unwrap();
        record.fill_from(&entry());
        assert!(record.definition.is_some());
        assert_eq!(record.part_of_speech.as_deref(), Some("noun/verb"));
        assert_eq!(record.synonyms.as_ref().map(Vec::len), Some(2));
        assert_eq!(record.examples.as_ref().map(Vec::len), Some(2));
        assert_eq!(record.difficulty.as_deref(), Some("basic"));
    }

    #[test]
    fn part_of_speech_uses_camel_case_key() {
        let json = r#"{"id": 21, "partOfSpeech": "noun"}"#;
        let record: WordRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.part_of_speech.as_deref(), Some("noun"));
    }

    #[test]
    fn difficulty_round_trip() {
        assert_eq!(Difficulty::from_str("Advanced"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::from_str("unknown"), None);
        assert_eq!(Difficulty::Intermediate.as_str(), "intermediate");
        assert!(Difficulty::Basic < Difficulty::Advanced);
    }

    #[test]
    fn document_preserves_top_level_metadata() {
        let json = r#"{"version": 3, "words": [{"id": 1, "word": "the"}]}"#;
        let doc: VocabDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.words.len(), 1);
        assert_eq!(doc.extra.get("version"), Some(&Value::from(3)));

        let out = serde_json::to_value(&doc).unwrap();
        assert_eq!(out.get("version"), Some(&Value::from(3)));
    }
}
