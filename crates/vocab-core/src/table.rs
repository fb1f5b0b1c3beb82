use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::entry::VocabEntry;
use crate::error::VocabError;

// Word-list file shape: {"entries": [...]}
#[derive(Debug, Deserialize)]
struct WordListFile {
    entries: Vec<VocabEntry>,
}

/// Keyed collection of vocabulary entries, looked up by record id
#[derive(Debug, Clone, Default)]
pub struct VocabTable {
    entries: HashMap<u32, VocabEntry>,
}

impl VocabTable {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a table from entries; on duplicate ids the later entry wins
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = VocabEntry>,
    {
        let mut table = HashMap::new();
        for entry in entries {
            table.insert(entry.id, entry);
        }
        Self { entries: table }
    }

    /// Parse a word-list document from JSON
    pub fn from_json(json: &str) -> Result<Self, VocabError> {
        let file: WordListFile =
            serde_json::from_str(json).map_err(|e| VocabError::Malformed(e.to_string()))?;
        Ok(Self::from_entries(file.entries))
    }

    /// Load a word-list file from disk
    pub fn load_from_file(path: &Path) -> Result<Self, VocabError> {
        if !path.exists() {
            return Err(VocabError::NotFound(path.display().to_string()));
        }
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Get the entry for a record id
    pub fn get(&self, id: u32) -> Option<&VocabEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
