use std::path::Path;

use vocab_core::error::VocabError;
use vocab_core::table::VocabTable;

pub struct AcademicWordList;

impl AcademicWordList {
    /// Load the embedded word list
    pub fn load_embedded() -> Result<VocabTable, VocabError> {
        let json = include_str!("../data/academic.json");
        tracing::info!("Loading embedded academic word list...");
        let table = VocabTable::from_json(json)?;
        tracing::info!("Loaded {} vocabulary entries", table.len());
        Ok(table)
    }

    /// Load a word list from file path
    pub fn load_from_file(path: &Path) -> Result<VocabTable, VocabError> {
        tracing::info!("Loading word list from file: {}", path.display());
        let table = VocabTable::load_from_file(path)?;
        tracing::info!("Loaded {} vocabulary entries from file", table.len());
        Ok(table)
    }
}
