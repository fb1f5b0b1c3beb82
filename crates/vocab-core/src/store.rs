use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::VocabDocument;
use crate::error::VocabError;

/// Read and parse the word document
pub fn load_document(path: &Path) -> Result<VocabDocument, VocabError> {
    if !path.exists() {
        return Err(VocabError::NotFound(path.display().to_string()));
    }
    let data = fs::read_to_string(path)?;
    let doc =
        serde_json::from_str(&data).map_err(|e| VocabError::Malformed(e.to_string()))?;
    Ok(doc)
}

/// Write the document back, all or nothing.
///
/// The document is serialized fully in memory, written to a temporary
/// sibling, then renamed over the original. The pre-run file survives any
/// failure before the rename completes.
pub fn save_document(path: &Path, doc: &VocabDocument) -> Result<(), VocabError> {
    let json = serde_json::to_string_pretty(doc)?;

    let tmp = tmp_path(path);
    fs::write(&tmp, json)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
