use crate::entry::VocabDocument;
use crate::table::VocabTable;

/// Summary of one merge pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Records that received the five descriptive fields this pass
    pub updated: usize,
    /// Records that already carried a definition and were left alone
    pub already_filled: usize,
    /// Ids of unfilled records with no entry in the table, in document order
    pub unmatched: Vec<u32>,
}

/// Fill unfilled word records from the lookup table, in document order.
///
/// A record with a definition is never touched, so running the merge again
/// over an already-populated document updates nothing.
pub fn merge_document(doc: &mut VocabDocument, table: &VocabTable) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for record in &mut doc.words {
        if !record.is_unfilled() {
            outcome.already_filled += 1;
            continue;
        }

        match table.get(record.id) {
            Some(entry) => {
                record.fill_from(entry);
                outcome.updated += 1;
            }
            None => {
                tracing::debug!("no vocabulary entry for word id {}", record.id);
                outcome.unmatched.push(record.id);
            }
        }
    }

    outcome
}
