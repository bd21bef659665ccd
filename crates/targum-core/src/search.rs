use crate::dictionary::{Dictionary, DictionaryEntry};

/// Return entries whose source or target term contains `query`.
///
/// Matching is case-sensitive substring containment and keeps store order.
/// A blank query yields no entries.
pub fn search<D: Dictionary + ?Sized>(query: &str, dictionary: &D) -> Vec<DictionaryEntry> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    dictionary
        .all_entries()
        .iter()
        .filter(|e| e.source_term.contains(query) || e.target_term.contains(query))
        .cloned()
        .collect()
}
