use crate::types::Language;

/// User-facing strings for one interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub notes_title: &'static str,
    pub new_note: &'static str,
    pub created: &'static str,
    pub no_notes: &'static str,
    pub note_saved: &'static str,
    pub note_deleted: &'static str,
    pub note_not_found: &'static str,
    pub search_prompt: &'static str,
    pub no_results: &'static str,
    pub examples: &'static str,
    pub aramaic: &'static str,
    pub translation: &'static str,
    pub empty_text: &'static str,
    pub server_connected: &'static str,
    pub server_disconnected: &'static str,
    pub service_unavailable: &'static str,
}

const HEBREW: Labels = Labels {
    notes_title: "הערות",
    new_note: "הערה חדשה",
    created: "נוצר:",
    no_notes: "אין הערות שמורות. לחץ על 'הערה חדשה' כדי להתחיל.",
    note_saved: "ההערה נשמרה",
    note_deleted: "ההערה נמחקה",
    note_not_found: "ההערה לא נמצאה",
    search_prompt: "חפש מילה בארמית או בעברית כדי לקבל את פירושה והגדרתה",
    no_results: "לא נמצאו תוצאות",
    examples: "דוגמאות:",
    aramaic: "ארמית",
    translation: "תרגום",
    empty_text: "יש להזין טקסט",
    server_connected: "השרת מחובר",
    server_disconnected: "השרת אינו זמין",
    service_unavailable: "השירות אינו זמין כעת",
};

const ENGLISH: Labels = Labels {
    notes_title: "Notes",
    new_note: "New Note",
    created: "Created:",
    no_notes: "No saved notes. Click 'New Note' to get started.",
    note_saved: "Note saved",
    note_deleted: "Note deleted",
    note_not_found: "Note not found",
    search_prompt: "Search for an Aramaic or Hebrew word to see its meaning and definition",
    no_results: "No results found",
    examples: "Examples:",
    aramaic: "Aramaic",
    translation: "Translation",
    empty_text: "Please enter some text",
    server_connected: "Server connected",
    server_disconnected: "Server unavailable",
    service_unavailable: "The service is currently unavailable",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::Hebrew => &HEBREW,
            Language::English => &ENGLISH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_language() {
        assert_eq!(Labels::for_language(Language::Hebrew).new_note, "הערה חדשה");
        assert_eq!(Labels::for_language(Language::English).new_note, "New Note");
    }
}
