mod note;
mod store;

pub use note::{Note, format_date, format_date_in};
pub use store::{NoteStore, NotesError};
