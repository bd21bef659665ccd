pub mod dictionary;
pub mod error;
pub mod search;
pub mod translate;

pub use dictionary::{Dictionary, DictionaryEntry, DictionaryMetadata, DictionaryStore};
pub use error::CoreError;
pub use search::search;
pub use translate::{
    DEFAULT_FALLBACK_PHRASE, Direction, SubstitutionTranslator, TranslationRequest,
    TranslationResult,
};
