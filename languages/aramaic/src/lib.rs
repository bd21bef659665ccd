pub mod loader;
pub mod translator;

pub use loader::{AramaicLoader, LoadError};
pub use translator::AramaicTranslator;
