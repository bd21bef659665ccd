pub mod labels;
pub mod types;

pub use labels::Labels;
pub use types::{Language, TextDirection};
