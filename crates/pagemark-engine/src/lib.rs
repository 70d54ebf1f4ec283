pub mod error;
pub mod markup;
pub mod models;
pub mod validation;
pub mod wire;

// Re-export key types for easier usage
pub use error::{MarkupError, SectionError, WireError};
pub use markup::{
    MarkupOptions, parse_markup, parse_markup_with, sections_to_markup, sections_to_markup_with,
};
pub use models::{Section, SectionType, normalize_positions};
pub use validation::validate_page;
pub use wire::{sections_from_json, sections_from_json_validated, sections_to_json};
