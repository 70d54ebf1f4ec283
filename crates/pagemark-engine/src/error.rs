use crate::models::SectionType;

/// Errors raised while parsing section markup.
///
/// Parsing stops at the first error; there is never a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("Unknown directive on line {line}: {directive}")]
    UnknownDirective { line: usize, directive: String },

    #[error("{kind} blocks require {requirement} (block opened on line {line})")]
    MissingContent {
        kind: SectionType,
        requirement: &'static str,
        line: usize,
    },
}

impl MarkupError {
    /// 1-based line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            MarkupError::UnknownDirective { line, .. } | MarkupError::MissingContent { line, .. } => {
                *line
            }
        }
    }
}

/// A stored section that breaks the rules for its type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    #[error("{kind} section at position {position} requires {requirement}")]
    MissingField {
        kind: SectionType,
        position: usize,
        requirement: &'static str,
    },

    #[error("more than one section at position {position}")]
    DuplicatePosition { position: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("Invalid section JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SectionError),
}
