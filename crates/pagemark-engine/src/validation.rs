//! Content rules for sections that arrive from outside the parser
//! (stored records, JSON payloads, hand-built lists).

use std::collections::HashSet;

use crate::error::SectionError;
use crate::models::{Section, SectionType};

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|value| !value.is_empty())
}

impl Section {
    /// Check the required fields for this section's type.
    ///
    /// Empty strings count as missing.
    pub fn validate(&self) -> Result<(), SectionError> {
        let requirement = match self.section_type {
            SectionType::Paragraph if !present(&self.header) && !present(&self.text) => {
                Some("header or text")
            }
            SectionType::Picture if !present(&self.media_url) => Some("media_url"),
            SectionType::Snippet if !present(&self.code) => Some("code"),
            SectionType::Snippet if !present(&self.language) => Some("language"),
            kind if kind.is_notice() && !present(&self.text) => Some("text"),
            _ => None,
        };

        match requirement {
            Some(requirement) => Err(SectionError::MissingField {
                kind: self.section_type,
                position: self.position,
                requirement,
            }),
            None => Ok(()),
        }
    }
}

/// Validate every section of a page and reject duplicate positions.
pub fn validate_page(sections: &[Section]) -> Result<(), SectionError> {
    let mut seen = HashSet::with_capacity(sections.len());
    for section in sections {
        section.validate()?;
        if !seen.insert(section.position) {
            return Err(SectionError::DuplicatePosition {
                position: section.position,
            });
        }
    }
    Ok(())
}
