use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of content a section holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Paragraph,
    Picture,
    Snippet,
    Info,
    Warning,
    Error,
}

/// Directive names accepted after `:::`, including aliases.
///
/// Every lookup from a type name goes through this table so aliases
/// are resolved before any per-type handling.
const DIRECTIVE_NAMES: &[(&str, SectionType)] = &[
    ("info", SectionType::Info),
    ("warning", SectionType::Warning),
    ("error", SectionType::Error),
    ("snippet", SectionType::Snippet),
    ("code", SectionType::Snippet),
    ("paragraph", SectionType::Paragraph),
    ("picture", SectionType::Picture),
];

impl SectionType {
    pub const ALL: [SectionType; 6] = [
        SectionType::Paragraph,
        SectionType::Picture,
        SectionType::Snippet,
        SectionType::Info,
        SectionType::Warning,
        SectionType::Error,
    ];

    /// Canonical lowercase name, as used in markup and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Paragraph => "paragraph",
            SectionType::Picture => "picture",
            SectionType::Snippet => "snippet",
            SectionType::Info => "info",
            SectionType::Warning => "warning",
            SectionType::Error => "error",
        }
    }

    /// Resolve a directive name (case-insensitive, `code` → `snippet`).
    pub fn from_directive(name: &str) -> Option<Self> {
        DIRECTIVE_NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, kind)| kind)
    }

    /// Info, warning and error callouts.
    pub fn is_notice(self) -> bool {
        matches!(
            self,
            SectionType::Info | SectionType::Warning | SectionType::Error
        )
    }

    /// Whether the token after the directive name carries meaning of its own
    /// (language tag for snippets, media URL for pictures).
    pub fn takes_context(self) -> bool {
        matches!(self, SectionType::Snippet | SectionType::Picture)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown section type: {0}")]
pub struct UnknownSectionType(pub String);

impl FromStr for SectionType {
    type Err = UnknownSectionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_directive(s.trim()).ok_or_else(|| UnknownSectionType(s.to_string()))
    }
}

/// One structured content block of a wiki page.
///
/// Optional fields are `None` rather than empty strings. Which fields are
/// meaningful depends on `section_type`; see [`Section::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub section_type: SectionType,
    /// Zero-based ordinal among the sections of a page.
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Section {
    /// An empty section of the given type at position 0.
    pub fn new(section_type: SectionType) -> Self {
        Self {
            section_type,
            position: 0,
            header: None,
            text: None,
            code: None,
            language: None,
            media_url: None,
            caption: None,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(SectionType::Paragraph).with_text(text)
    }

    /// An info, warning or error callout.
    pub fn notice(kind: SectionType, text: impl Into<String>) -> Self {
        debug_assert!(kind.is_notice(), "{kind} is not a notice type");
        Self::new(kind).with_text(text)
    }

    pub fn snippet(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            language: Some(language.into()),
            ..Self::new(SectionType::Snippet)
        }
    }

    pub fn picture(media_url: impl Into<String>) -> Self {
        Self {
            media_url: Some(media_url.into()),
            ..Self::new(SectionType::Picture)
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}

/// Sort sections by position (stable for ties) and renumber them `0..n`.
pub fn normalize_positions(mut sections: Vec<Section>) -> Vec<Section> {
    sections.sort_by_key(|s| s.position);
    for (position, section) in sections.iter_mut().enumerate() {
        section.position = position;
    }
    sections
}
