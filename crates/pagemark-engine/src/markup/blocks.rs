use log::debug;

use super::MarkupOptions;
use super::directive::Directive;
use crate::error::MarkupError;
use crate::models::{Section, SectionType};

/// A `:::kind ... :::end` region collected by the builder.
#[derive(Debug, Clone)]
pub struct Block<'a> {
    pub directive: Directive,
    /// Line number of the header line.
    pub line: usize,
    pub body: Vec<&'a str>,
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl Block<'_> {
    /// Body lines joined, with trailing whitespace and blank lines removed.
    fn body_text(&self) -> String {
        self.body.join("\n").trim_end().to_string()
    }

    fn missing(&self, requirement: &'static str) -> MarkupError {
        MarkupError::MissingContent {
            kind: self.directive.kind,
            requirement,
            line: self.line,
        }
    }

    /// Convert a closed block into a section.
    ///
    /// Pictures without a URL and empty paragraph blocks are dropped
    /// (`Ok(None)`); empty snippets and notices are errors.
    pub fn into_section(self, options: &MarkupOptions) -> Result<Option<Section>, MarkupError> {
        let body = self.body_text();

        match self.directive.kind {
            SectionType::Snippet => {
                if body.trim().is_empty() {
                    return Err(self.missing("code"));
                }
                let Directive {
                    context, header, ..
                } = self.directive;
                Ok(Some(Section {
                    header,
                    code: Some(body),
                    language: Some(context.unwrap_or_else(|| options.default_language.clone())),
                    ..Section::new(SectionType::Snippet)
                }))
            }
            SectionType::Picture => {
                let from_body = body
                    .lines()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .map(str::to_string);
                let Directive {
                    context, header, ..
                } = self.directive;
                // Extra body lines are a description only when the URL came
                // from the header line.
                let text = context.as_ref().and_then(|_| non_empty(&body));
                let Some(media_url) = context.or(from_body) else {
                    debug!("dropping picture block on line {} without a media url", self.line);
                    return Ok(None);
                };
                Ok(Some(Section {
                    media_url: Some(media_url),
                    caption: header,
                    text,
                    ..Section::new(SectionType::Picture)
                }))
            }
            SectionType::Paragraph => {
                let text = non_empty(body.trim());
                let header = self.directive.header;
                if header.is_none() && text.is_none() {
                    debug!("dropping empty paragraph block on line {}", self.line);
                    return Ok(None);
                }
                Ok(Some(Section {
                    header,
                    text,
                    ..Section::new(SectionType::Paragraph)
                }))
            }
            kind => {
                let text = non_empty(body.trim())
                    .or_else(|| self.directive.header.clone())
                    .or_else(|| self.directive.context.clone());
                let Some(text) = text else {
                    return Err(self.missing("text"));
                };
                Ok(Some(Section {
                    header: self.directive.header,
                    text: Some(text),
                    ..Section::new(kind)
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block<'a>(
        kind: SectionType,
        context: Option<&str>,
        header: Option<&str>,
        body: &[&'a str],
    ) -> Block<'a> {
        Block {
            directive: Directive {
                kind,
                context: context.map(str::to_string),
                header: header.map(str::to_string),
            },
            line: 4,
            body: body.to_vec(),
        }
    }

    fn convert(block: Block<'_>) -> Result<Option<Section>, MarkupError> {
        block.into_section(&MarkupOptions::default())
    }

    #[test]
    fn snippet_keeps_leading_indentation_and_trims_trailing_blank_lines() {
        let section = convert(block(
            SectionType::Snippet,
            Some("rust"),
            None,
            &["    let x = 1;", "", "x", "", "   "],
        ))
        .unwrap()
        .unwrap();

        assert_eq!(section.code.as_deref(), Some("    let x = 1;\n\nx"));
        assert_eq!(section.language.as_deref(), Some("rust"));
        assert_eq!(section.header, None);
    }

    #[test]
    fn snippet_language_falls_back_to_configured_default() {
        let options = MarkupOptions {
            default_language: "plaintext".to_string(),
        };
        let section = block(SectionType::Snippet, None, None, &["echo hi"])
            .into_section(&options)
            .unwrap()
            .unwrap();

        assert_eq!(section.language.as_deref(), Some("plaintext"));
    }

    #[test]
    fn blank_snippet_reports_opening_line() {
        let err = convert(block(SectionType::Snippet, Some("python"), None, &["", "  "]))
            .unwrap_err();

        assert_eq!(
            err,
            MarkupError::MissingContent {
                kind: SectionType::Snippet,
                requirement: "code",
                line: 4,
            }
        );
    }

    #[test]
    fn picture_url_from_first_non_blank_body_line_discards_description() {
        let section = convert(block(
            SectionType::Picture,
            None,
            Some("Caption"),
            &["", "  https://x/a.png  ", "Not kept"],
        ))
        .unwrap()
        .unwrap();

        assert_eq!(section.media_url.as_deref(), Some("https://x/a.png"));
        assert_eq!(section.caption.as_deref(), Some("Caption"));
        assert_eq!(section.text, None);
    }

    #[test]
    fn picture_with_context_url_keeps_body_as_description() {
        let section = convert(block(
            SectionType::Picture,
            Some("https://x/a.png"),
            None,
            &["A longer description"],
        ))
        .unwrap()
        .unwrap();

        assert_eq!(section.media_url.as_deref(), Some("https://x/a.png"));
        assert_eq!(section.text.as_deref(), Some("A longer description"));
        assert_eq!(section.caption, None);
    }

    #[test]
    fn picture_without_any_url_is_dropped() {
        let result = convert(block(SectionType::Picture, None, Some("Cat"), &["", "  "]));
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn notice_text_falls_back_to_header_then_context() {
        let from_header = convert(block(SectionType::Info, None, Some("Title"), &[]))
            .unwrap()
            .unwrap();
        assert_eq!(from_header.text.as_deref(), Some("Title"));
        assert_eq!(from_header.header.as_deref(), Some("Title"));

        let from_body = convert(block(SectionType::Error, Some("ctx"), Some("Title"), &["  Body  "]))
            .unwrap()
            .unwrap();
        assert_eq!(from_body.text.as_deref(), Some("Body"));
    }

    #[test]
    fn empty_notice_is_an_error() {
        let err = convert(block(SectionType::Warning, None, None, &["   "])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "warning blocks require text (block opened on line 4)"
        );
    }

    #[test]
    fn paragraph_with_header_only_has_no_text() {
        let section = convert(block(SectionType::Paragraph, None, Some("Intro"), &[""]))
            .unwrap()
            .unwrap();

        assert_eq!(section.header.as_deref(), Some("Intro"));
        assert_eq!(section.text, None);
    }

    #[test]
    fn empty_paragraph_is_dropped() {
        assert_eq!(
            convert(block(SectionType::Paragraph, None, None, &["", " "])),
            Ok(None)
        );
    }
}
