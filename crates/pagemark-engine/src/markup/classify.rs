use super::directive::{Directive, PREFIX, is_end, parse_directive};

/// What a single line is, judged on its own trimmed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A block header line.
    Directive(Directive),
    /// `:::end`
    End,
    /// Starts with `:::` but is neither a header nor `:::end`.
    Unknown,
    /// Anything else.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of markup parsing: each line is classified without
/// reference to whether a block is open. Inside a block only `End` is
/// significant; every other line is body text.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The line as written, without its terminator.
    pub raw: &'a str,
    pub kind: LineKind,
}

pub struct MarkupLineClassifier;

impl MarkupLineClassifier {
    pub fn classify<'a>(&self, number: usize, raw: &'a str) -> LineClass<'a> {
        let trimmed = raw.trim();
        let kind = if is_end(trimmed) {
            LineKind::End
        } else if let Some(directive) = parse_directive(trimmed) {
            LineKind::Directive(directive)
        } else if trimmed.starts_with(PREFIX) {
            LineKind::Unknown
        } else {
            LineKind::Text
        };

        LineClass { number, raw, kind }
    }
}

/// Normalise `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionType;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_each_kind_of_line() {
        let classifier = MarkupLineClassifier;

        assert!(matches!(
            classifier.classify(1, "  :::code rust  ").kind,
            LineKind::Directive(Directive {
                kind: SectionType::Snippet,
                ..
            })
        ));
        assert_eq!(classifier.classify(2, ":::End").kind, LineKind::End);
        assert_eq!(classifier.classify(3, ":::table").kind, LineKind::Unknown);
        assert_eq!(classifier.classify(4, "plain :::text").kind, LineKind::Text);
        assert_eq!(classifier.classify(5, "").kind, LineKind::Text);
    }

    #[test]
    fn keeps_raw_line_and_number() {
        let class = MarkupLineClassifier.classify(7, "    indented code");
        assert_eq!(class.number, 7);
        assert_eq!(class.raw, "    indented code");
    }

    #[test]
    fn normalizes_all_line_endings() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }
}
