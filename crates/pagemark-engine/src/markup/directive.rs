use std::sync::OnceLock;

use regex::Regex;

use crate::models::SectionType;

/// Every directive line starts with this.
pub const PREFIX: &str = ":::";
/// Closes the open block.
pub const END: &str = ":::end";

/// A recognised block header line: `:::<kind>[ <context>][: <header>| <header>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: SectionType,
    /// Language tag for snippets, media URL for pictures. Other kinds only
    /// keep a context when a separate header was also given.
    pub context: Option<String>,
    pub header: Option<String>,
}

fn directive_regex() -> &'static Regex {
    static DIRECTIVE_REGEX: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE_REGEX.get_or_init(|| {
        Regex::new(r"^:::(?P<kind>[A-Za-z]+)(?P<rest>[\s:].*)?$").expect("Invalid directive regex")
    })
}

/// Context token and header split out of everything after the kind name.
#[derive(Debug, PartialEq, Eq)]
struct Captures<'a> {
    context: Option<&'a str>,
    header: Option<&'a str>,
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Split the remainder of a directive line into context and header.
///
/// A colon right after the kind, at the end of the context token, or right
/// after the context token starts a colon-form header. Anything else after
/// the context token is a space-form header.
fn tokenize(rest: &str) -> Captures<'_> {
    if let Some(header) = rest.strip_prefix(':') {
        return Captures {
            context: None,
            header: non_empty(header.trim_start()),
        };
    }

    let rest = rest.trim_start();
    let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (token, after) = rest.split_at(token_end);
    let after = after.trim_start();

    if let Some(context) = token.strip_suffix(':') {
        return Captures {
            context: non_empty(context),
            header: non_empty(after),
        };
    }

    if let Some(header) = after.strip_prefix(':') {
        return Captures {
            context: non_empty(token),
            header: non_empty(header.trim_start()),
        };
    }

    Captures {
        context: non_empty(token),
        header: non_empty(after),
    }
}

/// Parse a trimmed line as a block header. Returns `None` if the line is
/// not a header (which includes unknown kinds).
pub fn parse_directive(line: &str) -> Option<Directive> {
    let caps = directive_regex().captures(line)?;
    let kind = SectionType::from_directive(&caps["kind"])?;
    let rest = caps.name("rest").map_or("", |m| m.as_str());
    let Captures { context, header } = tokenize(rest);

    // A lone token is the header for kinds that have no use for context.
    let (context, header) = match (context, header) {
        (Some(token), None) if !kind.takes_context() => (None, Some(token)),
        captures => captures,
    };

    Some(Directive {
        kind,
        context: context.map(str::to_string),
        header: header.map(str::to_string),
    })
}

pub fn is_end(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(END)
}
