//! JSON encoding of section lists, in the field layout the page storage
//! API uses (`section_type`, `media_url`, ...).

use crate::error::WireError;
use crate::models::{Section, normalize_positions};
use crate::validation::validate_page;

/// Decode a JSON array of sections, ordered and renumbered by position.
pub fn sections_from_json(json: &str) -> Result<Vec<Section>, WireError> {
    let sections: Vec<Section> = serde_json::from_str(json)?;
    Ok(normalize_positions(sections))
}

/// Like [`sections_from_json`], but reject sections that break their
/// type's content rules or share a position.
pub fn sections_from_json_validated(json: &str) -> Result<Vec<Section>, WireError> {
    let sections: Vec<Section> = serde_json::from_str(json)?;
    validate_page(&sections)?;
    Ok(normalize_positions(sections))
}

pub fn sections_to_json(sections: &[Section], pretty: bool) -> Result<String, WireError> {
    let json = if pretty {
        serde_json::to_string_pretty(sections)?
    } else {
        serde_json::to_string(sections)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SectionError;
    use crate::models::SectionType;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_and_renumbers_by_position() {
        let json = r#"[
            {"section_type": "snippet", "position": 5, "code": "ls", "language": "shell"},
            {"section_type": "paragraph", "position": 2, "text": "Intro"}
        ]"#;

        let sections = sections_from_json(json).unwrap();

        assert_eq!(
            sections,
            vec![
                Section::paragraph("Intro").at(0),
                Section::snippet("ls", "shell").at(1),
            ]
        );
    }

    #[test]
    fn rejects_unknown_section_type() {
        let err = sections_from_json(r#"[{"section_type": "table", "position": 0}]"#).unwrap_err();
        assert!(matches!(err, WireError::Json(_)));
    }

    #[test]
    fn rejects_negative_position() {
        let err = sections_from_json(r#"[{"section_type": "info", "position": -1, "text": "x"}]"#)
            .unwrap_err();
        assert!(matches!(err, WireError::Json(_)));
    }

    #[test]
    fn validated_decode_reports_rule_violations() {
        let err = sections_from_json_validated(r#"[{"section_type": "picture", "position": 0}]"#)
            .unwrap_err();
        assert!(matches!(
            err,
            WireError::Invalid(SectionError::MissingField {
                kind: SectionType::Picture,
                ..
            })
        ));
        assert_eq!(err.to_string(), "picture section at position 0 requires media_url");
    }

    #[test]
    fn compact_encoding_omits_absent_fields() {
        let sections = vec![Section::notice(SectionType::Info, "Heads up")];
        assert_eq!(
            sections_to_json(&sections, false).unwrap(),
            r#"[{"section_type":"info","position":0,"text":"Heads up"}]"#
        );
    }
}
