use super::MarkupOptions;
use super::directive::END;
use crate::models::{Section, SectionType};

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

fn header_suffix(header: Option<&str>) -> String {
    header.map(|h| format!(": {h}")).unwrap_or_default()
}

/// Render one section as a `:::kind ... :::end` block.
fn render_block(section: &Section, options: &MarkupOptions) -> String {
    match section.section_type {
        SectionType::Snippet => {
            let language =
                non_empty(&section.language).unwrap_or(options.default_language.as_str());
            let header = header_suffix(non_empty(&section.header));
            let code = section.code.as_deref().unwrap_or_default();
            format!(":::code {language}{header}\n{code}\n{END}")
        }
        SectionType::Picture => {
            let url = section.media_url.as_deref().unwrap_or_default();
            let header = header_suffix(non_empty(&section.caption).or(non_empty(&section.header)));
            let body = non_empty(&section.text)
                .map(|text| format!("\n{text}"))
                .unwrap_or_default();
            format!(":::picture {url}{header}{body}\n{END}")
        }
        kind => {
            let header = header_suffix(non_empty(&section.header));
            let text = section.text.as_deref().unwrap_or_default();
            format!(":::{kind}{header}\n{text}\n{END}")
        }
    }
}

pub fn render(sections: &[Section], options: &MarkupOptions) -> String {
    let mut ordered: Vec<&Section> = sections.iter().collect();
    ordered.sort_by_key(|section| section.position);

    let blocks: Vec<String> = ordered
        .into_iter()
        .map(|section| render_block(section, options))
        .collect();
    blocks.join("\n\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_one(section: Section) -> String {
        render(&[section], &MarkupOptions::default())
    }

    #[test]
    fn empty_list_renders_empty_string() {
        assert_eq!(render(&[], &MarkupOptions::default()), "");
    }

    #[test]
    fn snippet_uses_code_alias_and_default_language() {
        let section = Section {
            language: None,
            ..Section::snippet("ls", "unused")
        };
        assert_eq!(render_one(section), ":::code text\nls\n:::end");
    }

    #[test]
    fn picture_prefers_caption_over_header() {
        let section = Section::picture("https://x/a.png")
            .with_header("Header")
            .with_caption("Caption");
        assert_eq!(render_one(section), ":::picture https://x/a.png: Caption\n:::end");
    }

    #[test]
    fn picture_falls_back_to_header_and_appends_text() {
        let section = Section::picture("https://x/a.png")
            .with_header("Header")
            .with_text("Description");
        assert_eq!(
            render_one(section),
            ":::picture https://x/a.png: Header\nDescription\n:::end"
        );
    }

    #[test]
    fn empty_header_is_omitted() {
        let section = Section::notice(SectionType::Info, "Body").with_header("");
        assert_eq!(render_one(section), ":::info\nBody\n:::end");
    }

    #[test]
    fn missing_text_leaves_an_empty_body_line() {
        let section = Section::new(SectionType::Paragraph).with_header("Intro");
        assert_eq!(render_one(section), ":::paragraph: Intro\n\n:::end");
    }

    #[test]
    fn does_not_reorder_the_callers_list() {
        let sections = vec![Section::paragraph("b").at(1), Section::paragraph("a").at(0)];
        let _ = render(&sections, &MarkupOptions::default());
        assert_eq!(sections[0].text.as_deref(), Some("b"));
    }
}
