//! Markdown Copy Rendering
//!
//! Renders page copy with pulldown-cmark. Differences from plain CommonMark:
//! - Soft line breaks become `<br />`, so headings can be split across lines
//! - Raw HTML in the source is escaped rather than passed through

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

/// Render markdown to block HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Render markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .filter(|s| !s.contains("<p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_SMART_PUNCTUATION
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    parser
        .map(|event| match event {
            Event::SoftBreak => Event::Html(CowStr::Borrowed("<br />")),
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_soft_break_becomes_br() {
        let html = parse_markdown_inline("Born from\n*a single conviction.*");
        assert_eq!(html, "Born from<br /><em>a single conviction.</em>");
    }

    #[test]
    fn test_story_renders_three_paragraphs() {
        let html = parse_markdown(content::STORY);
        assert_eq!(html.matches("<p>").count(), 3);
        assert!(html.contains("<em>Bliksem</em>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown_inline("hello <script>x</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_multi_paragraph_is_not_stripped() {
        let html = parse_markdown_inline("one\n\ntwo");
        assert!(html.starts_with("<p>one</p>"));
    }
}
