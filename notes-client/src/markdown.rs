//! Markdown rendering for terminal display.
//!
//! Notes store markdown bodies; the list and single-note views render them
//! to plain text rather than HTML. Inline formatting collapses to its text,
//! block boundaries become newlines.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Render a markdown body to plain text, one line per block.
pub fn render_plain(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::new();

    for event in parser {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => out.push('\n'),
            Event::Start(Tag::Item) => out.push_str("- "),
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock,
            ) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }

    out.trim_end().to_string()
}

/// Single-line excerpt of rendered markdown, capped at `max_chars` with an
/// ellipsis when truncated.
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    let rendered = render_plain(markdown);
    let mut collapsed = String::new();
    for word in rendered.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }

    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut truncated: String = collapsed.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_formatting_collapses_to_text() {
        let rendered = render_plain("Some *emphasized* and `coded` text");
        assert_eq!(rendered, "Some emphasized and coded text");
    }

    #[test]
    fn blocks_become_lines() {
        let rendered = render_plain("# Title\n\nFirst paragraph.\n\n- one\n- two");
        assert_eq!(rendered, "Title\nFirst paragraph.\n- one\n- two");
    }

    #[test]
    fn excerpt_is_single_line_and_capped() {
        let body = "# Head\n\nalpha beta gamma delta";
        let short = excerpt(body, 200);
        assert_eq!(short, "Head alpha beta gamma delta");
        assert!(!short.contains('\n'));

        let capped = excerpt(body, 9);
        assert_eq!(capped, "Head alph…");
    }

    #[test]
    fn empty_body_renders_empty() {
        assert_eq!(render_plain(""), "");
        assert_eq!(excerpt("", 10), "");
    }
}
