//! Markdown Rendering
//!
//! Renders feature notes with pulldown-cmark:
//! - Tables, strikethrough, task lists
//! - Syntax highlighting for fenced code (syntect)
//!
//! Also holds the text-insertion logic behind the notes toolbar.

use pulldown_cmark::{Parser, Options, Event, CowStr, Tag, TagEnd, CodeBlockKind, html::push_html};
use std::sync::OnceLock;
use syntect::parsing::SyntaxSet;
use syntect::highlighting::{ThemeSet, Theme};
use syntect::html::highlighted_html_for_string;

/// Shown in the preview when notes are empty
const EMPTY_NOTES: &str = "_No content_";

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get("InspiredGitHub")
}

/// Render notes to HTML
pub fn parse_markdown(text: &str) -> String {
    let source = if text.trim().is_empty() { EMPTY_NOTES } else { text };
    let parser = Parser::new_ext(source, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

/// Swap fenced/indented code blocks for highlighted HTML
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) if !l.is_empty() => Some(l.to_string()),
                        _ => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let plain = || format!("<pre><code>{}</code></pre>", escape_html(code));

    let Some(theme) = get_theme() else {
        return plain();
    };
    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| plain())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Byte offset of a UTF-16 position (textarea selections count UTF-16 units)
fn byte_offset(text: &str, utf16_pos: u32) -> usize {
    let mut units = 0u32;
    for (byte, ch) in text.char_indices() {
        if units >= utf16_pos {
            return byte;
        }
        units += ch.len_utf16() as u32;
    }
    text.len()
}

fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}

/// Wrap the selection `start..end` (UTF-16 positions) in `before`/`after`.
///
/// Returns the new text and the caret position (UTF-16) to restore.
pub fn insert_markup(text: &str, start: u32, end: u32, before: &str, after: &str) -> (String, u32) {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start_byte = byte_offset(text, start);
    let end_byte = byte_offset(text, end);

    let mut out = String::with_capacity(text.len() + before.len() + after.len());
    out.push_str(&text[..start_byte]);
    out.push_str(before);
    out.push_str(&text[start_byte..end_byte]);
    out.push_str(after);
    out.push_str(&text[end_byte..]);

    let caret = (end + utf16_len(before) + utf16_len(after)).min(utf16_len(&out));
    (out, caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = parse_markdown("# Title\n\n- one\n- two");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_empty_notes_placeholder() {
        assert_eq!(parse_markdown("   ").trim(), "<p><em>No content</em></p>");
    }

    #[test]
    fn test_task_lists_enabled() {
        let html = parse_markdown("- [x] shipped");
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_code_block_is_highlighted() {
        let html = parse_markdown("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_insert_wraps_selection() {
        let (text, caret) = insert_markup("make it bold", 8, 12, "**", "**");
        assert_eq!(text, "make it **bold**");
        assert_eq!(caret, 16);
    }

    #[test]
    fn test_insert_prefix_at_caret() {
        let (text, caret) = insert_markup("Heading", 0, 0, "# ", "");
        assert_eq!(text, "# Heading");
        assert_eq!(caret, 2);
    }

    #[test]
    fn test_insert_handles_multibyte_text() {
        // "é" is one UTF-16 unit but two bytes
        let (text, _) = insert_markup("café menu", 5, 9, "[", "](url)");
        assert_eq!(text, "café [menu](url)");
    }
}
