//! Terminal rendering for replies: markdown prose via `termimad`, fenced
//! code blocks highlighted via `syntect`.
//!
//! Replies arrive whole (no streaming), so the renderer formats the full
//! markdown in one pass.

use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::{LinesWithEndings, as_24_bit_terminal_escaped};
use termimad::MadSkin;

/// A chunk of a reply: prose or a fenced code block.
#[derive(Debug, PartialEq)]
enum Segment {
    Prose(String),
    Code { lang: String, body: String },
}

/// Split markdown into prose and fenced code segments.
///
/// An unclosed trailing fence is treated as a code block.
fn split_fences(markdown: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut prose = String::new();
    let mut code: Option<(String, String)> = None;

    for line in markdown.lines() {
        match &mut code {
            None if line.starts_with("```") => {
                if !prose.is_empty() {
                    segments.push(Segment::Prose(std::mem::take(&mut prose)));
                }
                let lang = line.trim_start_matches('`').trim().to_string();
                code = Some((lang, String::new()));
            }
            None => {
                prose.push_str(line);
                prose.push('\n');
            }
            Some((lang, body)) if line.starts_with("```") => {
                segments.push(Segment::Code {
                    lang: std::mem::take(lang),
                    body: std::mem::take(body),
                });
                code = None;
            }
            Some((_, body)) => {
                body.push_str(line);
                body.push('\n');
            }
        }
    }

    if let Some((lang, body)) = code {
        segments.push(Segment::Code { lang, body });
    }
    if !prose.is_empty() {
        segments.push(Segment::Prose(prose));
    }
    segments
}

/// Markdown renderer with syntax-highlighted code blocks.
pub struct ChatRenderer {
    skin: MadSkin,
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl ChatRenderer {
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Render a complete reply for the terminal.
    pub fn render_reply(&self, markdown: &str) -> String {
        let mut output = String::new();
        for segment in split_fences(markdown) {
            match segment {
                Segment::Prose(prose) => {
                    output.push_str(&self.skin.term_text(&prose).to_string());
                }
                Segment::Code { lang, body } => {
                    output.push_str(&self.highlight_code(&body, &lang));
                    output.push('\n');
                }
            }
        }
        output
    }

    /// Syntax-highlight one code block; unknown languages fall back to
    /// plain text.
    fn highlight_code(&self, code: &str, lang: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let theme = &self.theme_set.themes["base16-ocean.dark"];
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut out = String::new();
        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => out.push_str(&as_24_bit_terminal_escaped(&ranges, false)),
                Err(_) => out.push_str(line),
            }
        }
        // Reset terminal colors after the block
        out.push_str("\x1b[0m");
        out
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prose_only() {
        let segments = split_fences("hola\nmundo\n");
        assert_eq!(segments.len(), 1);
        assert!(matches!(&segments[0], Segment::Prose(p) if p.contains("hola")));
    }

    #[test]
    fn test_split_fenced_code() {
        let segments = split_fences("antes\n```rust\nfn main() {}\n```\ndespués\n");
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[1],
            Segment::Code {
                lang: "rust".to_string(),
                body: "fn main() {}\n".to_string(),
            }
        );
    }

    #[test]
    fn test_split_unclosed_fence() {
        let segments = split_fences("```python\nprint('hola')\n");
        assert_eq!(segments.len(), 1);
        assert!(matches!(
            &segments[0],
            Segment::Code { lang, .. } if lang == "python"
        ));
    }

    #[test]
    fn test_split_fence_without_language() {
        let segments = split_fences("```\ntexto\n```\n");
        assert_eq!(segments.len(), 1);
        assert!(matches!(
            &segments[0],
            Segment::Code { lang, .. } if lang.is_empty()
        ));
    }

    #[test]
    fn test_render_reply_plain_text_survives() {
        let renderer = ChatRenderer::new();
        let rendered = renderer.render_reply("hola mundo");
        assert!(rendered.contains("hola mundo"));
    }

    #[test]
    fn test_highlight_unknown_language_falls_back() {
        let renderer = ChatRenderer::new();
        let highlighted = renderer.highlight_code("x y z\n", "no-such-lang");
        assert!(highlighted.contains("x y z"));
    }
}
