//! Markdown rendering for summaries and details.

use pulldown_cmark::{Options, Parser, html};

/// Renders Markdown text to HTML.
///
/// Treated as an opaque pure function by the resolver. Any
/// `Fn(&str) -> String` is a renderer, which keeps tests free of HTML.
pub trait Render {
    fn render(&self, markdown: &str) -> String;
}

impl<F> Render for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, markdown: &str) -> String {
        self(markdown)
    }
}

/// CommonMark renderer backed by `pulldown-cmark`.
#[derive(Clone, Copy, Debug)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_FOOTNOTES,
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for MarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paragraph() {
        let html = MarkdownRenderer::new().render("Adds *values*.");
        assert_eq!(html, "<p>Adds <em>values</em>.</p>\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(MarkdownRenderer::new().render(""), "");
    }

    #[test]
    fn test_closure_renderer() {
        let upper = |text: &str| text.to_uppercase();
        assert_eq!(upper.render("abc"), "ABC");
    }
}
