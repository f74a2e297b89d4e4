//! Span rendering and line assembly.
//!
//! Converts scanned tokens into `<span class="…">` markup, escapes the
//! angle brackets that would otherwise break the fragment, and wraps each
//! line in a list item.

use prettify_lexer::{Token, TokenKind};

use crate::links;

/// Render one line's tokens as concatenated span elements.
pub fn render_line(tokens: &[Token], comment_links: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        let mut text = escape(&token.text);
        if comment_links && token.kind == TokenKind::Comment {
            text = links::format_links(&text);
        }
        out.push_str("<span class=\"");
        out.push_str(token.kind.css_class());
        out.push_str("\">");
        out.push_str(&text);
        out.push_str("</span>");
    }
    out
}

/// Wrap a rendered line in its list item.
pub fn wrap_line(line_markup: &str) -> String {
    let mut out = String::with_capacity(line_markup.len() + 9);
    out.push_str("<li>");
    out.push_str(line_markup);
    out.push_str("</li>");
    out
}

/// Replace literal `<` and `>` with HTML entities. Token text is copied
/// into the fragment verbatim otherwise.
fn escape(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
