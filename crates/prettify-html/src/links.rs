//! Comment link formatting.
//!
//! Replaces ` [text](url)` patterns inside comment span text with anchor
//! elements opening in a new browsing context. Applied only to fully-formed
//! comment spans, and only when enabled in configuration.

/// Rewrite every ` [text](url)` occurrence in a comment's text.
///
/// The display text may not contain `[` or `]`; the href may not contain
/// whitespace or parentheses. Malformed candidates are copied through
/// untouched, and scanning resumes on the unprocessed tail after each
/// replacement.
pub fn format_links(comment: &str) -> String {
    let chars: Vec<char> = comment.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ' ' {
            if let Some((text, href, next)) = match_link(&chars, i) {
                out.push(' ');
                out.push_str("<a href=\"");
                out.push_str(&href);
                out.push_str("\" target=\"_blank\">");
                out.push_str(&text);
                out.push_str("</a>");
                i = next;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Try to match `[text](href)` immediately after the space at `space`.
/// Returns the captured segments and the index just past the closing `)`.
fn match_link(chars: &[char], space: usize) -> Option<(String, String, usize)> {
    let mut i = space + 1;
    if chars.get(i) != Some(&'[') {
        return None;
    }
    i += 1;

    let mut text = String::new();
    loop {
        match *chars.get(i)? {
            ']' => break,
            '[' => return None,
            c => {
                text.push(c);
                i += 1;
            }
        }
    }
    i += 1;

    if chars.get(i) != Some(&'(') {
        return None;
    }
    i += 1;

    let mut href = String::new();
    loop {
        match *chars.get(i)? {
            ')' => break,
            '(' => return None,
            c if c.is_whitespace() => return None,
            c => {
                href.push(c);
                i += 1;
            }
        }
    }

    Some((text, href, i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_link() {
        assert_eq!(
            format_links("// see [docs](http://x.test)"),
            "// see <a href=\"http://x.test\" target=\"_blank\">docs</a>"
        );
    }

    #[test]
    fn test_display_text_may_contain_spaces() {
        assert_eq!(
            format_links("/* read [the guide](http://g.test) */"),
            "/* read <a href=\"http://g.test\" target=\"_blank\">the guide</a> */"
        );
    }

    #[test]
    fn test_multiple_links_rewritten() {
        let out = format_links("// [a](http://a.test) and [b](http://b.test)");
        assert_eq!(
            out,
            "// <a href=\"http://a.test\" target=\"_blank\">a</a> and \
             <a href=\"http://b.test\" target=\"_blank\">b</a>"
        );
    }

    #[test]
    fn test_no_leading_space_no_match() {
        let text = "//[docs](http://x.test)";
        assert_eq!(format_links(text), text);
    }

    #[test]
    fn test_unclosed_bracket_untouched() {
        let text = "// see [docs(http://x.test)";
        assert_eq!(format_links(text), text);
    }

    #[test]
    fn test_nested_bracket_untouched() {
        let text = "// see [do[cs]](http://x.test)";
        assert_eq!(format_links(text), text);
    }

    #[test]
    fn test_whitespace_in_href_untouched() {
        let text = "// see [docs](http://x .test)";
        assert_eq!(format_links(text), text);
    }

    #[test]
    fn test_missing_paren_untouched() {
        let text = "// see [docs] http://x.test";
        assert_eq!(format_links(text), text);
    }

    #[test]
    fn test_plain_comment_unchanged() {
        let text = "// nothing to do here";
        assert_eq!(format_links(text), text);
    }

    #[test]
    fn test_tail_after_failed_match_still_scanned() {
        let out = format_links("// [bad and [good](http://x.test)");
        assert_eq!(
            out,
            "// [bad and <a href=\"http://x.test\" target=\"_blank\">good</a>"
        );
    }
}
