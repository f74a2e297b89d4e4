//! Token scanner.
//!
//! Walks one prepared line left to right, dispatching on the current
//! character to construct-specific sub-scanners (string, comment,
//! regex-or-division, number, identifier, bracket, punctuation, whitespace,
//! misc) and emitting classified tokens.
//!
//! The only state that crosses lines is `comment_open`: whether the line
//! ended inside an unterminated block comment. It is threaded value-in /
//! value-out through [`Scanner::scan`], never stored globally, so concurrent
//! and sequential calls cannot interfere.
//!
//! The scanner never fails. Unterminated strings and comments clamp to the
//! end of the line, a slash that cannot be proven to start a regex literal
//! degrades to a division operator, and unrecognized characters become
//! misc tokens.

use crate::keywords::Catalog;
use crate::token::{Token, TokenKind};

/// Operator characters, each emitted as its own single-character span.
const OPERATORS: &[char] = &[
    '*', '%', '+', '-', '<', '>', '&', '^', '|', '=', '!', '~', '?',
];

/// Characters after which a `/` cannot be a division: a value cannot
/// immediately precede it. Operators, punctuation, and open brackets.
const PRE_REGEX: &[char] = &[
    '*', '%', '+', '-', '<', '>', '&', '^', '|', '=', '!', '~', '?',
    ',', ';', ':', '.', '{', '[', '(',
];

/// Regex flag characters, matched case-insensitively.
const REGEX_FLAGS: &[char] = &['g', 'i', 'm', 'y'];

/// Result of scanning one line: its tokens plus the block-comment flag to
/// carry into the next line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineScan {
    pub tokens: Vec<Token>,
    pub comment_open: bool,
}

/// Line scanner.
///
/// One instance per line; all state is owned by the call. The keyword
/// catalog is the only shared input and is read-only.
pub struct Scanner<'a> {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
    comment_open: bool,
    catalog: &'a Catalog,
}

impl<'a> Scanner<'a> {
    /// Tokenize one prepared line.
    ///
    /// `comment_open` is the flag carried from the previous line; the
    /// returned flag must be carried into the next.
    pub fn scan(line: &str, comment_open: bool, catalog: &'a Catalog) -> LineScan {
        let mut scanner = Scanner {
            chars: line.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
            comment_open,
            catalog,
        };
        scanner.run();
        LineScan {
            tokens: scanner.tokens,
            comment_open: scanner.comment_open,
        }
    }

    fn run(&mut self) {
        if self.comment_open {
            self.resume_comment();
        }
        while self.pos < self.chars.len() {
            self.dispatch();
        }
    }

    /// Choose a sub-scanner from the current character.
    fn dispatch(&mut self) {
        let ch = self.chars[self.pos];
        match ch {
            '"' | '\'' => self.scan_string(),
            ' ' => self.scan_spaces(),
            '/' => self.scan_slash(),
            '{' | '}' | '[' | ']' | '(' | ')' => self.push_single(TokenKind::Bracket),
            ',' => self.push_single(TokenKind::Comma),
            ';' => self.push_single(TokenKind::Semicolon),
            ':' => self.push_single(TokenKind::Colon),
            '.' => self.push_single(TokenKind::Period),
            '0'..='9' => self.scan_number(),
            c if OPERATORS.contains(&c) => self.push_single(TokenKind::Operator),
            c if is_ident_start(c) => self.scan_identifier(),
            _ => self.push_single(TokenKind::Misc),
        }
    }

    // --- Comments ---

    /// Entered when the previous line left a block comment open: comment
    /// scanning resumes at column 0 instead of the dispatch table. A `*/`
    /// at the very start closes after two characters; an absent close keeps
    /// the whole line inside the comment and leaves the flag set.
    fn resume_comment(&mut self) {
        let len = self.chars.len();
        if len == 0 {
            return; // blank line inside the comment, flag stays set
        }
        match self.find_comment_close(0) {
            Some(end) => {
                self.push(TokenKind::Comment, 0, end);
                self.comment_open = false;
                self.pos = end + 1;
            }
            None => {
                self.push(TokenKind::Comment, 0, len - 1);
                self.pos = len;
            }
        }
    }

    /// Index of the `/` of the next `*/` at or after `from`.
    fn find_comment_close(&self, from: usize) -> Option<usize> {
        let len = self.chars.len();
        let mut i = from;
        while i + 1 < len {
            if self.chars[i] == '*' && self.chars[i + 1] == '/' {
                return Some(i + 1);
            }
            i += 1;
        }
        None
    }

    /// `/` dispatcher: line comment, block comment, or regex-vs-division.
    fn scan_slash(&mut self) {
        let len = self.chars.len();
        match self.chars.get(self.pos + 1).copied() {
            Some('/') => {
                // Line comment spans to end of line.
                self.push(TokenKind::Comment, self.pos, len - 1);
                self.pos = len;
            }
            Some('*') => match self.find_comment_close(self.pos + 2) {
                Some(end) => {
                    self.push(TokenKind::Comment, self.pos, end);
                    self.pos = end + 1;
                }
                None => {
                    self.push(TokenKind::Comment, self.pos, len - 1);
                    self.comment_open = true;
                    self.pos = len;
                }
            },
            _ => self.scan_regex_or_division(),
        }
    }

    // --- Regex vs. division ---

    /// A `/` not opening a comment. Treated as a regex literal only when the
    /// context qualifies, a closing `/` exists on this line, and the body
    /// constructs as a real regular expression; otherwise it is a division
    /// operator.
    fn scan_regex_or_division(&mut self) {
        if !self.pre_regex_context() {
            return self.push_single(TokenKind::Operator);
        }
        let Some(close) = self.find_regex_close() else {
            return self.push_single(TokenKind::Operator);
        };
        let body: String = self.chars[self.pos + 1..close].iter().collect();
        if regex::Regex::new(&body).is_err() {
            return self.push_single(TokenKind::Operator);
        }
        let end = self.consume_flags(close);
        self.push(TokenKind::Regex, self.pos, end);
        self.pos = end + 1;
    }

    /// Whether the nearest preceding non-space character permits a regex
    /// literal here. A start-of-line slash always qualifies. The letters
    /// `n`, `e`, `f` stand in for the tails of `return`, `case`, `typeof`,
    /// `instanceof`, and `in` — a known approximation kept for
    /// compatibility: an identifier that merely ends in one of those
    /// letters also qualifies.
    fn pre_regex_context(&self) -> bool {
        let mut i = self.pos;
        while i > 0 {
            i -= 1;
            let c = self.chars[i];
            if c == ' ' {
                continue;
            }
            return PRE_REGEX.contains(&c) || matches!(c, 'n' | 'e' | 'f');
        }
        true
    }

    /// Index of the first unescaped `/` after the opening delimiter.
    fn find_regex_close(&self) -> Option<usize> {
        let len = self.chars.len();
        let mut i = self.pos + 1;
        while i < len {
            match self.chars[i] {
                '\\' => i += 2,
                '/' => return Some(i),
                _ => i += 1,
            }
        }
        None
    }

    /// Consume trailing regex flags: up to 4, case-insensitive, each flag
    /// at most once. Returns the last consumed index.
    fn consume_flags(&self, close: usize) -> usize {
        let len = self.chars.len();
        let mut end = close;
        let mut seen = [false; REGEX_FLAGS.len()];
        while end + 1 < len {
            let c = self.chars[end + 1].to_ascii_lowercase();
            let Some(idx) = REGEX_FLAGS.iter().position(|f| *f == c) else {
                break;
            };
            if seen[idx] {
                break;
            }
            seen[idx] = true;
            end += 1;
        }
        end
    }

    // --- Strings ---

    /// From an opening quote to a matching unescaped quote, or end of line
    /// when unterminated. `\` skips the next character without
    /// interpretation.
    fn scan_string(&mut self) {
        let quote = self.chars[self.pos];
        let len = self.chars.len();
        let start = self.pos;
        let mut i = start + 1;
        while i < len {
            match self.chars[i] {
                '\\' => i += 2,
                c if c == quote => break,
                _ => i += 1,
            }
        }
        let end = i.min(len - 1);
        self.push(TokenKind::Str, start, end);
        self.pos = end + 1;
    }

    // --- Numbers ---

    /// `0x`/`0X` selects the hexadecimal digit set; either way the token is
    /// consumed as-is with no well-formedness check.
    fn scan_number(&mut self) {
        let len = self.chars.len();
        let start = self.pos;
        let hex = self.chars[start] == '0'
            && matches!(self.chars.get(start + 1).copied(), Some('x' | 'X'));
        let mut i = if hex { start + 2 } else { start + 1 };
        while i < len {
            let c = self.chars[i];
            let keep = if hex {
                c.is_ascii_hexdigit() || c == 'x' || c == 'X' || c == '.'
            } else {
                c.is_ascii_digit() || c == '.'
            };
            if !keep {
                break;
            }
            i += 1;
        }
        self.push(TokenKind::Number, start, i - 1);
        self.pos = i;
    }

    // --- Identifiers, keywords, property chains ---

    fn scan_identifier(&mut self) {
        let start = self.pos;
        let end = self.ident_end(start);
        let name = self.text(start, end);
        let kind = self.keyword_kind(&name, end);
        self.push(kind, start, end);
        self.pos = end + 1;
        self.scan_property_chain(name);
    }

    /// Catalog classification, with one special case: `function`
    /// immediately followed by `(` (optionally through one space) is always
    /// reserved, never defining.
    fn keyword_kind(&self, name: &str, name_end: usize) -> TokenKind {
        if name == "function" && self.paren_follows(name_end) {
            return TokenKind::ResKey;
        }
        match self.catalog.get(name) {
            Some(entry) => entry.kind().token_kind(),
            None => TokenKind::Identifier,
        }
    }

    fn paren_follows(&self, name_end: usize) -> bool {
        matches!(
            (
                self.chars.get(name_end + 1).copied(),
                self.chars.get(name_end + 2).copied(),
            ),
            (Some('('), _) | (Some(' '), Some('(')),
        )
    }

    /// Dotted-access resolution. Each `.identifier` pair is classified
    /// against the preceding name's property table: a recognized property
    /// takes the parent's category, anything else is a plain identifier.
    /// The chain recurses on each property name, so
    /// `window.document.title` classifies fully.
    fn scan_property_chain(&mut self, mut parent: String) {
        loop {
            if self.chars.get(self.pos) != Some(&'.') {
                return;
            }
            match self.chars.get(self.pos + 1) {
                Some(&c) if is_ident_start(c) => {}
                _ => return,
            }
            self.push_single(TokenKind::Period);
            let start = self.pos;
            let end = self.ident_end(start);
            let prop = self.text(start, end);
            let kind = match self.catalog.get(&parent) {
                Some(entry) if entry.has_property(&prop) => entry.kind().token_kind(),
                _ => TokenKind::Identifier,
            };
            self.push(kind, start, end);
            self.pos = end + 1;
            parent = prop;
        }
    }

    fn ident_end(&self, start: usize) -> usize {
        let len = self.chars.len();
        let mut i = start + 1;
        while i < len && is_ident_part(self.chars[i]) {
            i += 1;
        }
        i - 1
    }

    // --- Whitespace ---

    /// A run of consecutive spaces coalesces into one token.
    fn scan_spaces(&mut self) {
        let len = self.chars.len();
        let start = self.pos;
        while self.pos < len && self.chars[self.pos] == ' ' {
            self.pos += 1;
        }
        self.push(TokenKind::Space, start, self.pos - 1);
    }

    // --- Helpers ---

    fn text(&self, start: usize, end: usize) -> String {
        self.chars[start..=end].iter().collect()
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token::new(kind, self.text(start, end)));
    }

    fn push_single(&mut self, kind: TokenKind) {
        self.push(kind, self.pos, self.pos);
        self.pos += 1;
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: scan one line with no carried comment state.
    fn scan(line: &str) -> LineScan {
        Scanner::scan(line, false, Catalog::global())
    }

    /// Helper: token kinds only.
    fn kinds(line: &str) -> Vec<TokenKind> {
        scan(line).tokens.into_iter().map(|t| t.kind).collect()
    }

    /// Helper: concatenated token text (round-trip check).
    fn rejoin(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    use TokenKind::*;

    // =========================================================================
    // Structure: empty lines, round-trip
    // =========================================================================

    #[test]
    fn test_empty_line() {
        let out = scan("");
        assert!(out.tokens.is_empty());
        assert!(!out.comment_open);
    }

    #[test]
    fn test_round_trip_reproduces_line() {
        let lines = [
            "var x = 5;",
            "return /ab+c/.test(x);",
            "  foo(\"bar\", 'baz');",
            "/* open comment",
            "x = 5 / /*/ 2",
            "a <= b >= c",
            "weird @ # ` chars",
        ];
        for line in lines {
            let out = scan(line);
            assert_eq!(rejoin(&out.tokens), line, "round-trip failed for {line:?}");
        }
    }

    // =========================================================================
    // Dispatch basics
    // =========================================================================

    #[test]
    fn test_simple_statement() {
        assert_eq!(
            kinds("var x = 5;"),
            vec![DefKey, Space, Identifier, Space, Operator, Space, Number, Semicolon]
        );
    }

    #[test]
    fn test_brackets_and_punctuation() {
        assert_eq!(
            kinds("{[(,;:.)]}"),
            vec![
                Bracket, Bracket, Bracket, Comma, Semicolon, Colon, Period,
                Bracket, Bracket, Bracket,
            ]
        );
    }

    #[test]
    fn test_operators_single_spans() {
        assert_eq!(kinds("a<=b"), vec![Identifier, Operator, Operator, Identifier]);
    }

    #[test]
    fn test_space_run_coalesced() {
        let out = scan("a   b");
        assert_eq!(out.tokens[1].kind, Space);
        assert_eq!(out.tokens[1].text, "   ");
        assert_eq!(out.tokens.len(), 3);
    }

    #[test]
    fn test_misc_fallback() {
        assert_eq!(kinds("@#"), vec![Misc, Misc]);
    }

    // =========================================================================
    // Strings
    // =========================================================================

    #[test]
    fn test_double_quoted_string() {
        let out = scan("\"hello\"");
        assert_eq!(out.tokens, vec![Token::new(Str, "\"hello\"")]);
    }

    #[test]
    fn test_single_quoted_string() {
        let out = scan("'hi' + 'yo'");
        assert_eq!(out.tokens[0], Token::new(Str, "'hi'"));
        assert_eq!(out.tokens[4], Token::new(Str, "'yo'"));
    }

    #[test]
    fn test_escaped_quote_stays_inside() {
        let out = scan(r#""say \"hi\"";"#);
        assert_eq!(out.tokens[0], Token::new(Str, r#""say \"hi\"""#));
        assert_eq!(out.tokens[1].kind, Semicolon);
    }

    #[test]
    fn test_mixed_quotes() {
        let out = scan(r#""it's fine""#);
        assert_eq!(out.tokens, vec![Token::new(Str, r#""it's fine""#)]);
    }

    #[test]
    fn test_unterminated_string_clamps() {
        let out = scan("\"no close");
        assert_eq!(out.tokens, vec![Token::new(Str, "\"no close")]);
        assert!(!out.comment_open);
    }

    #[test]
    fn test_escape_at_end_of_line() {
        let out = scan("\"ab\\");
        assert_eq!(out.tokens, vec![Token::new(Str, "\"ab\\")]);
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[test]
    fn test_line_comment_to_eol() {
        let out = scan("x; // trailing note");
        assert_eq!(out.tokens.last().unwrap(), &Token::new(Comment, "// trailing note"));
        assert!(!out.comment_open);
    }

    #[test]
    fn test_block_comment_closed_inline() {
        assert_eq!(
            kinds("a /* note */ b"),
            vec![Identifier, Space, Comment, Space, Identifier]
        );
    }

    #[test]
    fn test_block_comment_unterminated_sets_flag() {
        let out = scan("x = 1; /* begins");
        assert!(out.comment_open);
        assert_eq!(out.tokens.last().unwrap(), &Token::new(Comment, "/* begins"));
    }

    #[test]
    fn test_comment_continuation_with_close() {
        let out = Scanner::scan("still inside */ code", true, Catalog::global());
        assert!(!out.comment_open);
        assert_eq!(out.tokens[0], Token::new(Comment, "still inside */"));
        assert_eq!(out.tokens[2].kind, Identifier);
    }

    #[test]
    fn test_comment_continuation_without_close() {
        let out = Scanner::scan("no close here", true, Catalog::global());
        assert!(out.comment_open);
        assert_eq!(out.tokens, vec![Token::new(Comment, "no close here")]);
    }

    #[test]
    fn test_comment_close_at_column_zero() {
        let out = Scanner::scan("*/ var x", true, Catalog::global());
        assert!(!out.comment_open);
        assert_eq!(out.tokens[0], Token::new(Comment, "*/"));
        assert_eq!(out.tokens[2].kind, DefKey);
    }

    #[test]
    fn test_blank_line_inside_comment_stays_open() {
        let out = Scanner::scan("", true, Catalog::global());
        assert!(out.comment_open);
        assert!(out.tokens.is_empty());
    }

    #[test]
    fn test_multi_line_comment_sequence() {
        // "/* line1" then "line2 */" then "code"
        let first = scan("/* line1");
        assert!(first.comment_open);
        let second = Scanner::scan("line2 */", first.comment_open, Catalog::global());
        assert!(!second.comment_open);
        assert_eq!(second.tokens, vec![Token::new(Comment, "line2 */")]);
        let third = Scanner::scan("code", second.comment_open, Catalog::global());
        assert_eq!(third.tokens[0].kind, Identifier);
    }

    #[test]
    fn test_star_slash_inside_line_not_special() {
        // `/*/` does not close itself; the close search starts after `/*`.
        let out = scan("/*/");
        assert!(out.comment_open);
        assert_eq!(out.tokens, vec![Token::new(Comment, "/*/")]);
    }

    // =========================================================================
    // Regex vs. division
    // =========================================================================

    #[test]
    fn test_division_after_value() {
        assert_eq!(
            kinds("a / b"),
            vec![Identifier, Space, Operator, Space, Identifier]
        );
    }

    #[test]
    fn test_regex_after_return() {
        let out = scan("return /ab+c/.test(x)");
        assert_eq!(out.tokens[2], Token::new(Regex, "/ab+c/"));
        assert_eq!(out.tokens[3].kind, Period);
        assert_eq!(out.tokens[4].kind, Identifier);
    }

    #[test]
    fn test_regex_at_line_start() {
        let out = scan("/^x$/.test(s)");
        assert_eq!(out.tokens[0], Token::new(Regex, "/^x$/"));
    }

    #[test]
    fn test_regex_after_assignment() {
        let out = scan("var re = /[a-z]+/;");
        assert_eq!(out.tokens[6], Token::new(Regex, "/[a-z]+/"));
    }

    #[test]
    fn test_regex_with_flags() {
        let out = scan("x = /ab/gi;");
        assert_eq!(out.tokens[4], Token::new(Regex, "/ab/gi"));
    }

    #[test]
    fn test_regex_flags_no_repeat() {
        // A repeated flag stops consumption; the rest is an identifier.
        let out = scan("x = /a/gg");
        assert_eq!(out.tokens[4], Token::new(Regex, "/a/g"));
        assert_eq!(out.tokens[5], Token::new(Identifier, "g"));
    }

    #[test]
    fn test_regex_flags_case_insensitive() {
        let out = scan("x = /a/GI");
        assert_eq!(out.tokens[4], Token::new(Regex, "/a/GI"));
    }

    #[test]
    fn test_unclosed_regex_is_division() {
        assert_eq!(
            kinds("x = /ab"),
            vec![Identifier, Space, Operator, Space, Operator, Identifier]
        );
    }

    #[test]
    fn test_invalid_body_is_division() {
        // `+` alone does not construct; both slashes degrade.
        let out = scan("x = /+/");
        assert_eq!(
            out.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![Identifier, Space, Operator, Space, Operator, Operator, Operator]
        );
    }

    #[test]
    fn test_spec_slash_soup_does_not_panic() {
        // First slash divides, `/*` opens a comment that never closes.
        let out = scan("x = 5 / /*/ 2");
        assert!(out.comment_open);
        assert_eq!(out.tokens[4].kind, Number);
        assert_eq!(out.tokens[6].kind, Operator);
        assert_eq!(out.tokens.last().unwrap(), &Token::new(Comment, "/*/ 2"));
    }

    #[test]
    fn test_escaped_slash_in_regex_body() {
        let out = scan("x = /a\\/b/");
        assert_eq!(out.tokens[4], Token::new(Regex, "/a\\/b/"));
    }

    #[test]
    fn test_division_chain() {
        assert_eq!(
            kinds("1 / 2 / 3"),
            vec![Number, Space, Operator, Space, Number, Space, Operator, Space, Number]
        );
    }

    #[test]
    fn test_heuristic_letter_tail_misclassifies() {
        // Known approximation: an identifier ending in `n` qualifies the
        // following slash as regex context, as if it were `return`/`in`.
        let out = scan("len /ab/ x");
        assert_eq!(out.tokens[2], Token::new(Regex, "/ab/"));
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    #[test]
    fn test_integer_and_float() {
        assert_eq!(kinds("42"), vec![Number]);
        let out = scan("3.14");
        assert_eq!(out.tokens, vec![Token::new(Number, "3.14")]);
    }

    #[test]
    fn test_hex_literal() {
        let out = scan("0x1F");
        assert_eq!(out.tokens, vec![Token::new(Number, "0x1F")]);
    }

    #[test]
    fn test_malformed_number_consumed_as_is() {
        let out = scan("1.2.3");
        assert_eq!(out.tokens, vec![Token::new(Number, "1.2.3")]);
    }

    #[test]
    fn test_leading_period_not_a_number() {
        assert_eq!(kinds(".5"), vec![Period, Number]);
    }

    #[test]
    fn test_number_then_identifier() {
        assert_eq!(kinds("5px"), vec![Number, Identifier]);
    }

    // =========================================================================
    // Identifiers and keywords
    // =========================================================================

    #[test]
    fn test_defining_keyword() {
        assert_eq!(kinds("var"), vec![DefKey]);
    }

    #[test]
    fn test_reserved_keyword() {
        assert_eq!(kinds("typeof"), vec![ResKey]);
    }

    #[test]
    fn test_value_keyword() {
        assert_eq!(kinds("null"), vec![ValKey]);
    }

    #[test]
    fn test_plain_identifier() {
        assert_eq!(kinds("myVar_2$"), vec![Identifier]);
    }

    #[test]
    fn test_identifier_chars_are_ascii_only() {
        // Identifiers are [A-Za-z_$][A-Za-z0-9_$]*; a non-ASCII letter is
        // not identifier material and falls through to misc.
        let out = scan("café");
        assert_eq!(out.tokens[0], Token::new(Identifier, "caf"));
        assert_eq!(out.tokens[1], Token::new(Misc, "é"));
        assert_eq!(kinds("é"), vec![Misc]);
    }

    #[test]
    fn test_function_bare_is_defining() {
        assert_eq!(kinds("function"), vec![DefKey]);
    }

    #[test]
    fn test_function_before_paren_is_reserved() {
        assert_eq!(kinds("function()"), vec![ResKey, Bracket, Bracket]);
    }

    #[test]
    fn test_function_one_space_before_paren_is_reserved() {
        assert_eq!(kinds("function ()"), vec![ResKey, Space, Bracket, Bracket]);
    }

    #[test]
    fn test_function_two_spaces_is_defining() {
        assert_eq!(kinds("function  ()"), vec![DefKey, Space, Bracket, Bracket]);
    }

    #[test]
    fn test_library_keyword() {
        assert_eq!(kinds("$('#id')"), vec![JquKey, Bracket, Str, Bracket]);
    }

    // =========================================================================
    // Property chains
    // =========================================================================

    #[test]
    fn test_native_property() {
        assert_eq!(kinds("Math.max"), vec![NatKey, Period, NatKey]);
    }

    #[test]
    fn test_unrecognized_property_is_identifier() {
        assert_eq!(kinds("Math.nope"), vec![NatKey, Period, Identifier]);
    }

    #[test]
    fn test_unknown_parent_plain_properties() {
        assert_eq!(kinds("foo.bar"), vec![Identifier, Period, Identifier]);
    }

    #[test]
    fn test_property_never_resolved_top_level() {
        // `parse` is recognized under `JSON`, but `foo.parse` stays plain.
        assert_eq!(kinds("foo.parse"), vec![Identifier, Period, Identifier]);
    }

    #[test]
    fn test_deep_chain_recurses() {
        assert_eq!(
            kinds("window.document.title"),
            vec![CliKey, Period, CliKey, Period, CliKey]
        );
    }

    #[test]
    fn test_chain_after_call_breaks() {
        // `.` after `)` dispatches as a plain period, not a property chain.
        assert_eq!(
            kinds("foo().bar"),
            vec![Identifier, Bracket, Bracket, Period, Identifier]
        );
    }

    #[test]
    fn test_period_before_digit_not_property() {
        assert_eq!(kinds("x.5"), vec![Identifier, Period, Number]);
    }
}
