/// Token classification for highlighted source.
///
/// Each variant maps 1:1 to a CSS class consumed by the surrounding
/// stylesheet; the class names are a compatibility contract and must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keyword categories
    /// Defining keyword (`var`, `function`, `class`, …)
    DefKey,
    /// Reserved keyword (`return`, `if`, `typeof`, …)
    ResKey,
    /// Native object or function (`Math`, `parseInt`, …)
    NatKey,
    /// Value literal keyword (`true`, `null`, `undefined`, …)
    ValKey,
    /// Client environment name (`document`, `window`, …)
    CliKey,
    /// Library name (`$`, `jQuery`)
    JquKey,

    /// Plain identifier
    Identifier,

    // Literals and constructs
    /// String literal (quotes included)
    Str,
    /// Line or block comment (markers included)
    Comment,
    /// Regular-expression literal (delimiters and flags included)
    Regex,
    /// Numeric literal
    Number,

    // Single-purpose character spans
    /// Operator character
    Operator,
    /// Bracket: `{` `}` `[` `]` `(` `)`
    Bracket,
    Comma,
    Semicolon,
    Colon,
    Period,
    /// Run of one or more spaces
    Space,
    /// Anything the dispatch table does not recognize
    Misc,
}

impl TokenKind {
    /// The CSS class emitted for this kind. Bit-exact vocabulary required
    /// by the widget stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::DefKey => "defKey",
            TokenKind::ResKey => "resKey",
            TokenKind::NatKey => "natKey",
            TokenKind::ValKey => "valKey",
            TokenKind::CliKey => "cliKey",
            TokenKind::JquKey => "jquKey",
            TokenKind::Identifier => "idt",
            TokenKind::Str => "str",
            TokenKind::Comment => "cmt",
            TokenKind::Regex => "rgx",
            TokenKind::Number => "num",
            TokenKind::Operator => "opr",
            TokenKind::Bracket => "brc",
            TokenKind::Comma => "cmm",
            TokenKind::Semicolon => "smc",
            TokenKind::Colon => "cln",
            TokenKind::Period => "per",
            TokenKind::Space => "spc",
            TokenKind::Misc => "msc",
        }
    }
}

/// A classified slice of one prepared line.
///
/// Carries the exact source text it covers: concatenating the `text` of
/// every token emitted for a line reproduces that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
