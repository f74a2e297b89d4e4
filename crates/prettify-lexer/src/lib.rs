//! Prettify Lexer
//!
//! Tokenizes one language dialect (JavaScript) for syntax highlighting.
//! The scanner is line-oriented: each line is tokenized independently except
//! for a single carried flag recording whether the previous line ended inside
//! an unterminated block comment.
//!
//! Tokenization never fails — malformed input degrades to the nearest safe
//! classification (unterminated string, division instead of regex, misc).
//!
//! # Example
//!
//! ```
//! use prettify_lexer::{Catalog, Scanner, TokenKind};
//!
//! let scan = Scanner::scan("var x;", false, Catalog::global());
//! assert_eq!(scan.tokens[0].kind, TokenKind::DefKey);
//! assert!(!scan.comment_open);
//! ```

pub mod keywords;
pub mod lines;
pub mod scanner;
pub mod token;

pub use keywords::{Catalog, KeywordEntry, KeywordKind};
pub use lines::prepare;
pub use scanner::{LineScan, Scanner};
pub use token::{Token, TokenKind};
