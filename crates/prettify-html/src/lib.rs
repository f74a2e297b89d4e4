//! Prettify HTML
//!
//! Turns raw solution source text into an ordered-list HTML fragment where
//! every token carries a semantic span class, plus the line count the widget
//! uses to pre-compute its container height.
//!
//! ```text
//! source text → prepare → per line: Scanner (comment state carried)
//!             → span rendering (+ comment links) → <li> assembly
//! ```
//!
//! # Example
//!
//! ```
//! use prettify_html::{prettify, PrettyConfig};
//!
//! let out = prettify("var x;", &PrettyConfig::default());
//! assert_eq!(out.line_count, 1);
//! assert!(out.markup.contains("<span class=\"defKey\">var</span>"));
//! ```

pub mod links;
pub mod render;

use prettify_lexer::{Catalog, Scanner};
use serde::Deserialize;

/// Formatting configuration, pushed once by the widget before any
/// formatting occurs.
///
/// Field names deserialize in camelCase for compatibility with the widget's
/// existing configuration objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrettyConfig {
    /// Leading space columns stripped from every line.
    pub trim_space: usize,
    /// Spaces substituted for each tab.
    pub tab_length: usize,
    /// Rewrite ` [text](url)` inside comments as anchors.
    pub comment_links: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            trim_space: 0,
            tab_length: 2,
            comment_links: false,
        }
    }
}

/// Configuration rejected at the boundary, before any scanning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid prettify configuration: {message}")]
pub struct ConfigError {
    pub message: String,
}

impl PrettyConfig {
    /// Parse a configuration from JSON. Unknown keys are ignored; missing
    /// keys take their defaults; wrong types (negative or fractional
    /// numbers included) are rejected. Anything other than a JSON object
    /// is rejected outright — serde would otherwise fill a struct with
    /// defaults from a sequence.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| ConfigError {
            message: e.to_string(),
        })?;
        if !value.is_object() {
            return Err(ConfigError {
                message: "expected a JSON object".into(),
            });
        }
        serde_json::from_value(value).map_err(|e| ConfigError {
            message: e.to_string(),
        })
    }
}

/// The formatted result: one ordered-list fragment plus the number of
/// lines it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prettified {
    pub markup: String,
    pub line_count: usize,
}

/// Format source text into highlighted ordered-list markup.
///
/// Pure function of its inputs; the keyword catalog is the only shared
/// state and is read-only. The block-comment flag carried between lines is
/// local to one call, so calls are independent and re-entrant.
pub fn prettify(source: &str, config: &PrettyConfig) -> Prettified {
    let catalog = Catalog::global();
    let lines = prettify_lexer::prepare(source, config.tab_length, config.trim_space);

    let mut markup = String::new();
    let mut comment_open = false;
    for line in &lines {
        let scan = Scanner::scan(line, comment_open, catalog);
        comment_open = scan.comment_open;
        markup.push_str(&render::wrap_line(&render::render_line(
            &scan.tokens,
            config.comment_links,
        )));
    }

    Prettified {
        markup,
        line_count: lines.len(),
    }
}
