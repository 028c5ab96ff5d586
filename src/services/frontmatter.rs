//! Header-block parser for rule files.
//!
//! A rule file looks like:
//!
//! ```text
//! ---
//! description: "Use strict TypeScript"
//! alwaysApply: false
//! globs: ["*.ts", "*.tsx"]
//! ---
//! Rule body...
//! ```
//!
//! Fields are pulled out with line-anchored regexes rather than a YAML parser, which keeps
//! the distinction between an absent key and a key with an unusable value:
//!
//! - `description: <text>` with one layer of matching `"`/`'` quotes removed
//! - `alwaysApply: true|false`, case-insensitive; any other value reads as absent
//! - `globs: [..]` flow list of quoted items (the brackets may span lines), or a bare `]`
//!   marker, both meaning a list; anything else reads as absent
//!
//! # Limitations
//!
//! YAML block sequences are not understood:
//!
//! ```text
//! globs:
//!   - "*.ts"
//! ```
//!
//! leaves `globs` absent. Unquoted flow items (`[*.ts]`) are dropped. The closing `---` must
//! be followed by a newline, and `\r\n` delimiters are not recognized.

use crate::models::Frontmatter;
use regex::Regex;
use thiserror::Error;

/// Errors that prevent any field from being read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("missing header (file must start with '---')")]
    MissingHeader,

    #[error("malformed header (block must be closed by a '---' line)")]
    MalformedHeader,
}

/// A rule file split into its header block and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule<'a> {
    pub frontmatter: Frontmatter,
    /// Raw text between the delimiter lines
    pub header: &'a str,
    /// Everything after the closing delimiter line
    pub body: &'a str,
}

/// Parser holding the pre-compiled field patterns.
pub struct FrontmatterParser {
    block_pattern: Regex,
    description_pattern: Regex,
    always_apply_pattern: Regex,
    globs_list_pattern: Regex,
    globs_item_pattern: Regex,
    globs_empty_pattern: Regex,
}

impl FrontmatterParser {
    pub fn new() -> Self {
        Self {
            block_pattern: Regex::new(r"(?s)^---\n(.*?)\n---\n").expect("Invalid header regex"),
            description_pattern: Regex::new(r"(?m)^description:\s*(.+)$")
                .expect("Invalid description regex"),
            always_apply_pattern: Regex::new(r"(?im)^alwaysApply:\s*(true|false)$")
                .expect("Invalid alwaysApply regex"),
            globs_list_pattern: Regex::new(r"(?ms)^globs:\s*\[(.*?)\]")
                .expect("Invalid globs regex"),
            globs_item_pattern: Regex::new(r#"["']([^"']+)["']"#)
                .expect("Invalid globs item regex"),
            globs_empty_pattern: Regex::new(r"(?m)^globs:\s*\[?\s*\]")
                .expect("Invalid empty globs regex"),
        }
    }

    /// Split `content` into header and body and extract the known fields.
    pub fn parse<'a>(&self, content: &'a str) -> Result<ParsedRule<'a>, HeaderError> {
        if !content.starts_with("---") {
            return Err(HeaderError::MissingHeader);
        }

        let captures = self
            .block_pattern
            .captures(content)
            .ok_or(HeaderError::MalformedHeader)?;
        let whole = captures.get(0).ok_or(HeaderError::MalformedHeader)?;
        let header = captures.get(1).map_or("", |m| m.as_str());
        let body = &content[whole.end()..];

        Ok(ParsedRule {
            frontmatter: self.parse_fields(header),
            header,
            body,
        })
    }

    /// Extract fields from the raw header block (without delimiters).
    pub fn parse_fields(&self, header: &str) -> Frontmatter {
        Frontmatter {
            description: self.parse_description(header),
            always_apply: self.parse_always_apply(header),
            globs: self.parse_globs(header),
        }
    }

    fn parse_description(&self, header: &str) -> Option<String> {
        let captures = self.description_pattern.captures(header)?;
        let value = captures.get(1)?.as_str().trim();
        Some(strip_matching_quotes(value).to_string())
    }

    fn parse_always_apply(&self, header: &str) -> Option<bool> {
        let captures = self.always_apply_pattern.captures(header)?;
        Some(captures.get(1)?.as_str().eq_ignore_ascii_case("true"))
    }

    fn parse_globs(&self, header: &str) -> Option<Vec<String>> {
        if let Some(inner) = self
            .globs_list_pattern
            .captures(header)
            .and_then(|c| c.get(1))
        {
            let inner = inner.as_str().trim();
            if inner.is_empty() {
                return Some(Vec::new());
            }
            let items = self
                .globs_item_pattern
                .captures_iter(inner)
                .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
                .collect();
            return Some(items);
        }

        if self.globs_empty_pattern.is_match(header) {
            return Some(Vec::new());
        }

        None
    }
}

impl Default for FrontmatterParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove one layer of matching surrounding quotes. A lone quote becomes empty.
fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return if value.len() >= 2 {
                &value[1..value.len() - 1]
            } else {
                ""
            };
        }
    }
    value
}
