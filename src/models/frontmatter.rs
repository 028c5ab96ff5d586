/// Parsed header block of a rule file.
///
/// Every field is optional on its own: `None` means the key was not found (or, for
/// `always_apply`, held something other than a boolean literal). An empty string or an
/// empty list is a present value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub description: Option<String>,
    pub always_apply: Option<bool>,
    pub globs: Option<Vec<String>>,
}

impl Frontmatter {
    /// Whether the rule is unconditionally active. Absent counts as `false`.
    pub fn is_always_applied(&self) -> bool {
        self.always_apply.unwrap_or(false)
    }

    /// Description truncated to at most `max_chars` characters, or `""` if absent.
    pub fn description_preview(&self, max_chars: usize) -> String {
        self.description
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(max_chars)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_absent() {
        let fm = Frontmatter::default();
        assert_eq!(fm.description, None);
        assert_eq!(fm.always_apply, None);
        assert_eq!(fm.globs, None);
        assert!(!fm.is_always_applied());
    }

    #[test]
    fn test_description_preview_counts_chars() {
        let fm = Frontmatter {
            description: Some("é".repeat(80)),
            ..Default::default()
        };
        let preview = fm.description_preview(60);
        assert_eq!(preview.chars().count(), 60);
    }

    #[test]
    fn test_description_preview_absent() {
        assert_eq!(Frontmatter::default().description_preview(60), "");
    }
}
