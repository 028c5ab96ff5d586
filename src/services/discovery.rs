//! Rule file discovery.
//!
//! Walks the rules directory recursively and returns every regular file with the configured
//! extension, sorted by path so that validation order (and therefore the report) is the same
//! on every run.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors that stop a run before any file is validated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("rules directory {0} does not exist")]
    RootNotFound(Utf8PathBuf),

    #[error("no .{extension} files found in {root}")]
    NoRuleFiles { root: Utf8PathBuf, extension: String },
}

/// Find all files under `root` whose extension equals `extension`.
///
/// # Errors
///
/// - [`DiscoveryError::RootNotFound`] if `root` does not exist
/// - [`DiscoveryError::NoRuleFiles`] if the walk finds no matching file
pub fn discover_rule_files(
    root: &Utf8Path,
    extension: &str,
) -> Result<Vec<Utf8PathBuf>, DiscoveryError> {
    if !root.exists() {
        return Err(DiscoveryError::RootNotFound(root.to_path_buf()));
    }

    // Symlinked rule files count; walkdir reports link cycles as entry errors.
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root, e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = match Utf8PathBuf::from_path_buf(entry.into_path()) {
            Ok(path) => path,
            Err(path) => {
                tracing::warn!("Skipping non UTF-8 path: {}", path.display());
                continue;
            }
        };

        if path.extension() == Some(extension) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(DiscoveryError::NoRuleFiles {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    files.sort();
    tracing::debug!("Discovered {} rule files under {}", files.len(), root);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn temp_root() -> (TempDir, Utf8PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        (temp_dir, root)
    }

    #[test]
    fn test_missing_root() {
        let (_temp_dir, root) = temp_root();
        let missing = root.join("nope");
        assert_eq!(
            discover_rule_files(&missing, "mdc"),
            Err(DiscoveryError::RootNotFound(missing.clone()))
        );
    }

    #[test]
    fn test_empty_root() {
        let (_temp_dir, root) = temp_root();
        fs::write(root.join("readme.md"), "x").unwrap();

        let err = discover_rule_files(&root, "mdc").unwrap_err();
        assert!(matches!(err, DiscoveryError::NoRuleFiles { .. }));
    }

    #[test]
    fn test_recursive_and_sorted() {
        let (_temp_dir, root) = temp_root();
        fs::create_dir_all(root.join("b/nested")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("b/nested/z.mdc"), "").unwrap();
        fs::write(root.join("a/y.mdc"), "").unwrap();
        fs::write(root.join("c.mdc"), "").unwrap();
        fs::write(root.join("c.md"), "").unwrap();

        let files = discover_rule_files(&root, "mdc").unwrap();
        let relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(&root).unwrap().as_str().replace('\\', "/"))
            .collect();

        assert_eq!(relative, vec!["a/y.mdc", "b/nested/z.mdc", "c.mdc"]);
    }

    #[test]
    fn test_directory_named_like_rule_is_skipped() {
        let (_temp_dir, root) = temp_root();
        fs::create_dir_all(root.join("dir.mdc")).unwrap();
        fs::write(root.join("dir.mdc/real.mdc"), "").unwrap();

        let files = discover_rule_files(&root, "mdc").unwrap();
        assert_eq!(files, vec![root.join("dir.mdc/real.mdc")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_rule_file_is_discovered() {
        let (_temp_dir, base) = temp_root();
        let root = base.join("rules");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.mdc"), "").unwrap();
        fs::write(base.join("shared.mdc"), "no header\n").unwrap();
        std::os::unix::fs::symlink(base.join("shared.mdc"), root.join("linked.mdc")).unwrap();

        let files = discover_rule_files(&root, "mdc").unwrap();
        assert_eq!(files, vec![root.join("a.mdc"), root.join("linked.mdc")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_does_not_hang() {
        let (_temp_dir, root) = temp_root();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("sub/r.mdc"), "").unwrap();
        std::os::unix::fs::symlink(&root, root.join("sub/loop")).unwrap();

        let files = discover_rule_files(&root, "mdc").unwrap();
        assert_eq!(files, vec![root.join("sub/r.mdc")]);
    }
}
