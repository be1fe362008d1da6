//! Shared utilities for command implementations.
//!
//! - Path resolution and project root validation
//! - Guarded removal of build output
//! - Writing generated files

use crate::error::{BuildError, CliError, Result, ResultExt};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}

/// Resolve the project root: `--cwd` when given (relative to `cwd`), else
/// `cwd` itself. The result must be an existing directory.
pub fn resolve_project_root(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    let root = match explicit {
        Some(path) => path_clean::clean(resolve_path(path, cwd)),
        None => cwd.to_path_buf(),
    };

    if !root.exists() {
        return Err(CliError::InvalidArgument(format!(
            "Project root does not exist: {}",
            root.display()
        )));
    }
    if !root.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    Ok(root)
}

/// Reject paths a clean must never touch.
///
/// `path` has to sit strictly inside `project_root` and must not be the
/// filesystem root or the user's home directory.
pub fn check_clean_target(path: &Path, project_root: &Path) -> Result<()> {
    let path = path_clean::clean(path);
    let root = path_clean::clean(project_root);
    let unsafe_target = |reason: &str| -> CliError {
        BuildError::UnsafeCleanTarget {
            path: path.clone(),
            reason: reason.to_string(),
        }
        .into()
    };

    if path.parent().is_none() {
        return Err(unsafe_target("filesystem root"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        if path == home {
            return Err(unsafe_target("home directory"));
        }
    }
    if path == root {
        return Err(unsafe_target("project root"));
    }
    if !path.starts_with(&root) {
        return Err(unsafe_target("outside the project root"));
    }
    Ok(())
}

/// Remove everything matched by `targets` (globs relative to
/// `project_root`).
///
/// Every match is checked with [`check_clean_target`] before anything is
/// removed. With `dry_run` nothing is removed. Returns the matched paths.
pub fn clean_targets(project_root: &Path, targets: &[String], dry_run: bool) -> Result<Vec<PathBuf>> {
    let root = path_clean::clean(project_root);
    let prefix = glob::Pattern::escape(&root.to_string_lossy());

    let mut matched = Vec::new();
    for target in targets {
        let pattern = if Path::new(target).is_absolute() {
            target.clone()
        } else {
            format!("{}/{}", prefix, target.trim_start_matches("./"))
        };
        let paths = glob::glob(&pattern).map_err(|e| {
            CliError::InvalidArgument(format!("Invalid clean target '{}': {}", target, e))
        })?;
        for path in paths {
            let path = path.map_err(|e| CliError::Io(e.into_error()))?;
            check_clean_target(&path, &root)?;
            matched.push(path);
        }
    }

    if !dry_run {
        for path in &matched {
            // an earlier target may already have removed it
            if path.is_dir() {
                fs::remove_dir_all(path).with_path(path)?;
            } else if path.exists() {
                fs::remove_file(path).with_path(path)?;
            }
        }
    }

    Ok(matched)
}

/// Write `contents` to `path`, creating parent directories.
pub async fn write_file(path: &Path, contents: &str) -> Result<()> {
    let not_writable = |_| BuildError::OutputNotWritable(path.to_path_buf());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(not_writable)?;
    }
    tokio::fs::write(path, contents).await.map_err(not_writable)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/absolute/path"), Path::new("/some/dir"));
        assert_eq!(resolved, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_resolve_path_relative() {
        let resolved = resolve_path(Path::new("relative/path"), Path::new("/some/dir"));
        assert_eq!(resolved, PathBuf::from("/some/dir/relative/path"));
    }

    #[test]
    fn test_resolve_project_root_missing() {
        let temp = TempDir::new().unwrap();
        let err = resolve_project_root(Some(Path::new("nope")), temp.path()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_resolve_project_root_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file.txt"), "").unwrap();
        let err = resolve_project_root(Some(Path::new("file.txt")), temp.path()).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_check_clean_target_rejects_dangerous_paths() {
        let root = Path::new("/site");
        assert!(check_clean_target(Path::new("/"), root).is_err());
        assert!(check_clean_target(Path::new("/site"), root).is_err());
        assert!(check_clean_target(Path::new("/site/../etc"), root).is_err());
        assert!(check_clean_target(Path::new("/other/dist"), root).is_err());
        assert!(check_clean_target(Path::new("/site/dist/js"), root).is_ok());
    }

    #[test]
    fn test_clean_targets_removes_contents() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist");
        fs::create_dir_all(dist.join("js")).unwrap();
        fs::write(dist.join("js/app.js"), "").unwrap();
        fs::write(dist.join("index.html"), "").unwrap();

        let removed = clean_targets(temp.path(), &["dist/*".to_string()], false).unwrap();
        assert_eq!(removed.len(), 2);
        assert!(dist.exists(), "output root itself is kept");
        assert_eq!(fs::read_dir(&dist).unwrap().count(), 0);
    }

    #[test]
    fn test_clean_targets_dry_run_keeps_files() {
        let temp = TempDir::new().unwrap();
        let dist = temp.path().join("dist");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("index.html"), "").unwrap();

        let matched = clean_targets(temp.path(), &["dist/*".to_string()], true).unwrap();
        assert_eq!(matched, vec![dist.join("index.html")]);
        assert!(dist.join("index.html").exists());
    }

    #[test]
    fn test_clean_targets_refuses_escape() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("site");
        fs::create_dir_all(&project).unwrap();
        fs::write(temp.path().join("precious.txt"), "").unwrap();

        let err = clean_targets(&project, &["../*".to_string()], false).unwrap_err();
        assert!(matches!(err, CliError::Build(BuildError::UnsafeCleanTarget { .. })));
        assert!(temp.path().join("precious.txt").exists());
    }

    #[tokio::test]
    async fn test_write_file_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out/plan.json");
        write_file(&path, "{}").await.unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }
}
