//! Path helpers: pattern bases, slash-normalized paths and entry names.

use std::path::{Component, Path, PathBuf};

use pagewire_config::NamingScheme;

use crate::error::{Error, Result};

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}'];

/// Literal directory prefix of a glob pattern.
///
/// ```
/// use pagewire::naming::pattern_base;
/// use std::path::PathBuf;
///
/// assert_eq!(pattern_base("./src/views/**/*.js"), PathBuf::from("src/views"));
/// assert_eq!(pattern_base("src/views/*/index.js"), PathBuf::from("src/views"));
/// assert_eq!(pattern_base("*.js"), PathBuf::new());
/// ```
pub fn pattern_base(pattern: &str) -> PathBuf {
    let cleaned = path_clean::clean(pattern);
    let mut base = PathBuf::new();
    let components: Vec<Component<'_>> = cleaned.components().collect();

    // the last component names files, never part of the base
    let dirs = components.len().saturating_sub(1);
    for component in &components[..dirs] {
        if let Component::Normal(segment) = component {
            if segment.to_string_lossy().contains(GLOB_META) {
                break;
            }
        }
        if matches!(component, Component::CurDir) {
            continue;
        }
        base.push(component.as_os_str());
    }
    base
}

/// Render a path with `/` separators regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            Component::RootDir => Some(String::new()),
            Component::Prefix(prefix) => Some(prefix.as_os_str().to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Derive the entry name for `path` (project-relative) under `scheme`.
///
/// `base` is the literal directory prefix of the pattern that matched `path`.
pub fn derive_name(path: &Path, base: &Path, scheme: NamingScheme) -> Result<String> {
    let unresolvable = |reason: &str| Error::UnresolvableEntryName {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    // names and entry-map paths are strings; lossy conversion would corrupt them
    if path.to_str().is_none() {
        return Err(unresolvable("path is not valid UTF-8"));
    }
    if path.extension().is_none() {
        return Err(unresolvable("file has no extension"));
    }
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| unresolvable("file has no name"))?;

    match scheme {
        NamingScheme::Basename => Ok(stem.into_owned()),
        NamingScheme::Directory => {
            let relative = path.strip_prefix(base).unwrap_or(path);
            relative
                .parent()
                .and_then(|parent| parent.file_name())
                .map(|dir| dir.to_string_lossy().into_owned())
                .ok_or_else(|| unresolvable("file has no parent directory below the pattern base"))
        }
        NamingScheme::Relative => {
            let relative = path.strip_prefix(base).unwrap_or(path);
            let mut name = match relative.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    let mut dir = to_slash(parent);
                    dir.push('/');
                    dir
                }
                _ => String::new(),
            };
            name.push_str(&stem);
            Ok(name)
        }
    }
}
