//! Entry discovery: glob scan, name derivation and duplicate detection.

use std::path::{Path, PathBuf};

use glob::MatchOptions;
use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;
use pagewire_config::{EntryOptions, NamingScheme};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::naming::{derive_name, pattern_base, to_slash};

/// A top-level source module that becomes an independent bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Derived entry name, unique within its set
    pub name: String,
    /// Project-relative path of the entry script
    pub path: PathBuf,
}

impl Entry {
    /// Entry path with `/` separators.
    pub fn path_slash(&self) -> String {
        to_slash(&self.path)
    }
}

/// Entries keyed by name, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySet {
    pattern: String,
    base: PathBuf,
    entries: IndexMap<String, Entry>,
}

impl EntrySet {
    /// Pattern the set was resolved from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Literal directory prefix of the pattern.
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Entry name to `/`-separated path, the shape bundlers take as `entry`.
    ///
    /// Project-relative paths get a `./` prefix; entries found outside the
    /// project keep their absolute path.
    pub fn to_entry_map(&self) -> IndexMap<String, String> {
        self.entries
            .iter()
            .map(|(name, entry)| {
                let path = if entry.path.is_absolute() {
                    entry.path_slash()
                } else {
                    format!("./{}", entry.path_slash())
                };
                (name.clone(), path)
            })
            .collect()
    }

    /// Build a set from already-discovered project-relative paths.
    ///
    /// Fails on an empty path list, on unresolvable names and on duplicate
    /// names.
    pub fn from_paths<I, P>(pattern: &str, paths: I, scheme: NamingScheme) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let base = pattern_base(pattern);
        let mut entries: IndexMap<String, Entry> = IndexMap::new();

        for path in paths {
            let path = path.into();
            let name = derive_name(&path, &base, scheme)?;
            match entries.entry(name) {
                MapEntry::Occupied(existing) => {
                    return Err(Error::DuplicateEntryName {
                        name: existing.key().clone(),
                        first: existing.get().path.clone(),
                        second: path,
                    });
                }
                MapEntry::Vacant(slot) => {
                    tracing::debug!(name = %slot.key(), path = %path.display(), "resolved entry");
                    let name = slot.key().clone();
                    slot.insert(Entry { name, path });
                }
            }
        }

        if entries.is_empty() {
            return Err(Error::PatternNoMatch {
                pattern: pattern.to_string(),
            });
        }

        Ok(Self {
            pattern: pattern.to_string(),
            base,
            entries,
        })
    }
}

impl<'a> IntoIterator for &'a EntrySet {
    type Item = &'a Entry;
    type IntoIter = indexmap::map::Values<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Scans a project for entry files.
///
/// # Example
///
/// ```no_run
/// use pagewire::EntryResolver;
/// use pagewire_config::NamingScheme;
///
/// let entries = EntryResolver::new(".")
///     .naming(NamingScheme::Relative)
///     .resolve("src/views/**/*.js")
///     .unwrap();
///
/// for entry in &entries {
///     println!("{} -> {}", entry.name, entry.path.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct EntryResolver {
    root: PathBuf,
    naming: NamingScheme,
}

impl EntryResolver {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            naming: NamingScheme::default(),
        }
    }

    pub fn naming(mut self, naming: NamingScheme) -> Self {
        self.naming = naming;
        self
    }

    /// Resolve every file matching `pattern` (relative to the project root).
    ///
    /// Matches are visited in glob order (sorted), directories and dotfiles
    /// are skipped.
    #[tracing::instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    pub fn resolve(&self, pattern: &str) -> Result<EntrySet> {
        let root = path_clean::clean(&self.root);
        let cleaned = to_slash(&path_clean::clean(pattern));
        let full_pattern = if Path::new(&cleaned).is_absolute() {
            cleaned.clone()
        } else {
            let root_slash = to_slash(&root);
            if root_slash.is_empty() {
                cleaned.clone()
            } else {
                format!("{}/{}", glob::Pattern::escape(&root_slash), cleaned)
            }
        };

        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };
        let matches =
            glob::glob_with(&full_pattern, options).map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        let mut files = Vec::new();
        for matched in matches {
            let matched = matched?;
            if !matched.is_file() {
                continue;
            }
            let relative = matched
                .strip_prefix(&root)
                .map(Path::to_path_buf)
                .unwrap_or(matched);
            files.push(relative);
        }

        // names are derived against the root-relative form of the pattern
        let name_pattern = match Path::new(&cleaned).strip_prefix(&root) {
            Ok(relative) if Path::new(&cleaned).is_absolute() => to_slash(relative),
            _ => cleaned,
        };
        let set = EntrySet::from_paths(&name_pattern, files, self.naming).map_err(|err| match err {
            Error::PatternNoMatch { .. } => Error::PatternNoMatch {
                pattern: pattern.to_string(),
            },
            other => other,
        })?;
        tracing::info!(count = set.len(), pattern = %pattern, "resolved entries");
        Ok(set)
    }
}

/// Resolve entries for `options` below `root`.
pub fn resolve_entries(root: impl AsRef<Path>, options: &EntryOptions) -> Result<EntrySet> {
    EntryResolver::new(root)
        .naming(options.naming)
        .resolve(&options.pattern)
}
