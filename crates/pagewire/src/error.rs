use std::path::PathBuf;

/// Error types for entry resolution and plan assembly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The entry pattern matched no files.
    #[error("No files match entry pattern '{pattern}'")]
    PatternNoMatch { pattern: String },

    /// An entry path lacks the structure needed to derive a name or output.
    #[error("Unresolvable entry path {}: {reason}", .path.display())]
    UnresolvableEntryName { path: PathBuf, reason: String },

    /// Two entry files derive the same entry name.
    #[error(
        "Duplicate entry name '{name}': {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateEntryName {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// The entry pattern is not a valid glob.
    #[error("Invalid entry pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A matched path could not be read while scanning.
    #[error("Failed to scan {}: {}", .0.path().display(), .0.error())]
    Scan(#[from] glob::GlobError),

    /// A filename template is malformed.
    #[error("Invalid filename template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// A filename template needs a value the caller did not supply.
    #[error("Filename template '{template}' needs a value for [{placeholder}]")]
    MissingTemplateValue {
        template: String,
        placeholder: String,
    },

    /// Configuration could not be loaded or failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] pagewire_config::ConfigError),

    /// The plan could not be serialized.
    #[error("Failed to serialize build plan: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for pagewire operations.
pub type Result<T> = std::result::Result<T, Error>;

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::PatternNoMatch { .. } => "PATTERN_NO_MATCH",
            Error::UnresolvableEntryName { .. } => "UNRESOLVABLE_ENTRY_NAME",
            Error::DuplicateEntryName { .. } => "DUPLICATE_ENTRY_NAME",
            Error::InvalidPattern { .. } => "INVALID_PATTERN",
            Error::Scan(_) => "SCAN_ERROR",
            Error::InvalidTemplate { .. } => "INVALID_TEMPLATE",
            Error::MissingTemplateValue { .. } => "MISSING_TEMPLATE_VALUE",
            Error::Config(_) => "INVALID_CONFIG",
            Error::Json(_) => "SERIALIZE_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::PatternNoMatch { pattern } => Some(Box::new(format!(
                "Nothing matched '{}' below the project root.\nCheck entries.pattern and --cwd; an empty build is refused.",
                pattern
            ))),
            Error::UnresolvableEntryName { .. } => Some(Box::new(
                "Entry files need an extension and must sit below the root marker directory (entries.root_marker).",
            )),
            Error::DuplicateEntryName { .. } => Some(Box::new(
                "Pick a naming scheme that keeps names unique (entries.naming = \"relative\") or rename one of the files.",
            )),
            Error::InvalidPattern { .. } => Some(Box::new(
                "Entry patterns use glob syntax: '*' within a directory, '**' across directories, '?' and '[...]' for single characters.",
            )),
            Error::InvalidTemplate { .. } => Some(Box::new(
                "Supported placeholders: [name], [id], [hash], [chunkhash], [contenthash]; hashes take an optional length such as [chunkhash:8].",
            )),
            _ => None,
        }
    }
}
