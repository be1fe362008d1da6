//! Bundler filename templates (`js/[name].[chunkhash:8].js`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A placeholder a bundler substitutes when naming an emitted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Name,
    Id,
    /// Compilation-wide hash
    Hash,
    /// Per-chunk hash
    ChunkHash,
    /// Hash of the emitted file's contents
    ContentHash,
}

impl Placeholder {
    pub fn as_str(self) -> &'static str {
        match self {
            Placeholder::Name => "name",
            Placeholder::Id => "id",
            Placeholder::Hash => "hash",
            Placeholder::ChunkHash => "chunkhash",
            Placeholder::ContentHash => "contenthash",
        }
    }

    pub fn is_hash(self) -> bool {
        matches!(
            self,
            Placeholder::Hash | Placeholder::ChunkHash | Placeholder::ContentHash
        )
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(Placeholder::Name),
            "id" => Some(Placeholder::Id),
            "hash" => Some(Placeholder::Hash),
            "chunkhash" => Some(Placeholder::ChunkHash),
            "contenthash" => Some(Placeholder::ContentHash),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder {
        placeholder: Placeholder,
        length: Option<usize>,
    },
}

/// Values for rendering a template for one chunk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkContext<'a> {
    pub name: &'a str,
    pub id: Option<&'a str>,
    pub hash: Option<&'a str>,
    pub chunk_hash: Option<&'a str>,
    pub content_hash: Option<&'a str>,
}

impl<'a> ChunkContext<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn hash(mut self, hash: &'a str) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn chunk_hash(mut self, hash: &'a str) -> Self {
        self.chunk_hash = Some(hash);
        self
    }

    pub fn content_hash(mut self, hash: &'a str) -> Self {
        self.content_hash = Some(hash);
        self
    }

    fn value(&self, placeholder: Placeholder) -> Option<&'a str> {
        match placeholder {
            Placeholder::Name => Some(self.name),
            Placeholder::Id => self.id,
            Placeholder::Hash => self.hash,
            Placeholder::ChunkHash => self.chunk_hash,
            Placeholder::ContentHash => self.content_hash,
        }
    }
}

/// A parsed, validated filename template.
///
/// # Example
///
/// ```
/// use pagewire::{ChunkContext, FilenameTemplate};
///
/// let template = FilenameTemplate::parse("js/[name].[chunkhash:8].js").unwrap();
/// let rendered = template
///     .render(&ChunkContext::new("home/index").chunk_hash("0123456789abcdef"))
///     .unwrap();
/// assert_eq!(rendered, "js/home/index.01234567.js");
/// assert_eq!(template.fill_name("vendor"), "js/vendor.[chunkhash:8].js");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FilenameTemplate {
    pub fn parse(source: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidTemplate {
            template: source.to_string(),
            reason,
        };

        if source.trim().is_empty() {
            return Err(invalid("template is empty".to_string()));
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(open) = rest.find(['[', ']']) {
            if rest[open..].starts_with(']') {
                return Err(invalid(format!("unmatched ']' at byte {}", source.len() - rest.len() + open)));
            }
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find(']')
                .ok_or_else(|| invalid("unclosed '['".to_string()))?;
            let inner = &after[..close];

            let (key, length) = match inner.split_once(':') {
                Some((key, length)) => {
                    let length = length
                        .parse::<usize>()
                        .ok()
                        .filter(|length| *length > 0)
                        .ok_or_else(|| invalid(format!("bad length '{length}' in [{inner}]")))?;
                    (key, Some(length))
                }
                None => (inner, None),
            };
            let placeholder = Placeholder::parse(key)
                .ok_or_else(|| invalid(format!("unknown placeholder [{inner}]")))?;
            if length.is_some() && !placeholder.is_hash() {
                return Err(invalid(format!("[{key}] does not take a length")));
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Placeholder {
                placeholder,
                length,
            });
            rest = &after[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder { placeholder, .. } => Some(*placeholder),
            Segment::Literal(_) => None,
        })
    }

    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.placeholders().any(|p| p == placeholder)
    }

    /// Substitute every placeholder.
    ///
    /// Truncated hashes keep their first `length` characters.
    pub fn render(&self, context: &ChunkContext<'_>) -> Result<String> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder {
                    placeholder,
                    length,
                } => {
                    let value = context.value(*placeholder).ok_or_else(|| {
                        Error::MissingTemplateValue {
                            template: self.source.clone(),
                            placeholder: placeholder.as_str().to_string(),
                        }
                    })?;
                    match length {
                        Some(length) => out.extend(value.chars().take(*length)),
                        None => out.push_str(value),
                    }
                }
            }
        }
        Ok(out)
    }

    /// Substitute `[name]` only, leaving the rest for the bundler.
    pub fn fill_name(&self, name: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + name.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder {
                    placeholder: Placeholder::Name,
                    ..
                } => out.push_str(name),
                Segment::Placeholder {
                    placeholder,
                    length,
                } => {
                    out.push('[');
                    out.push_str(placeholder.as_str());
                    if let Some(length) = length {
                        out.push(':');
                        out.push_str(&length.to_string());
                    }
                    out.push(']');
                }
            }
        }
        out
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for FilenameTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for FilenameTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> Deserialize<'de> for FilenameTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
