//! Translation entry types.
//!
//! One entry is produced for every extracted piece of source text. Entries
//! are immutable once created and are handed to the caller (the external
//! metadata store) at the end of processing a file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::hash::translation_hash;

/// Where an entry was found. Line and column are informational only and
/// never participate in the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryLocation {
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl EntryLocation {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line: None,
            column: None,
        }
    }

    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

/// A single extracted translation entry.
///
/// Each variant carries only the fields relevant to its kind; the hash is
/// computed from the source text plus the variant's structural context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TranslationEntry {
    /// Markup content owned by a component (simple text or a serialized
    /// mixed-content placeholder string).
    #[serde(rename_all = "camelCase")]
    Content {
        source_text: String,
        hash: String,
        component_name: String,
        location: EntryLocation,
        /// Author-supplied per-locale replacements, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        overrides: Option<BTreeMap<String, String>>,
    },
    /// A translatable attribute value (`title`, `alt`, `placeholder`, ...).
    #[serde(rename_all = "camelCase")]
    Attribute {
        source_text: String,
        hash: String,
        component_name: String,
        attribute_name: String,
        location: EntryLocation,
    },
    /// An allow-listed leaf inside a literal page-metadata export.
    #[serde(rename_all = "camelCase")]
    Metadata {
        source_text: String,
        hash: String,
        field_path: String,
        location: EntryLocation,
    },
}

impl TranslationEntry {
    pub fn content(
        source_text: impl Into<String>,
        component_name: impl Into<String>,
        location: EntryLocation,
        overrides: Option<BTreeMap<String, String>>,
    ) -> Self {
        let source_text = source_text.into();
        let component_name = component_name.into();
        let hash = translation_hash(
            &source_text,
            &[
                ("componentName", &component_name),
                ("filePath", &location.file_path),
            ],
        );
        Self::Content {
            source_text,
            hash,
            component_name,
            location,
            overrides,
        }
    }

    pub fn attribute(
        source_text: impl Into<String>,
        attribute_name: impl Into<String>,
        component_name: impl Into<String>,
        location: EntryLocation,
    ) -> Self {
        let source_text = source_text.into();
        let attribute_name = attribute_name.into();
        let component_name = component_name.into();
        let hash = translation_hash(
            &source_text,
            &[
                ("attributeName", &attribute_name),
                ("componentName", &component_name),
                ("filePath", &location.file_path),
            ],
        );
        Self::Attribute {
            source_text,
            hash,
            component_name,
            attribute_name,
            location,
        }
    }

    pub fn metadata(
        source_text: impl Into<String>,
        field_path: impl Into<String>,
        location: EntryLocation,
    ) -> Self {
        let source_text = source_text.into();
        let field_path = field_path.into();
        let hash = translation_hash(
            &source_text,
            &[
                ("fieldPath", &field_path),
                ("filePath", &location.file_path),
            ],
        );
        Self::Metadata {
            source_text,
            hash,
            field_path,
            location,
        }
    }

    pub fn hash(&self) -> &str {
        match self {
            Self::Content { hash, .. }
            | Self::Attribute { hash, .. }
            | Self::Metadata { hash, .. } => hash,
        }
    }

    pub fn source_text(&self) -> &str {
        match self {
            Self::Content { source_text, .. }
            | Self::Attribute { source_text, .. }
            | Self::Metadata { source_text, .. } => source_text,
        }
    }

    pub fn location(&self) -> &EntryLocation {
        match self {
            Self::Content { location, .. }
            | Self::Attribute { location, .. }
            | Self::Metadata { location, .. } => location,
        }
    }
}
