//! Projection configuration.
//!
//! Pure data: selects which standard projection rule the analysis layer
//! constructs. Validation happens at rule-construction time so malformed
//! configuration surfaces before any graph is processed.

use serde::{Deserialize, Serialize};

/// Which standard grouping rule to apply to raw edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Label = unmodified path, no filtering.
    KeepAll,
    /// Drop external edges and synthetic self-edges.
    #[default]
    InternalOnly,
    /// Collapse paths into slices via a `(**)` wildcard pattern.
    SlicePattern,
    /// Label files by file-name suffix via an ordered table.
    FileSuffix,
}

impl ProjectionMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::KeepAll => "keep_all",
            Self::InternalOnly => "internal_only",
            Self::SlicePattern => "slice_pattern",
            Self::FileSuffix => "file_suffix",
        }
    }
}

/// One ordered entry of the file-suffix labeling table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixLabel {
    /// File-name suffix (extension already stripped) to match.
    pub suffix: String,
    /// Slice label assigned on match.
    pub label: String,
}

/// Configuration for the projection step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Grouping rule to construct. Default: internal_only.
    pub mode: ProjectionMode,
    /// Slice pattern with exactly one `(**)` marker (slice_pattern mode).
    pub pattern: Option<String>,
    /// Ordered suffix→label table (file_suffix mode). First match wins.
    pub suffix_labels: Vec<SuffixLabel>,
}

impl ProjectionConfig {
    /// Parse a `ProjectionConfig` from a TOML document with a
    /// `[projection]` table, tolerating unrelated tables around it.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        #[derive(Deserialize)]
        struct Root {
            #[serde(default)]
            projection: ProjectionConfig,
        }
        toml::from_str::<Root>(input).map(|root| root.projection)
    }
}
