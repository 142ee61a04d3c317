//! Projection rules: the grouping strategies applied to raw edges.
//!
//! A rule maps each raw edge to a labeled pair or drops it. Dropping is
//! how external dependencies, non-matching paths, and collapsed
//! self-references are excluded. Any `Fn(&RawEdge) -> Option<LabelPair>`
//! is a valid rule, so callers can plug in custom grouping strategies.

use regex::Regex;

use strata_core::config::{ProjectionConfig, ProjectionMode, SuffixLabel};
use strata_core::errors::RuleError;
use strata_core::types::RawEdge;

/// The labels a rule assigns to one edge's endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPair {
    pub source: String,
    pub target: String,
}

/// A grouping rule: the sole extension point for projection strategy.
///
/// Must be pure: the projector applies it once per edge and relies on
/// identical edges producing identical results.
pub trait ProjectionRule {
    /// Map an edge to its label pair, or `None` to drop it.
    fn project(&self, edge: &RawEdge) -> Option<LabelPair>;
}

impl<F> ProjectionRule for F
where
    F: Fn(&RawEdge) -> Option<LabelPair>,
{
    fn project(&self, edge: &RawEdge) -> Option<LabelPair> {
        self(edge)
    }
}

/// Identity rule: label = unmodified path, nothing filtered.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl ProjectionRule for KeepAll {
    fn project(&self, edge: &RawEdge) -> Option<LabelPair> {
        Some(LabelPair {
            source: edge.source.clone(),
            target: edge.target.clone(),
        })
    }
}

/// Identity labeling, but drops external edges and self-edges.
///
/// Self-edges are dropped because the extractor emits synthetic
/// `source == target` edges to keep unreferenced files visible; those
/// must never reach cycle detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternalOnly;

impl ProjectionRule for InternalOnly {
    fn project(&self, edge: &RawEdge) -> Option<LabelPair> {
        if edge.external || edge.source == edge.target {
            return None;
        }
        Some(LabelPair {
            source: edge.source.clone(),
            target: edge.target.clone(),
        })
    }
}

/// The wildcard marker of a slice pattern.
const SLICE_MARKER: &str = "(**)";

/// Collapses paths into named slices via a single-wildcard pattern.
///
/// `src/(**)/index.ts` labels `src/foo/index.ts` as `foo`: the text
/// around the marker is regex-escaped into `^prefix(\w+)suffix.*$` and
/// the first capture group becomes the slice label.
#[derive(Debug, Clone)]
pub struct SlicePattern {
    regex: Regex,
}

impl SlicePattern {
    /// Compile a slice pattern. A pattern with zero or multiple `(**)`
    /// markers is a configuration error, surfaced here before any edge
    /// is processed.
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        let markers = pattern.matches(SLICE_MARKER).count();
        let Some((prefix, suffix)) = pattern.split_once(SLICE_MARKER).filter(|_| markers == 1)
        else {
            return Err(RuleError::MalformedSlicePattern {
                pattern: pattern.to_string(),
                markers,
            });
        };

        let source = format!(
            "^{}(\\w+){}.*$",
            regex::escape(prefix),
            regex::escape(suffix)
        );
        // Escaped literals plus one fixed group cannot fail to compile.
        let regex = Regex::new(&source).map_err(|_| RuleError::MalformedSlicePattern {
            pattern: pattern.to_string(),
            markers,
        })?;
        Ok(Self { regex })
    }

    fn slice_label(&self, path: &str) -> Option<String> {
        self.regex
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

impl ProjectionRule for SlicePattern {
    fn project(&self, edge: &RawEdge) -> Option<LabelPair> {
        if edge.external {
            return None;
        }
        let source = self.slice_label(&edge.source)?;
        let target = self.slice_label(&edge.target)?;
        // A slice referencing itself is not architecturally meaningful.
        if source == target {
            return None;
        }
        Some(LabelPair { source, target })
    }
}

/// Labels files by file-name suffix via an ordered table.
///
/// The file name (extension stripped) is matched against each table
/// entry in order; the first matching entry wins. An edge survives only
/// if both endpoints match some entry and their labels differ.
#[derive(Debug, Clone)]
pub struct FileSuffix {
    table: Vec<SuffixLabel>,
}

impl FileSuffix {
    /// Build a suffix rule from an ordered labeling table.
    pub fn new(table: Vec<SuffixLabel>) -> Result<Self, RuleError> {
        if table.is_empty() {
            return Err(RuleError::EmptyLabelingTable);
        }
        Ok(Self { table })
    }

    fn label_for(&self, path: &str) -> Option<&str> {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let stem = match file_name.rsplit_once('.') {
            Some((stem, _ext)) if !stem.is_empty() => stem,
            _ => file_name,
        };
        self.table
            .iter()
            .find(|entry| stem.ends_with(&entry.suffix))
            .map(|entry| entry.label.as_str())
    }
}

impl ProjectionRule for FileSuffix {
    fn project(&self, edge: &RawEdge) -> Option<LabelPair> {
        let source = self.label_for(&edge.source)?.to_string();
        let target = self.label_for(&edge.target)?.to_string();
        if source == target {
            return None;
        }
        Some(LabelPair { source, target })
    }
}

/// Construct the standard rule selected by a `ProjectionConfig`.
///
/// Malformed configuration (missing pattern, bad marker count, empty
/// table) surfaces as `RuleError` here, before any graph is touched.
pub fn rule_from_config(config: &ProjectionConfig) -> Result<Box<dyn ProjectionRule>, RuleError> {
    match config.mode {
        ProjectionMode::KeepAll => Ok(Box::new(KeepAll)),
        ProjectionMode::InternalOnly => Ok(Box::new(InternalOnly)),
        ProjectionMode::SlicePattern => {
            let pattern =
                config
                    .pattern
                    .as_deref()
                    .ok_or_else(|| RuleError::MissingSlicePattern {
                        mode: config.mode.name().to_string(),
                    })?;
            Ok(Box::new(SlicePattern::new(pattern)?))
        }
        ProjectionMode::FileSuffix => Ok(Box::new(FileSuffix::new(config.suffix_labels.clone())?)),
    }
}
