use serde::Deserialize;

/// Version of the source map format this engine understands.
pub const SUPPORTED_VERSION: i64 = 3;

/// Raw fields of a version 3 source map document.
///
/// All keys except `version` are optional and default to empty; unknown
/// keys are ignored. The record is deserialized once and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceMapDocument {
    /// Format revision; must equal [`SUPPORTED_VERSION`].
    pub version: i64,
    /// Declared name of the generated output file.
    #[serde(default)]
    pub file: String,
    /// Prefix applied to every entry of `sources`.
    #[serde(default, rename = "sourceRoot")]
    pub source_root: String,
    /// Original source file names, in segment reference order.
    #[serde(default)]
    pub sources: Vec<String>,
    /// Embedded content of the original sources, parallel to `sources`.
    #[serde(default, rename = "sourcesContent")]
    pub sources_content: Vec<Option<String>>,
    /// Symbol names referenced by five-field segments.
    #[serde(default)]
    pub names: Vec<String>,
    /// The VLQ-encoded mapping payload.
    #[serde(default)]
    pub mappings: String,
}
