pub mod document;
pub mod index;
pub mod logging;
pub mod mapper;
pub mod parser;
pub mod vlq;

use miette::Diagnostic;

pub use document::SourceMapDocument;
pub use index::{MappingIndex, Segment};
pub use mapper::{GeneratedLocation, OriginalLocation, SourceMap};

/// Result type alias for the engine
pub type Result<T> = std::result::Result<T, SourceMapError>;

/// Error types for source map construction
///
/// All variants are parse-time failures: a map that raises any of these is
/// rejected as a whole and no partially built index is exposed. Query-time
/// misses are not errors; queries return `None` instead.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SourceMapError {
    #[error("Unsupported source map version: {0}")]
    #[diagnostic(
        code(sourcemap::unsupported_version),
        help("Only version 3 source maps are supported. Re-generate the map with a toolchain that emits the version 3 format.")
    )]
    UnsupportedVersion(i64),

    #[error("Invalid VLQ data: {0}")]
    #[diagnostic(
        code(sourcemap::invalid_vlq),
        help("The `mappings` field is corrupt. Check that the map was not truncated or re-encoded in transit.")
    )]
    InvalidVlq(String),

    #[error("Segment with no starting column in generated line {0}")]
    #[diagnostic(
        code(sourcemap::empty_segment),
        help("Every `,`-delimited segment must decode to at least one integer. Look for doubled or trailing commas in the `mappings` field.")
    )]
    EmptySegment(usize),

    #[error("Malformed source map document: {0}")]
    #[diagnostic(
        code(sourcemap::malformed_document),
        help("The document must be a JSON object with a numeric `version` key. Verify the input is the map itself and not the generated file.")
    )]
    MalformedDocument(String),
}
