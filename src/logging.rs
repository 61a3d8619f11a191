//! Structured logging helpers for the source map engine.
//!
//! Thin wrappers over the `tracing` crate so parse and query paths emit
//! consistent structured events without pulling field naming into the
//! algorithms.

/// Log the start of a document parse.
pub fn log_parse_started(mappings_bytes: usize) {
    tracing::debug!(bytes = mappings_bytes, "Parsing source map mappings");
}

/// Log a completed parse.
pub fn log_parse_completed(lines: usize, segments: usize) {
    tracing::debug!(lines, segments, "Source map index built");
}

/// Log a forward query that found no mapping.
pub fn log_point_unmapped(line: u32, column: u32) {
    tracing::debug!(line, column, "No mapping for generated position");
}

/// Log a backward query that found no candidate.
pub fn log_reverse_unmapped(line: u32, column: u32) {
    tracing::debug!(line, column, "No mapping for original position");
}
