//! Document deserialization and `mappings` payload parsing.

use crate::document::{SourceMapDocument, SUPPORTED_VERSION};
use crate::index::{MappingIndex, Segment};
use crate::{logging, vlq, Result, SourceMapError};

/// Deserialize and validate the raw document text.
///
/// The version check runs before anything else looks at the document, so a
/// wrong revision is reported as [`SourceMapError::UnsupportedVersion`]
/// regardless of what the other fields contain.
pub fn parse_document(text: &str) -> Result<SourceMapDocument> {
    let document: SourceMapDocument = serde_json::from_str(text)
        .map_err(|e| SourceMapError::MalformedDocument(e.to_string()))?;
    if document.version != SUPPORTED_VERSION {
        return Err(SourceMapError::UnsupportedVersion(document.version));
    }
    Ok(document)
}

/// Build the mapping index from a validated document.
///
/// Splits the payload on `;` into generated lines (empty fields stay as
/// empty lines) and on `,` into segments, decoding each segment through the
/// VLQ decoder and resolving the delta protocol to absolute coordinates.
pub fn build_index(document: &SourceMapDocument) -> Result<MappingIndex> {
    logging::log_parse_started(document.mappings.len());

    let sources: Vec<String> = document
        .sources
        .iter()
        .map(|source| format!("{}{}", document.source_root, source))
        .collect();

    // Four running totals persist across the whole document; only the
    // generated column restarts per line.
    let mut source_index: i64 = 0;
    let mut original_line: i64 = 0;
    let mut original_column: i64 = 0;
    let mut name_index: i64 = 0;

    let mut lines = Vec::new();
    if !document.mappings.is_empty() {
        for (line_number, group) in document.mappings.split(';').enumerate() {
            let mut segments: Vec<Segment> = Vec::new();
            let mut generated_column: i64 = 0;
            if !group.is_empty() {
                for raw_segment in group.split(',') {
                    let fields = vlq::decode(raw_segment)?;
                    let Some(&column_delta) = fields.first() else {
                        return Err(SourceMapError::EmptySegment(line_number));
                    };
                    generated_column += i64::from(column_delta);
                    if let Some(&delta) = fields.get(1) {
                        source_index += i64::from(delta);
                    }
                    if let Some(&delta) = fields.get(2) {
                        original_line += i64::from(delta);
                    }
                    if let Some(&delta) = fields.get(3) {
                        original_column += i64::from(delta);
                    }
                    let has_name = if let Some(&delta) = fields.get(4) {
                        name_index += i64::from(delta);
                        true
                    } else {
                        false
                    };
                    segments.push(Segment {
                        generated_column: clamp_u32(generated_column),
                        source_index: clamp_u32(source_index),
                        original_line: clamp_u32(original_line),
                        original_column: clamp_u32(original_column),
                        name_index: has_name.then(|| clamp_u32(name_index)),
                    });
                }
            }
            lines.push(segments);
        }
    }

    let index = MappingIndex::new(
        lines,
        sources,
        document.sources_content.clone(),
        document.names.clone(),
    );
    logging::log_parse_completed(index.line_count(), index.segment_count());
    Ok(index)
}

fn clamp_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}
