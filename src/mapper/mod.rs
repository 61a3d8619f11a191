//! The query engine: an immutable index answering positional queries.

mod backward;
mod forward;

use std::fmt;
use std::io::Read;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;

use crate::index::MappingIndex;
use crate::parser;
use crate::{Result, SourceMapError};

/// Prefix of an inline source map data URL as emitted by bundlers.
const DATA_URL_PREFIX: &str = "data:application/json;base64,";

/// A position in original authored source, as resolved by a forward query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalLocation {
    /// Original line, 0-based.
    pub line: u32,
    /// Original column, 0-based.
    pub column: u32,
    /// Resolved source file name; `None` when the segment references no
    /// declared source.
    pub source: Option<String>,
    /// Resolved symbol name, when the segment carries one.
    pub name: Option<String>,
}

impl fmt::Display for OriginalLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source.as_deref().unwrap_or("<unknown>"),
            self.line,
            self.column
        )?;
        if let Some(name) = &self.name {
            write!(f, " ({name})")?;
        }
        Ok(())
    }
}

/// A position in generated code, as resolved by a backward query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLocation {
    /// Generated line, 0-based.
    pub line: u32,
    /// Generated column, 0-based.
    pub column: u32,
    /// The document's declared output file.
    pub source: String,
    /// Resolved symbol name; the backward scan resolves none.
    pub name: Option<String>,
}

impl fmt::Display for GeneratedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.line, self.column)
    }
}

/// A parsed version 3 source map, ready to answer forward and backward
/// positional queries.
///
/// Built once from the document text and immutable afterwards, so a single
/// instance can serve any number of concurrent readers.
#[derive(Debug, Clone)]
pub struct SourceMap {
    file: String,
    index: MappingIndex,
}

impl SourceMap {
    /// Parse a source map from its document text.
    pub fn parse(text: &str) -> Result<Self> {
        let document = parser::parse_document(text)?;
        let index = parser::build_index(&document)?;
        Ok(Self {
            file: document.file,
            index,
        })
    }

    /// Parse a source map from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| SourceMapError::MalformedDocument(e.to_string()))?;
        Self::parse(&text)
    }

    /// Parse an inline `data:application/json;base64,` source map URL.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let payload = url.strip_prefix(DATA_URL_PREFIX).ok_or_else(|| {
            SourceMapError::MalformedDocument("not an inline source map data URL".to_string())
        })?;
        let bytes = BASE64_STANDARD.decode(payload).map_err(|e| {
            SourceMapError::MalformedDocument(format!("undecodable data URL payload: {e}"))
        })?;
        let text = String::from_utf8(bytes).map_err(|e| {
            SourceMapError::MalformedDocument(format!("data URL payload is not UTF-8: {e}"))
        })?;
        Self::parse(&text)
    }

    /// The document's declared output file name.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The underlying mapping index.
    pub fn index(&self) -> &MappingIndex {
        &self.index
    }

    /// Embedded content of one original source, when present.
    pub fn source_content(&self, source_index: u32) -> Option<&str> {
        self.index.source_content(source_index)
    }

    /// One line of embedded original source content, 0-based.
    pub fn source_line(&self, source_index: u32, line: u32) -> Option<&str> {
        self.index.source_line(source_index, line)
    }
}
