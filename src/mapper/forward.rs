//! Forward queries: generated position to original position.

use crate::logging;
use crate::mapper::{OriginalLocation, SourceMap};

impl SourceMap {
    /// Map a generated position to the original position of the rightmost
    /// segment at or before `column` on that line.
    ///
    /// Falls back to the first segment when the query column precedes every
    /// segment on a non-empty line. Returns `None` when the line is out of
    /// range or has no mapping information.
    pub fn map_point(&self, line: u32, column: u32) -> Option<OriginalLocation> {
        let Some(segments) = self.index().segments_of_line(line as usize) else {
            logging::log_point_unmapped(line, column);
            return None;
        };
        let segment = segments
            .iter()
            .rev()
            .find(|segment| segment.generated_column <= column)
            .or_else(|| segments.first());
        let Some(segment) = segment else {
            logging::log_point_unmapped(line, column);
            return None;
        };
        Some(OriginalLocation {
            line: segment.original_line,
            column: segment.original_column,
            source: self.index().source(segment.source_index).map(str::to_string),
            name: segment
                .name_index
                .and_then(|index| self.index().name(index))
                .map(str::to_string),
        })
    }

    /// Map a generated line to the original position of its first segment,
    /// with the column forced to 0.
    ///
    /// The first segment's source index is resolved without a bounds check;
    /// the caller must ensure the map's segments reference declared
    /// sources.
    pub fn map_line(&self, line: u32) -> Option<OriginalLocation> {
        let segments = self.index().segments_of_line(line as usize)?;
        let segment = segments.first()?;
        Some(OriginalLocation {
            line: segment.original_line,
            column: 0,
            source: Some(self.index().sources()[segment.source_index as usize].clone()),
            name: segment
                .name_index
                .and_then(|index| self.index().name(index))
                .map(str::to_string),
        })
    }
}
