//! Backward queries: original position to generated position.

use crate::logging;
use crate::mapper::{GeneratedLocation, SourceMap};

impl SourceMap {
    /// Map an original position to a generated position.
    ///
    /// An exact hit needs a segment on some generated line whose original
    /// line matches and whose original column is the closest one at or
    /// before the query column, followed on the same line by a segment
    /// past the query column; the generated column is then the query
    /// column's offset from that candidate. Lines that touch the original
    /// line without such a pair are kept as bare candidates; when no exact
    /// hit exists the second bare candidate line wins over the first, at
    /// generated column 0. Transpilers that expand one original line into
    /// several generated lines (constructor parameter properties) put the
    /// executable statement on the later line, which is why the second
    /// candidate is preferred.
    pub fn map_point_back(&self, line: u32, column: u32) -> Option<GeneratedLocation> {
        let mut first_best_line: Option<usize> = None;
        let mut second_best_line: Option<usize> = None;

        for (generated_line, segments) in self.index().iter_lines().enumerate() {
            // Closest original column at or before the query, on this line.
            let mut column_candidate: Option<u32> = None;
            for segment in segments {
                if segment.original_line != line {
                    // Past the original line with a bare candidate in hand:
                    // nothing better can follow.
                    if let Some(first) = first_best_line {
                        if generated_line > first && segment.original_line > line {
                            return Some(
                                self.bare_candidate_match(second_best_line.unwrap_or(first)),
                            );
                        }
                    }
                    continue;
                }
                if segment.original_column <= column {
                    column_candidate = Some(segment.original_column);
                } else if let Some(candidate) = column_candidate {
                    return Some(GeneratedLocation {
                        line: generated_line as u32,
                        column: column - candidate,
                        source: self.file().to_string(),
                        name: None,
                    });
                } else if first_best_line.is_none() {
                    first_best_line = Some(generated_line);
                } else if second_best_line.is_none() && first_best_line != Some(generated_line) {
                    second_best_line = Some(generated_line);
                }
            }
        }

        match second_best_line.or(first_best_line) {
            Some(best) => Some(self.bare_candidate_match(best)),
            None => {
                logging::log_reverse_unmapped(line, column);
                None
            }
        }
    }

    fn bare_candidate_match(&self, generated_line: usize) -> GeneratedLocation {
        GeneratedLocation {
            line: generated_line as u32,
            column: 0,
            source: self.file().to_string(),
            name: None,
        }
    }
}
