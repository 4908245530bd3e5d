use super::widget::{MatchSpan, Position};

/// Finds all occurrences of a query in text (case-insensitive)
pub struct SearchMatcher;

impl SearchMatcher {
    /// Find all matches of query in the given lines
    pub fn find_all(lines: &[String], query: &str) -> Vec<MatchSpan> {
        Self::find_in_range(lines, 0, query)
    }

    /// Find matches on `lines`, numbering them from `first_line`
    ///
    /// Used by the incremental highlighter, which feeds one chunk of the
    /// document at a time.
    pub fn find_in_range(lines: &[String], first_line: usize, query: &str) -> Vec<MatchSpan> {
        if query.is_empty() {
            return Vec::new();
        }

        let query_lower = query.to_lowercase();
        let mut matches = Vec::new();

        for (offset, line) in lines.iter().enumerate() {
            let line_num = first_line + offset;
            let lowered = LoweredLine::new(line);
            let mut search_start = 0;

            while let Some(byte_pos) = lowered.text[search_start..].find(&query_lower) {
                let start = search_start + byte_pos;
                let end = start + query_lower.len();

                matches.push(MatchSpan::new(
                    Position::new(line_num, lowered.column_at(start)),
                    Position::new(line_num, lowered.column_after(end)),
                ));

                // Move past this match; hits never overlap
                search_start = end;
            }
        }

        matches
    }
}

/// A lowercased line that remembers where each original character went
///
/// Lowercasing can change a character's length (`İ` becomes `i̇`), so
/// columns must be mapped back through the original characters.
struct LoweredLine {
    text: String,
    /// Byte offset in `text` where each original character starts
    starts: Vec<usize>,
}

impl LoweredLine {
    fn new(line: &str) -> Self {
        let mut text = String::with_capacity(line.len());
        let mut starts = Vec::with_capacity(line.len());
        for c in line.chars() {
            starts.push(text.len());
            text.extend(c.to_lowercase());
        }
        Self { text, starts }
    }

    /// Column of the original character whose lowered form holds `byte`
    fn column_at(&self, byte: usize) -> usize {
        self.starts.partition_point(|&s| s <= byte).saturating_sub(1)
    }

    /// Column just past the original character that ends at or after `byte`
    fn column_after(&self, byte: usize) -> usize {
        self.starts.partition_point(|&s| s < byte)
    }
}
