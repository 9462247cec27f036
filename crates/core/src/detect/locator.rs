// Dredge is an open source secret scanner for web archives.
// Copyright (C) 2024 Dredge ApS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// A location of a match in a scanned string. Lines and columns are
/// 0-indexed; columns are byte offsets within their line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub start_idx: usize,
    pub end_idx: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub start_line_idx: usize,
    pub end_line_idx: usize,
}

impl Location {
    /// The (possibly multi-line) slice of `raw` containing the match,
    /// without the trailing newline.
    pub fn line<'a>(&self, raw: &'a str) -> &'a str {
        &raw[self.start_line_idx..self.end_line_idx]
    }
}

/// Maps byte indexes in a string to lines and columns.
pub struct Locator {
    line_starts: Vec<usize>,
}

impl Locator {
    pub fn new(raw: &str) -> Self {
        // First line starts before the buffer
        let mut line_starts = vec![0];

        for (i, b) in raw.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }

        // Last line stops at the end of the string
        line_starts.push(raw.len() + 1);

        Self { line_starts }
    }

    /// Resolve the half-open index pair `[start, end)` into a [`Location`].
    pub fn find(&self, start: usize, end: usize) -> Location {
        let last = self.line_starts.len() - 2;

        let mut start_line = 0;
        while start_line < last && self.line_starts[start_line + 1] <= start {
            start_line += 1;
        }

        let mut end_line = start_line;
        while end_line < last && self.line_starts[end_line + 1] <= end {
            end_line += 1;
        }

        Location {
            start_idx: start,
            end_idx: end,
            start_line,
            end_line,
            start_column: start - self.line_starts[start_line],
            end_column: end - self.line_starts[end_line],
            start_line_idx: self.line_starts[start_line],
            end_line_idx: self.line_starts[end_line + 1] - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_line() {
        let raw = "the quick brown fox";
        let loc = Locator::new(raw).find(4, 9);

        assert_eq!(loc.start_line, 0);
        assert_eq!(loc.end_line, 0);
        assert_eq!(loc.start_column, 4);
        assert_eq!(loc.end_column, 9);
        assert_eq!(loc.line(raw), raw);
    }

    #[test]
    fn second_line() {
        let raw = "first\nsecond\nthird";
        let loc = Locator::new(raw).find(6, 12);

        assert_eq!(loc.start_line, 1);
        assert_eq!(loc.end_line, 1);
        assert_eq!(loc.start_column, 0);
        assert_eq!(loc.end_column, 6);
        assert_eq!(loc.line(raw), "second");
    }

    #[test]
    fn spanning_lines() {
        let raw = "first\nsecond\nthird";
        let loc = Locator::new(raw).find(3, 8);

        assert_eq!(loc.start_line, 0);
        assert_eq!(loc.end_line, 1);
        assert_eq!(loc.line(raw), "first\nsecond");
    }

    #[test]
    fn trailing_newline() {
        let raw = "only\n";
        let loc = Locator::new(raw).find(0, 4);

        assert_eq!(loc.start_line, 0);
        assert_eq!(loc.end_line, 0);
        assert_eq!(loc.line(raw), "only");
    }

    #[test]
    fn empty_string() {
        let raw = "";
        let loc = Locator::new(raw).find(0, 0);

        assert_eq!(loc.start_line, 0);
        assert_eq!(loc.end_line, 0);
        assert_eq!(loc.start_column, 0);
        assert_eq!(loc.line(raw), "");
    }

    proptest! {
        #[test]
        fn location_invariants(
            raw in "[a-c\n]{0,64}",
            indexes in (0_usize..64, 0_usize..64),
        ) {
            let (a, b) = indexes;
            let start = a.min(raw.len());
            let end = start.max(b.min(raw.len()));

            let loc = Locator::new(&raw).find(start, end);

            // the containing lines contain the match
            prop_assert!(loc.start_line_idx <= start);
            prop_assert!(loc.end_line_idx >= end);
            prop_assert!(loc.line(&raw).contains(&raw[start..end]));

            // columns are offsets into their lines
            prop_assert_eq!(loc.start_column, start - loc.start_line_idx);
            prop_assert_eq!(loc.end_column, end - self::line_start(&raw, end));

            // the start line equals the number of newlines before the match
            let newlines = raw[..start].matches('\n').count();
            prop_assert_eq!(loc.start_line, newlines);
        }
    }

    fn line_start(raw: &str, idx: usize) -> usize {
        raw[..idx].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }
}
