//! Column-position table extraction.
//!
//! Fixed-width CLI tables are sliced by the offsets at which their column
//! labels appear in the header line. Free-text cells (device IDs, platform
//! strings, capability lists) may contain spaces, so splitting on whitespace
//! is not an option.

use crate::error::ParseError;

/// A required table column and the header labels it may appear under.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Key used to look the cell up in a [`Row`].
    pub name: &'static str,

    /// Accepted header spellings, tried in order.
    pub labels: &'static [&'static str],
}

impl Column {
    /// Create a column definition.
    pub const fn new(name: &'static str, labels: &'static [&'static str]) -> Self {
        Self { name, labels }
    }
}

/// Column offsets discovered from a header line, in left-to-right order.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    offsets: Vec<(&'static str, usize)>,
}

impl ColumnLayout {
    /// Locate every column label in `header`.
    ///
    /// Fails with [`ParseError::IncompleteColumns`] listing the primary label
    /// of each column that could not be found.
    pub fn locate(
        format: &'static str,
        header: &str,
        columns: &[Column],
    ) -> Result<Self, ParseError> {
        let mut offsets = Vec::with_capacity(columns.len());
        let mut missing = Vec::new();

        for column in columns {
            match column.labels.iter().find_map(|label| header.find(label)) {
                Some(offset) => offsets.push((column.name, offset)),
                None => missing.push(column.labels.first().copied().unwrap_or(column.name)),
            }
        }

        if !missing.is_empty() {
            return Err(ParseError::IncompleteColumns { format, missing });
        }

        offsets.sort_by_key(|&(_, offset)| offset);
        Ok(Self { offsets })
    }

    /// Byte offset of a column's label in the header.
    pub fn offset(&self, name: &str) -> Option<usize> {
        self.offsets
            .iter()
            .find(|(column, _)| *column == name)
            .map(|&(_, offset)| offset)
    }

    /// Slice a data line into trimmed cells.
    ///
    /// Each cell spans from its column offset to the next column's offset; the
    /// last cell runs to end of line. Short lines yield empty trailing cells.
    pub fn extract<'a>(&self, line: &'a str) -> Row<'a> {
        let cells = self
            .offsets
            .iter()
            .enumerate()
            .map(|(i, &(name, start))| {
                let end = self.offsets.get(i + 1).map(|&(_, next)| next);
                (name, slice_clamped(line, start, end).trim())
            })
            .collect();
        Row { cells }
    }
}

/// One data line split into named cells.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    cells: Vec<(&'static str, &'a str)>,
}

impl<'a> Row<'a> {
    /// The trimmed cell for `name`, or the empty string if unknown.
    pub fn get(&self, name: &str) -> &'a str {
        self.cells
            .iter()
            .find(|(column, _)| *column == name)
            .map_or("", |&(_, value)| value)
    }
}

/// Slice `line[start..end]`, clamped to the line and to char boundaries.
pub(crate) fn slice_clamped(line: &str, start: usize, end: Option<usize>) -> &str {
    let start = floor_char_boundary(line, start.min(line.len()));
    let end = floor_char_boundary(line, end.unwrap_or(line.len()).min(line.len()));
    if start >= end { "" } else { &line[start..end] }
}

fn floor_char_boundary(line: &str, mut index: usize) -> usize {
    while !line.is_char_boundary(index) {
        index -= 1;
    }
    index
}
