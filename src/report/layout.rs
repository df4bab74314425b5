//! Fixed-width column layout
//!
//! Every cell is produced by [`pad`], which takes its width, alignment and
//! fill explicitly, so no formatting state leaks from one cell into the next.

/// Width of every rule, banner line and table row
pub const LINE_WIDTH: usize = 80;

/// Width of the column holding the file of a checkpoint
pub const FILE_COL_WIDTH: usize = 30;

/// Width of the column holding the line of a checkpoint
pub const LINE_COL_WIDTH: usize = 6;

/// Width of the column holding the occurrence count
pub const COUNT_COL_WIDTH: usize = 10;

/// Width of the column holding the average duration
pub const AVERAGE_COL_WIDTH: usize = 15;

/// Width of the column holding the overall duration
pub const OVERALL_COL_WIDTH: usize = 15;

/// Separator placed between two columns
pub const COLUMN_SEPARATOR: char = '|';

/// Horizontal placement of text within a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Text first, fill after
    Left,
    /// Fill first, text after
    Right,
}

/// Fit `text` into exactly `width` characters.
///
/// Shorter text is padded with `fill` on the side opposite to `align`.
/// Longer text is truncated to its first `width` characters.
#[must_use]
pub fn pad(text: &str, width: usize, align: Align, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }

    let filler: String = std::iter::repeat_n(fill, width - len).collect();
    match align {
        Align::Left => format!("{text}{filler}"),
        Align::Right => format!("{filler}{text}"),
    }
}

/// A full-width line made of `fill`
#[must_use]
pub fn rule(fill: char) -> String {
    std::iter::repeat_n(fill, LINE_WIDTH).collect()
}

/// Center `title` in a full-width line filled with `fill`.
///
/// When the remaining space is odd, the extra fill character goes right
/// after the title.
#[must_use]
pub fn centered(title: &str, fill: char) -> String {
    let len = title.chars().count();
    if len >= LINE_WIDTH {
        return pad(title, LINE_WIDTH, Align::Left, fill);
    }

    let left = (LINE_WIDTH - len) / 2;
    let right = LINE_WIDTH - len - left;
    let left_fill: String = std::iter::repeat_n(fill, left).collect();
    let right_fill: String = std::iter::repeat_n(fill, right).collect();
    format!("{left_fill}{title}{right_fill}")
}

/// One table row: file, line, count, average and overall cells.
///
/// Cells are padded with spaces and joined by [`COLUMN_SEPARATOR`].
#[must_use]
pub fn row(file: &str, line: &str, count: &str, average: &str, overall: &str) -> String {
    [
        pad(file, FILE_COL_WIDTH, Align::Left, ' '),
        pad(line, LINE_COL_WIDTH, Align::Right, ' '),
        pad(count, COUNT_COL_WIDTH, Align::Right, ' '),
        pad(average, AVERAGE_COL_WIDTH, Align::Right, ' '),
        pad(overall, OVERALL_COL_WIDTH, Align::Right, ' '),
    ]
    .join(&COLUMN_SEPARATOR.to_string())
}
