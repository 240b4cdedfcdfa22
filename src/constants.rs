/// Blank columns reserved on each side of justified cell text.
pub const MIN_PADDING: usize = 1;

/// Marker used when a paragraph is shortened by an ellipsis overflow mode.
pub const ELLIPSIS: char = '…';

/// Width cap applied to columns that do not set one explicitly.
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Number of glyph slots in a border table.
///
/// Matches the positional layout used by the original ascii-table
/// implementation, so custom glyph vectors remain portable.
pub const BORDER_SLOTS: usize = 29;
