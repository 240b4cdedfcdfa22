use crate::column::Column;

/// Decorates justified cell lines just before they are written.
///
/// The hook runs after wrapping and justification, so implementations may
/// only add zero-width sequences such as ANSI escape codes. Returning lines
/// whose count or visible width differs from the input misaligns the table;
/// the engine does not validate this.
pub trait Styler {
    /// Style one header cell. `lines` holds every physical line of the
    /// cell, already justified to the column width.
    fn style_header(&self, column: &Column, col: usize, lines: Vec<String>) -> Vec<String> {
        let _ = (column, col);
        lines
    }

    /// Style one data cell. `lines` holds at least one element; it holds
    /// more only when the cell wrapped or contained embedded line breaks.
    fn style_cell(&self, column: &Column, row: usize, col: usize, lines: Vec<String>) -> Vec<String> {
        let _ = (column, row, col);
        lines
    }

    /// Style one footer cell.
    fn style_footer(&self, column: &Column, col: usize, lines: Vec<String>) -> Vec<String> {
        let _ = (column, col);
        lines
    }
}
