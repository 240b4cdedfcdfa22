use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::border::Border;
use crate::column::{Column, ColumnData};
use crate::style::Styler;
use crate::table::{TableError, render_table_lines};

/// Fluent configuration and rendering of one table.
///
/// ```
/// use asciitable::TableBuilder;
///
/// let table = TableBuilder::new()
///     .header(["Name", "Count"])
///     .rows(vec![("first", 7), ("second", 21)])
///     .render()?;
/// assert_eq!(
///     table,
///     "+--------+-------+\n\
///      | Name   | Count |\n\
///      +--------+-------+\n\
///      |  first |     7 |\n\
///      +--------+-------+\n\
///      | second |    21 |\n\
///      +--------+-------+"
/// );
/// # Ok::<(), asciitable::TableError>(())
/// ```
pub struct TableBuilder {
    line_separator: String,
    border: Border,
    styler: Option<Box<dyn Styler>>,
    header: Option<Vec<Option<String>>>,
    footer: Option<Vec<Option<String>>>,
    columns: Option<Vec<Column>>,
    rows: Vec<Vec<Option<String>>>,
    deferred: Option<TableError>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            line_separator: "\n".to_string(),
            border: Border::BASIC_ASCII,
            styler: None,
            header: None,
            footer: None,
            columns: None,
            rows: Vec::new(),
            deferred: None,
        }
    }

    /// Separator inserted between output lines. Defaults to `"\n"`.
    pub fn line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// Border glyph set. Defaults to [`Border::BASIC_ASCII`].
    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Styling hook applied to every justified cell.
    pub fn styler(mut self, styler: impl Styler + 'static) -> Self {
        self.styler = Some(Box::new(styler));
        self
    }

    /// Header cells, one per column. Implies one left-aligned column per
    /// cell unless explicit columns are set. Mutually exclusive with
    /// [`columns`](Self::columns).
    pub fn header<S: Into<String>>(mut self, header: impl IntoIterator<Item = S>) -> Self {
        self.header = Some(header.into_iter().map(|cell| Some(cell.into())).collect());
        self
    }

    /// Footer cells, one per column. Mutually exclusive with
    /// [`columns`](Self::columns).
    pub fn footer<S: Into<String>>(mut self, footer: impl IntoIterator<Item = S>) -> Self {
        self.footer = Some(footer.into_iter().map(|cell| Some(cell.into())).collect());
        self
    }

    /// Full column configuration. Mutually exclusive with
    /// [`header`](Self::header) and [`footer`](Self::footer).
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns = Some(columns.into_iter().collect());
        self
    }

    /// Table data. Each element serialises to one row: sequence elements
    /// become cells, `null` becomes a missing cell, non-string scalars are
    /// rendered with their JSON representation, and a non-sequence row
    /// becomes a single cell. Serialisation failures are reported by the
    /// render call.
    pub fn rows<R: Serialize>(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        for row in rows {
            match serde_json::to_value(&row) {
                Ok(value) => self.rows.push(value_to_row(value)),
                Err(err) => {
                    self.deferred
                        .get_or_insert(TableError::Serialization(err.to_string()));
                }
            }
        }
        self
    }

    /// Derives columns and rows from a slice of objects: each
    /// [`ColumnData`] contributes one column and extracts that column's cell
    /// from every object.
    pub fn objects<T>(mut self, objects: &[T], columns: Vec<ColumnData<T>>) -> Self {
        self.rows = objects
            .iter()
            .map(|object| {
                columns
                    .iter()
                    .map(|column| Some(column.cell_value(object)))
                    .collect()
            })
            .collect();
        self.columns = Some(columns.into_iter().map(ColumnData::into_column).collect());
        self
    }

    /// Renders the table, joining its lines with the configured separator.
    pub fn render(self) -> Result<String, TableError> {
        let separator = self.line_separator.clone();
        Ok(self.into_lines()?.join(&separator))
    }

    /// Renders the table as individual lines, without separators.
    pub fn render_lines(self) -> Result<Vec<String>, TableError> {
        self.into_lines()
    }

    fn into_lines(self) -> Result<Vec<String>, TableError> {
        if let Some(err) = self.deferred {
            return Err(err);
        }
        let columns = match (self.columns, self.header, self.footer) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(TableError::ConflictingColumns);
            }
            (Some(columns), None, None) => columns,
            (None, header, footer) => implicit_columns(header, footer),
        };
        debug!(
            columns = columns.len(),
            rows = self.rows.len(),
            "rendering table"
        );
        Ok(render_table_lines(
            &self.border,
            &columns,
            &self.rows,
            self.styler.as_deref(),
        ))
    }
}

/// Columns synthesised from bare header and footer cell vectors: data stays
/// right-aligned, header and footer cells are left-aligned.
fn implicit_columns(
    header: Option<Vec<Option<String>>>,
    footer: Option<Vec<Option<String>>>,
) -> Vec<Column> {
    let header = header.unwrap_or_default();
    let footer = footer.unwrap_or_default();
    (0..header.len().max(footer.len()))
        .map(|idx| {
            let mut column = Column::new();
            if let Some(Some(text)) = header.get(idx) {
                column = column.header(text);
            }
            if let Some(Some(text)) = footer.get(idx) {
                column = column.footer(text);
            }
            column
        })
        .collect()
}

fn value_to_row(value: Value) -> Vec<Option<String>> {
    match value {
        Value::Array(cells) => cells.into_iter().map(value_to_cell).collect(),
        other => vec![value_to_cell(other)],
    }
}

fn value_to_cell(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Renders `rows` with the default border and no header, the shortest path
/// from data to table.
pub fn ascii_table<R: Serialize>(
    rows: impl IntoIterator<Item = R>,
) -> Result<String, TableError> {
    TableBuilder::new().rows(rows).render()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_cells_become_missing() {
        assert_eq!(
            value_to_row(json!(["a", null, 3])),
            vec![Some("a".to_string()), None, Some("3".to_string())]
        );
    }

    #[test]
    fn scalar_row_becomes_single_cell() {
        assert_eq!(value_to_row(json!(42)), vec![Some("42".to_string())]);
    }

    #[test]
    fn scalar_rows_render_as_one_column() {
        let table = TableBuilder::new().rows(vec![1, 22]).render().unwrap();
        assert_eq!(table, "+----+\n|  1 |\n+----+\n| 22 |\n+----+");
    }

    #[test]
    fn header_and_columns_conflict() {
        let result = TableBuilder::new()
            .header(["a"])
            .columns([Column::new()])
            .render();
        assert!(matches!(result, Err(TableError::ConflictingColumns)));
    }

    #[test]
    fn footer_and_columns_conflict() {
        let result = TableBuilder::new()
            .footer(["a"])
            .columns([Column::new()])
            .render();
        assert!(matches!(result, Err(TableError::ConflictingColumns)));
    }

    #[test]
    fn implicit_columns_cover_widest_of_header_and_footer() {
        let columns = implicit_columns(
            Some(vec![Some("h1".to_string())]),
            Some(vec![None, Some("f2".to_string())]),
        );
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].header_text(), Some("h1"));
        assert_eq!(columns[0].footer_text(), None);
        assert_eq!(columns[1].header_text(), None);
        assert_eq!(columns[1].footer_text(), Some("f2"));
    }
}
