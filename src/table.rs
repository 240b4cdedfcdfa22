use std::cmp::max;

use tracing::trace;

use crate::border::{Border, EdgeGlyphs, RuleGlyphs};
use crate::column::{Column, HorizontalAlign, OverflowBehaviour};
use crate::constants::{ELLIPSIS, MIN_PADDING};
use crate::line::{max_line_length, paragraphs, split_text_into_lines_of_max_length};
use crate::style::Styler;

/// Errors emitted while configuring or rendering a table.
#[derive(thiserror::Error, Debug)]
pub enum TableError {
    /// The border glyph table does not have exactly
    /// [`crate::BORDER_SLOTS`] entries.
    #[error("border glyph table must have exactly {expected} entries, got {found}")]
    InvalidBorderLength {
        /// Required number of glyph slots.
        expected: usize,
        /// Number of slots actually provided.
        found: usize,
    },
    /// Both header/footer cells and explicit columns were configured.
    #[error("cannot set both header/footer and explicit columns")]
    ConflictingColumns,
    /// Converting user data into rows of text failed.
    #[error("failed to serialise row: {0}")]
    Serialization(String),
}

#[derive(Clone, Copy)]
enum RowKind {
    Header,
    Data(usize),
    Footer,
}

/// Renders the table into its output lines, in order, with suppressed rule
/// rows already dropped.
pub(crate) fn render_table_lines(
    border: &Border,
    raw_columns: &[Column],
    data: &[Vec<Option<String>>],
    styler: Option<&dyn Styler>,
) -> Vec<String> {
    let num_columns = data.iter().map(Vec::len).fold(raw_columns.len(), max);

    // Columns are padded to the widest data row, then invisible columns and
    // their cells are dropped. Cells beyond the declared columns are always
    // visible.
    let visible: Vec<usize> = (0..num_columns)
        .filter(|&idx| raw_columns.get(idx).is_none_or(Column::is_visible))
        .collect();
    let columns: Vec<Column> = visible
        .iter()
        .map(|&idx| raw_columns.get(idx).cloned().unwrap_or_default())
        .collect();
    let rows: Vec<Vec<Option<String>>> = data
        .iter()
        .map(|row| {
            visible
                .iter()
                .filter(|&&idx| idx < row.len())
                .map(|&idx| row[idx].clone())
                .collect()
        })
        .collect();

    let widths = resolve_widths(&columns, &rows);
    trace!(
        columns = columns.len(),
        rows = rows.len(),
        ?widths,
        "resolved column widths"
    );

    let mut lines = Vec::new();
    push_rule(&mut lines, border.top_rule(), &widths);

    if columns.iter().any(|column| column.header_text().is_some()) {
        let cells: Vec<Option<String>> = columns
            .iter()
            .map(|column| column.header_text().map(str::to_string))
            .collect();
        let aligns: Vec<HorizontalAlign> =
            columns.iter().map(Column::header_alignment).collect();
        lines.extend(render_cell_row(
            &columns,
            &cells,
            &aligns,
            &widths,
            border.header_row(),
            styler,
            RowKind::Header,
        ));
        push_rule(&mut lines, border.header_rule(), &widths);
    }

    let data_aligns: Vec<HorizontalAlign> = columns.iter().map(Column::data_alignment).collect();
    for (row_idx, row) in rows.iter().enumerate() {
        lines.extend(render_cell_row(
            &columns,
            row,
            &data_aligns,
            &widths,
            border.data_row(),
            styler,
            RowKind::Data(row_idx),
        ));
        if row_idx + 1 < rows.len() {
            push_rule(&mut lines, border.row_rule(), &widths);
        }
    }

    if columns.iter().any(|column| column.footer_text().is_some()) {
        push_rule(&mut lines, border.footer_rule(), &widths);
        let cells: Vec<Option<String>> = columns
            .iter()
            .map(|column| column.footer_text().map(str::to_string))
            .collect();
        let aligns: Vec<HorizontalAlign> =
            columns.iter().map(Column::footer_alignment).collect();
        lines.extend(render_cell_row(
            &columns,
            &cells,
            &aligns,
            &widths,
            border.footer_row(),
            styler,
            RowKind::Footer,
        ));
    }

    push_rule(&mut lines, border.bottom_rule(), &widths);
    lines
}

/// Final rendered width of every column: the widest paragraph across data
/// cells, header and footer, plus padding, clamped to the column's
/// min/max bounds.
fn resolve_widths(columns: &[Column], rows: &[Vec<Option<String>>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(col, column)| {
            let mut content = rows
                .iter()
                .filter_map(|row| row.get(col).and_then(Option::as_deref))
                .map(max_line_length)
                .max()
                .unwrap_or(0);
            if let Some(header) = column.header_text() {
                content = max(content, max_line_length(header));
            }
            if let Some(footer) = column.footer_text() {
                content = max(content, max_line_length(footer));
            }
            max(
                column.maximum_width().min(content + 2 * MIN_PADDING),
                column.minimum_width(),
            )
        })
        .collect()
}

/// Renders one logical header/data/footer row into its physical lines.
fn render_cell_row(
    columns: &[Column],
    cells: &[Option<String>],
    aligns: &[HorizontalAlign],
    widths: &[usize],
    glyphs: EdgeGlyphs,
    styler: Option<&dyn Styler>,
    kind: RowKind,
) -> Vec<String> {
    let cell_lines: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(col, &width)| {
            let text = cells.get(col).and_then(|cell| cell.as_deref()).unwrap_or("");
            let limit = width.saturating_sub(2 * MIN_PADDING);
            paragraphs(text)
                .flat_map(|paragraph| overflow(paragraph, limit, columns[col].overflow_behaviour()))
                .collect()
        })
        .collect();

    let height = cell_lines.iter().map(Vec::len).max().unwrap_or(0);

    let justified: Vec<Vec<String>> = cell_lines
        .iter()
        .enumerate()
        .map(|(col, lines)| {
            let justified: Vec<String> = (0..height)
                .map(|idx| {
                    let line = lines.get(idx).map(String::as_str).unwrap_or("");
                    justify(line, aligns[col], widths[col], MIN_PADDING)
                })
                .collect();
            match (styler, kind) {
                (Some(styler), RowKind::Header) => styler.style_header(&columns[col], col, justified),
                (Some(styler), RowKind::Data(row)) => {
                    styler.style_cell(&columns[col], row, col, justified)
                }
                (Some(styler), RowKind::Footer) => styler.style_footer(&columns[col], col, justified),
                (None, _) => justified,
            }
        })
        .collect();

    (0..height)
        .map(|idx| {
            let mut out = String::new();
            if let Some(left) = glyphs.left {
                out.push(left);
            }
            for (col, lines) in justified.iter().enumerate() {
                if col > 0 && let Some(separator) = glyphs.separator {
                    out.push(separator);
                }
                out.push_str(lines.get(idx).map(String::as_str).unwrap_or(""));
            }
            if let Some(right) = glyphs.right {
                out.push(right);
            }
            out
        })
        .collect()
}

/// Shortens or wraps one paragraph that must fit within `limit` chars of
/// content.
fn overflow(paragraph: &str, limit: usize, behaviour: OverflowBehaviour) -> Vec<String> {
    let length = paragraph.chars().count();
    if length <= limit {
        return vec![paragraph.to_string()];
    }
    if limit == 0 {
        // Column too narrow to hold any content next to its padding.
        return vec![String::new()];
    }
    match behaviour {
        OverflowBehaviour::Newline => split_text_into_lines_of_max_length(paragraph, limit),
        OverflowBehaviour::ClipLeft => vec![chars_from_end(paragraph, limit)],
        OverflowBehaviour::ClipRight => vec![paragraph.chars().take(limit).collect()],
        OverflowBehaviour::EllipsisLeft => {
            let mut out = String::from(ELLIPSIS);
            out.push_str(&chars_from_end(paragraph, limit - 1));
            vec![out]
        }
        OverflowBehaviour::EllipsisRight => {
            let mut out: String = paragraph.chars().take(limit - 1).collect();
            out.push(ELLIPSIS);
            vec![out]
        }
    }
}

fn chars_from_end(text: &str, count: usize) -> String {
    let skip = text.chars().count().saturating_sub(count);
    text.chars().skip(skip).collect()
}

/// Pads `text` with spaces to exactly `width` chars under `align`, keeping
/// `min_padding` blank columns on the near side.
///
/// Text already at or over the target width is returned unchanged;
/// truncation happens upstream in overflow handling. Centering puts the odd
/// extra space on the right.
pub fn justify(text: &str, align: HorizontalAlign, width: usize, min_padding: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }
    let left = match align {
        HorizontalAlign::Left => min_padding,
        HorizontalAlign::Center => (width - length) / 2,
        HorizontalAlign::Right => (width - length).saturating_sub(min_padding),
    };
    let mut out = String::with_capacity(width.max(text.len()));
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take((width - length).saturating_sub(left)));
    out
}

fn push_rule(lines: &mut Vec<String>, glyphs: RuleGlyphs, widths: &[usize]) {
    if let Some(rule) = compose_rule(glyphs, widths) {
        lines.push(rule);
    }
}

/// Draws one horizontal rule row, or `None` when the fill glyph is absent
/// and the row is suppressed entirely.
fn compose_rule(glyphs: RuleGlyphs, widths: &[usize]) -> Option<String> {
    let fill = glyphs.fill?;
    let mut out = String::new();
    if let Some(left) = glyphs.left {
        out.push(left);
    }
    for (col, &width) in widths.iter().enumerate() {
        if col > 0 && let Some(junction) = glyphs.junction {
            out.push(junction);
        }
        out.extend(std::iter::repeat(fill).take(width));
    }
    if let Some(right) = glyphs.right {
        out.push(right);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn overflow_clip_and_ellipsis_fixtures() {
        let paragraph = "Long first header";
        assert_eq!(
            overflow(paragraph, 16, OverflowBehaviour::ClipRight),
            vec!["Long first heade"]
        );
        assert_eq!(
            overflow(paragraph, 16, OverflowBehaviour::ClipLeft),
            vec!["ong first header"]
        );
        assert_eq!(
            overflow(paragraph, 16, OverflowBehaviour::EllipsisRight),
            vec!["Long first head…"]
        );
        assert_eq!(
            overflow(paragraph, 16, OverflowBehaviour::EllipsisLeft),
            vec!["…ng first header"]
        );
    }

    #[test]
    fn overflow_fit_passes_through() {
        assert_eq!(
            overflow("short", 16, OverflowBehaviour::ClipRight),
            vec!["short"]
        );
    }

    #[test]
    fn overflow_degenerate_limit_clips_to_empty() {
        for behaviour in [
            OverflowBehaviour::Newline,
            OverflowBehaviour::ClipLeft,
            OverflowBehaviour::ClipRight,
            OverflowBehaviour::EllipsisLeft,
            OverflowBehaviour::EllipsisRight,
        ] {
            assert_eq!(overflow("anything", 0, behaviour), vec![""]);
        }
    }

    #[test]
    fn resolved_width_honours_min_even_without_content() {
        let columns = vec![Column::new().min_width(4)];
        let rows = vec![vec![Some("1".to_string())]];
        assert_eq!(resolve_widths(&columns, &rows), vec![4]);
    }

    #[test]
    fn resolved_width_caps_at_max() {
        let columns = vec![Column::new().max_width(8)];
        let rows = vec![vec![Some("a rather long cell".to_string())]];
        assert_eq!(resolve_widths(&columns, &rows), vec![8]);
    }

    // A column with no content still gets its padding width.
    #[test]
    fn missing_cells_count_as_empty() {
        let columns = vec![Column::new(), Column::new()];
        let rows = vec![vec![Some("11".to_string())]];
        assert_eq!(resolve_widths(&columns, &rows), vec![4, 2]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_resolved_widths_stay_within_bounds(
            cell in "[ a-z]{0,40}",
            min_width in 0usize..20,
            max_width in 1usize..30,
        ) {
            let columns = vec![Column::new().min_width(min_width).max_width(max_width)];
            let rows = vec![vec![Some(cell)]];
            let width = resolve_widths(&columns, &rows)[0];
            prop_assert!(width >= min_width);
            prop_assert!(width <= max_width.max(min_width));
        }

        #[test]
        fn prop_justify_is_idempotent_and_exact(
            text in "[a-z]{0,12}",
            width in 0usize..20,
        ) {
            for align in [HorizontalAlign::Left, HorizontalAlign::Center, HorizontalAlign::Right] {
                let once = justify(&text, align, width, MIN_PADDING);
                prop_assert_eq!(once.chars().count(), width.max(text.chars().count()));
                let twice = justify(&once, align, width, MIN_PADDING);
                prop_assert_eq!(&once, &twice);
            }
        }

        #[test]
        fn prop_justify_is_noop_for_wide_text(text in "[a-z]{5,20}") {
            let width = text.chars().count();
            for align in [HorizontalAlign::Left, HorizontalAlign::Center, HorizontalAlign::Right] {
                prop_assert_eq!(justify(&text, align, width, MIN_PADDING), text.clone());
                prop_assert_eq!(justify(&text, align, width - 1, MIN_PADDING), text.clone());
            }
        }
    }
}
