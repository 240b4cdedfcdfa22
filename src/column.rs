use crate::constants::DEFAULT_MAX_WIDTH;

/// Horizontal placement of text within a rendered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Policy for paragraphs wider than the column's content width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverflowBehaviour {
    /// Break the paragraph onto additional lines.
    #[default]
    Newline,
    /// Keep only the trailing characters.
    ClipLeft,
    /// Keep only the leading characters.
    ClipRight,
    /// Keep the trailing characters behind an ellipsis marker.
    EllipsisLeft,
    /// Keep the leading characters before an ellipsis marker.
    EllipsisRight,
}

/// Configuration of a single table column.
///
/// Columns are assembled with fluent setters and are immutable for the
/// duration of one render:
///
/// ```
/// use asciitable::{Column, HorizontalAlign};
///
/// let column = Column::new()
///     .header("Name")
///     .data_align(HorizontalAlign::Left)
///     .max_width(24);
/// assert_eq!(column.header_text(), Some("Name"));
/// ```
#[derive(Clone, Debug)]
pub struct Column {
    header: Option<String>,
    footer: Option<String>,
    header_align: HorizontalAlign,
    data_align: HorizontalAlign,
    footer_align: HorizontalAlign,
    min_width: usize,
    max_width: usize,
    overflow: OverflowBehaviour,
    visible: bool,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            header: None,
            footer: None,
            header_align: HorizontalAlign::Left,
            data_align: HorizontalAlign::Right,
            footer_align: HorizontalAlign::Left,
            min_width: 0,
            max_width: DEFAULT_MAX_WIDTH,
            overflow: OverflowBehaviour::default(),
            visible: true,
        }
    }
}

impl Column {
    /// A column with no header or footer, right-aligned data and the default
    /// width limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Header text for this column.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Footer text for this column.
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Horizontal alignment of the header cell.
    pub fn header_align(mut self, align: HorizontalAlign) -> Self {
        self.header_align = align;
        self
    }

    /// Horizontal alignment of all data cells in this column.
    pub fn data_align(mut self, align: HorizontalAlign) -> Self {
        self.data_align = align;
        self
    }

    /// Horizontal alignment of the footer cell.
    pub fn footer_align(mut self, align: HorizontalAlign) -> Self {
        self.footer_align = align;
        self
    }

    /// Minimum rendered width, including padding.
    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    /// Maximum rendered width, including padding. Content wider than this
    /// is wrapped or truncated per the overflow behaviour. Clamped to at
    /// least 1.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width.max(1);
        self
    }

    /// Sets the maximum width together with the overflow behaviour applied
    /// when content exceeds it.
    pub fn max_width_with(self, max_width: usize, overflow: OverflowBehaviour) -> Self {
        self.max_width(max_width).overflow(overflow)
    }

    /// Overflow behaviour for paragraphs wider than the content width.
    pub fn overflow(mut self, overflow: OverflowBehaviour) -> Self {
        self.overflow = overflow;
        self
    }

    /// Whether the column is rendered at all. Invisible columns are removed
    /// together with their cells before widths are resolved.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn header_text(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn footer_text(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn header_alignment(&self) -> HorizontalAlign {
        self.header_align
    }

    pub fn data_alignment(&self) -> HorizontalAlign {
        self.data_align
    }

    pub fn footer_alignment(&self) -> HorizontalAlign {
        self.footer_align
    }

    pub fn minimum_width(&self) -> usize {
        self.min_width
    }

    pub fn maximum_width(&self) -> usize {
        self.max_width
    }

    pub fn overflow_behaviour(&self) -> OverflowBehaviour {
        self.overflow
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Attach an accessor that extracts this column's cell text from a row
    /// object, for use with [`crate::TableBuilder::objects`].
    pub fn with<T>(self, getter: impl Fn(&T) -> String + 'static) -> ColumnData<T> {
        ColumnData {
            column: self,
            getter: Box::new(getter),
        }
    }
}

/// A [`Column`] paired with an accessor producing its cell text from a row
/// object.
pub struct ColumnData<T> {
    column: Column,
    getter: Box<dyn Fn(&T) -> String>,
}

impl<T> ColumnData<T> {
    /// Cell text for `object` in this column.
    pub fn cell_value(&self, object: &T) -> String {
        (self.getter)(object)
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    pub(crate) fn into_column(self) -> Column {
        self.column
    }
}
