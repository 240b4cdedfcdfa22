//! Layout engine for aligned, bordered text tables.
//!
//! Cells may hold multiple paragraphs, columns carry their own alignment and
//! width limits, and the border is a positional glyph set where any glyph
//! may be absent. The quickest way in is [`ascii_table`]:
//!
//! ```
//! use asciitable::ascii_table;
//!
//! let table = ascii_table(vec![vec!["11", "12"], vec!["21", "22"]])?;
//! assert_eq!(
//!     table,
//!     "+----+----+\n\
//!      | 11 | 12 |\n\
//!      +----+----+\n\
//!      | 21 | 22 |\n\
//!      +----+----+"
//! );
//! # Ok::<(), asciitable::TableError>(())
//! ```
//!
//! [`TableBuilder`] exposes headers, footers, per-column configuration,
//! border selection and cell styling.

mod border;
mod builder;
mod column;
mod constants;
mod line;
mod style;
mod table;

pub use border::Border;
pub use builder::{TableBuilder, ascii_table};
pub use column::{Column, ColumnData, HorizontalAlign, OverflowBehaviour};
pub use constants::{BORDER_SLOTS, DEFAULT_MAX_WIDTH, ELLIPSIS, MIN_PADDING};
pub use line::{Paragraphs, max_line_length, paragraphs, split_text_into_lines_of_max_length};
pub use style::Styler;
pub use table::{TableError, justify};
