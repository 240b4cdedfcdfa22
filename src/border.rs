use crate::constants::BORDER_SLOTS;
use crate::table::TableError;

/// Positional glyph table for every border and separator row of a table.
///
/// The 29 slots are bound, in order, to: top rule (left, fill, junction,
/// right), header row (left, column separator, right), header rule (4),
/// data row (3), inter-row rule (4), footer rule (4), footer row (3) and
/// bottom rule (4). Any slot may be absent; an absent *fill* glyph
/// suppresses that rule row entirely (it contributes zero output lines,
/// not a blank line).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Border([Option<char>; BORDER_SLOTS]);

/// Glyphs of one horizontal rule row.
#[derive(Clone, Copy)]
pub(crate) struct RuleGlyphs {
    pub left: Option<char>,
    pub fill: Option<char>,
    pub junction: Option<char>,
    pub right: Option<char>,
}

/// Glyphs framing the cells of one header, data or footer row.
#[derive(Clone, Copy)]
pub(crate) struct EdgeGlyphs {
    pub left: Option<char>,
    pub separator: Option<char>,
    pub right: Option<char>,
}

impl Border {
    /// No borders or separators at all; cells are framed by padding only.
    pub const NO_BORDERS: Border = Border([None; BORDER_SLOTS]);

    /// Every row boxed with `+`, `-` and `|`.
    pub const BASIC_ASCII: Border = Border([
        Some('+'),
        Some('-'),
        Some('+'),
        Some('+'),
        Some('|'),
        Some('|'),
        Some('|'),
        Some('+'),
        Some('-'),
        Some('+'),
        Some('+'),
        Some('|'),
        Some('|'),
        Some('|'),
        Some('+'),
        Some('-'),
        Some('+'),
        Some('+'),
        Some('+'),
        Some('-'),
        Some('+'),
        Some('+'),
        Some('|'),
        Some('|'),
        Some('|'),
        Some('+'),
        Some('-'),
        Some('+'),
        Some('+'),
    ]);

    /// Boxed table without rules between consecutive data rows.
    pub const BASIC_ASCII_NO_DATA_SEPARATORS: Border = Border([
        Some('+'),
        Some('-'),
        Some('+'),
        Some('+'),
        Some('|'),
        Some('|'),
        Some('|'),
        Some('+'),
        Some('-'),
        Some('+'),
        Some('+'),
        Some('|'),
        Some('|'),
        Some('|'),
        None,
        None,
        None,
        None,
        Some('+'),
        Some('-'),
        Some('+'),
        Some('+'),
        Some('|'),
        Some('|'),
        Some('|'),
        Some('+'),
        Some('-'),
        Some('+'),
        Some('+'),
    ]);

    /// Inner column separators and header/footer rules only.
    pub const BASIC_ASCII_NO_DATA_SEPARATORS_NO_OUTSIDE_BORDER: Border = Border([
        None,
        None,
        None,
        None,
        None,
        Some('|'),
        None,
        None,
        Some('-'),
        Some('+'),
        None,
        None,
        Some('|'),
        None,
        None,
        None,
        None,
        None,
        None,
        Some('-'),
        Some('+'),
        None,
        None,
        Some('|'),
        None,
        None,
        None,
        None,
        None,
    ]);

    /// Inner separators and rules, no outer frame.
    pub const BASIC_ASCII_NO_OUTSIDE_BORDER: Border = Border([
        None,
        None,
        None,
        None,
        None,
        Some('|'),
        None,
        None,
        Some('-'),
        Some('+'),
        None,
        None,
        Some('|'),
        None,
        None,
        Some('-'),
        Some('+'),
        None,
        None,
        Some('-'),
        Some('+'),
        None,
        None,
        Some('|'),
        None,
        None,
        None,
        None,
        None,
    ]);

    /// Unicode box-drawing variant.
    pub const FANCY_ASCII: Border = Border([
        Some('╔'),
        Some('═'),
        Some('╤'),
        Some('╗'),
        Some('║'),
        Some('│'),
        Some('║'),
        Some('╠'),
        Some('═'),
        Some('╪'),
        Some('╣'),
        Some('║'),
        Some('│'),
        Some('║'),
        Some('╟'),
        Some('─'),
        Some('┼'),
        Some('╢'),
        Some('╠'),
        Some('═'),
        Some('╪'),
        Some('╣'),
        Some('║'),
        Some('│'),
        Some('║'),
        Some('╚'),
        Some('═'),
        Some('╧'),
        Some('╝'),
    ]);

    /// Builds a border from a flat positional glyph vector.
    ///
    /// Fails unless the slice holds exactly [`BORDER_SLOTS`] entries; this
    /// is the compatibility adapter for glyph tables expressed in the
    /// original flat layout.
    pub fn from_slice(glyphs: &[Option<char>]) -> Result<Self, TableError> {
        let slots: [Option<char>; BORDER_SLOTS] =
            glyphs
                .try_into()
                .map_err(|_| TableError::InvalidBorderLength {
                    expected: BORDER_SLOTS,
                    found: glyphs.len(),
                })?;
        Ok(Border(slots))
    }

    /// The flat positional glyph vector backing this border.
    pub fn glyphs(&self) -> &[Option<char>; BORDER_SLOTS] {
        &self.0
    }

    pub(crate) fn top_rule(&self) -> RuleGlyphs {
        self.rule(0)
    }

    pub(crate) fn header_row(&self) -> EdgeGlyphs {
        self.edge(4)
    }

    pub(crate) fn header_rule(&self) -> RuleGlyphs {
        self.rule(7)
    }

    pub(crate) fn data_row(&self) -> EdgeGlyphs {
        self.edge(11)
    }

    pub(crate) fn row_rule(&self) -> RuleGlyphs {
        self.rule(14)
    }

    pub(crate) fn footer_rule(&self) -> RuleGlyphs {
        self.rule(18)
    }

    pub(crate) fn footer_row(&self) -> EdgeGlyphs {
        self.edge(22)
    }

    pub(crate) fn bottom_rule(&self) -> RuleGlyphs {
        self.rule(25)
    }

    fn rule(&self, base: usize) -> RuleGlyphs {
        RuleGlyphs {
            left: self.0[base],
            fill: self.0[base + 1],
            junction: self.0[base + 2],
            right: self.0[base + 3],
        }
    }

    fn edge(&self, base: usize) -> EdgeGlyphs {
        EdgeGlyphs {
            left: self.0[base],
            separator: self.0[base + 1],
            right: self.0[base + 2],
        }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::BASIC_ASCII
    }
}

impl TryFrom<&[Option<char>]> for Border {
    type Error = TableError;

    fn try_from(glyphs: &[Option<char>]) -> Result<Self, TableError> {
        Self::from_slice(glyphs)
    }
}
