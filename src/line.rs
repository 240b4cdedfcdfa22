//! Paragraph iteration and whitespace-preserving line splitting.

/// Iterator over the paragraphs of a cell's raw text.
///
/// Each CR, LF or CRLF sequence ends one paragraph. A trailing break yields
/// a final empty paragraph, and empty input yields a single empty paragraph,
/// so the iterator always produces at least one item.
pub struct Paragraphs<'a> {
    rest: Option<&'a str>,
}

/// Iterate over the paragraphs of `text`.
pub fn paragraphs(text: &str) -> Paragraphs<'_> {
    Paragraphs { rest: Some(text) }
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let text = self.rest?;
        match text.find(['\r', '\n']) {
            Some(pos) => {
                let skip = if text[pos..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = Some(&text[pos + skip..]);
                Some(&text[..pos])
            }
            None => {
                self.rest = None;
                Some(text)
            }
        }
    }
}

/// Widest paragraph of `text`, counted in chars.
pub fn max_line_length(text: &str) -> usize {
    paragraphs(text)
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}

/// Splits a paragraph into lines of at most `max_chars` characters.
///
/// Lines break at the last space at or before the limit when one exists past
/// the current position; that space is consumed and every other space is
/// kept, so `"here is    a  strange string"` at limit 8 becomes
/// `["here is ", "  a ", "strange", "string"]`. A word longer than the limit
/// is broken at exactly `max_chars`.
pub fn split_text_into_lines_of_max_length(text: &str, max_chars: usize) -> Vec<String> {
    debug_assert!(max_chars >= 1);
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut offset = 0;

    while offset < chars.len() && max_chars < chars.len() - offset {
        let window = offset + max_chars;
        match chars[..=window].iter().rposition(|&ch| ch == ' ') {
            Some(space) if offset < space => {
                lines.push(chars[offset..space].iter().collect());
                offset = space + 1;
            }
            _ => {
                lines.push(chars[offset..window].iter().collect());
                offset = window;
            }
        }
    }

    lines.push(chars[offset..].iter().collect());
    lines
}
