//! Line classifier.

use super::event::{Block, FENCE, ListKind};

/// Classify one line (without its terminator).
///
/// Trailing whitespace is ignored for classification. Code block state is
/// not considered here; the transcoder only calls this outside code blocks
/// (and uses [`is_fence`] inside them).
///
/// # Example
/// ```
/// use markdown2html::block::{classify_line, Block};
///
/// assert_eq!(
///     classify_line("## Install"),
///     Block::Heading { level: 2, text: "Install" }
/// );
/// assert_eq!(classify_line("   "), Block::Blank);
/// ```
pub fn classify_line(line: &str) -> Block<'_> {
    let line = line.trim_end();

    if line.is_empty() {
        return Block::Blank;
    }

    if line == FENCE {
        return Block::Fence;
    }

    if let Some(block) = try_heading(line) {
        return block;
    }

    if let Some(block) = try_unordered_item(line) {
        return block;
    }

    if let Some(block) = try_ordered_item(line) {
        return block;
    }

    Block::Text(line)
}

/// Whether the line is a fence delimiter (trailing whitespace ignored).
#[inline]
pub fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

/// Try to parse a heading: one or more `#`, a single space, then text.
fn try_heading(line: &str) -> Option<Block<'_>> {
    let bytes = line.as_bytes();
    let level = bytes.iter().take_while(|&&b| b == b'#').count();
    if level == 0 {
        return None;
    }

    // Must be followed by a space and at least one more character
    if bytes.get(level) != Some(&b' ') || bytes.len() <= level + 1 {
        return None;
    }

    Some(Block::Heading {
        level,
        text: &line[level + 1..],
    })
}

/// Try to parse an unordered item: `-`, `*` or `+`, a space, then text.
fn try_unordered_item(line: &str) -> Option<Block<'_>> {
    let bytes = line.as_bytes();
    if !matches!(bytes.first(), Some(b'-' | b'*' | b'+')) || bytes.get(1) != Some(&b' ') {
        return None;
    }

    list_item(ListKind::Unordered, &line[2..])
}

/// Try to parse an ordered item: digits, `.`, a space, then text.
fn try_ordered_item(line: &str) -> Option<Block<'_>> {
    let bytes = line.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || bytes.get(digits) != Some(&b'.') || bytes.get(digits + 1) != Some(&b' ') {
        return None;
    }

    list_item(ListKind::Ordered, &line[digits + 2..])
}

#[inline]
fn list_item(kind: ListKind, rest: &str) -> Option<Block<'_>> {
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some(Block::ListItem { kind, text })
}
