//! Code span detection.
//!
//! A code span is a single backtick, at least one non-backtick byte, and a
//! single closing backtick. Unmatched backticks are literal text.

use memchr::memchr;
use smallvec::SmallVec;

/// A resolved code span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpan {
    /// Position of the opening backtick.
    pub opener_pos: usize,
    /// Position of the closing backtick.
    pub closer_pos: usize,
}

impl CodeSpan {
    /// Get the content range (between the backticks).
    pub fn content_range(&self) -> (usize, usize) {
        (self.opener_pos + 1, self.closer_pos)
    }

    /// End of the span (one past the closing backtick).
    pub fn end(&self) -> usize {
        self.closer_pos + 1
    }
}

/// Find all code spans in a line, left to right.
///
/// An opener pairs with the next backtick. If that pair would enclose
/// nothing (`` `` ``), the first backtick is literal and the second one
/// becomes the candidate opener.
pub fn find_code_spans(text: &[u8]) -> SmallVec<[CodeSpan; 4]> {
    let mut spans = SmallVec::new();
    let mut pos = 0;

    while let Some(rel) = memchr(b'`', &text[pos..]) {
        let opener_pos = pos + rel;
        let after = opener_pos + 1;
        let Some(rel_close) = memchr(b'`', &text[after..]) else {
            break;
        };
        let closer_pos = after + rel_close;

        if closer_pos == after {
            pos = closer_pos;
            continue;
        }

        spans.push(CodeSpan {
            opener_pos,
            closer_pos,
        });
        pos = closer_pos + 1;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_code_span() {
        let spans = find_code_spans(b"hello `code` world");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content_range(), (7, 11)); // "code"
        assert_eq!(spans[0].end(), 12);
    }

    #[test]
    fn test_multiple_code_spans() {
        let spans = find_code_spans(b"`a` and `b`");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].content_range(), (9, 10));
    }

    #[test]
    fn test_unmatched_backtick() {
        assert!(find_code_spans(b"it`s fine").is_empty());
    }

    #[test]
    fn test_odd_backticks() {
        // Third backtick has no partner
        let spans = find_code_spans(b"`a` b`");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_empty_span_is_literal() {
        assert!(find_code_spans(b"``").is_empty());

        // Second backtick of the empty pair opens the real span
        let spans = find_code_spans(b"``x`");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content_range(), (2, 3));
    }

    #[test]
    fn test_no_backticks() {
        assert!(find_code_spans(b"plain text").is_empty());
    }
}
