//! Inline substitution for paragraph text.
//!
//! Only code spans are recognized; everything else is copied through
//! untouched (no escaping, no emphasis or links).

mod code_span;

pub use code_span::{CodeSpan, find_code_spans};

use std::borrow::Cow;

/// Replace each `` `code` `` span with `<code>code</code>`.
///
/// Lines without a complete span are returned borrowed.
///
/// # Example
/// ```
/// use markdown2html::inline::substitute_code_spans;
///
/// assert_eq!(
///     substitute_code_spans("run `make` first"),
///     "run <code>make</code> first"
/// );
/// assert_eq!(substitute_code_spans("no code"), "no code");
/// ```
pub fn substitute_code_spans(line: &str) -> Cow<'_, str> {
    let spans = find_code_spans(line.as_bytes());
    if spans.is_empty() {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len() + spans.len() * 11);
    let mut last = 0;
    for span in &spans {
        let (start, end) = span.content_range();
        out.push_str(&line[last..span.opener_pos]);
        out.push_str("<code>");
        out.push_str(&line[start..end]);
        out.push_str("</code>");
        last = span.end();
    }
    out.push_str(&line[last..]);

    Cow::Owned(out)
}
