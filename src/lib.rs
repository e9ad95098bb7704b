//! markdown2html: line-oriented Markdown subset to HTML converter
//!
//! Converts a small Markdown subset in one forward pass over lines:
//! headings, flat ordered and unordered lists, fenced code blocks,
//! paragraphs, and inline code spans.
//!
//! # Design Principles
//! - No AST: each line is classified and rendered immediately
//! - No regex: byte-level prefix checks
//! - No hidden state: everything carried between lines lives in one
//!   [`LineTranscoder`] per call
//! - One HTML construct per output line

pub mod block;
pub mod convert;
pub mod error;
pub mod inline;
pub mod render;
pub mod transcoder;

// Re-export primary types
pub use block::{Block, ListKind, classify_line};
pub use convert::{Invocation, convert_file};
pub use error::Error;
pub use render::HtmlWriter;
pub use transcoder::LineTranscoder;

use tracing::debug;

/// How consecutive text lines form paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphStyle {
    /// One `<p>` around all lines, separated by `<br />` lines.
    #[default]
    Joined,
    /// One `<p>line</p>` per text line.
    PerLine,
}

/// How heading tags are derived from the `#` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevels {
    /// Cap the tag at `<h6>`.
    #[default]
    Clamp,
    /// Use the raw `#` count, even past 6.
    Raw,
}

/// Rendering options.
///
/// The defaults give the canonical output; the other values reproduce
/// older dialects of the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Paragraph grouping.
    pub paragraphs: ParagraphStyle,
    /// Heading tag policy for more than six `#`.
    pub heading_levels: HeadingLevels,
    /// Spaces prefixed to each line inside a joined paragraph.
    pub paragraph_indent: usize,
    /// HTML-escape code block contents instead of passing them through.
    pub escape_code: bool,
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases. Every output line is
/// terminated by `\n`; empty input gives an empty string.
///
/// # Example
/// ```
/// let html = markdown2html::to_html("# Hello\n\nWorld\n");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>\nWorld\n</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    join_lines(&transcode_with_options(input.lines(), options))
}

/// Transcode Markdown lines into HTML lines with default options.
///
/// Lines must not include their terminators.
pub fn transcode<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    transcode_with_options(lines, &Options::default())
}

/// Transcode Markdown lines into HTML lines.
pub fn transcode_with_options<I, S>(lines: I, options: &Options) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = lines.into_iter();
    let mut transcoder = LineTranscoder::with_capacity(options, lines.size_hint().0);
    let mut count = 0usize;
    for line in lines {
        transcoder.push_line(line.as_ref());
        count += 1;
    }
    let html = transcoder.finish();
    debug!(input_lines = count, output_lines = html.len(), "transcoded");
    html
}

/// Decode UTF-8 input and transcode it.
///
/// Fails with [`Error::Encoding`] if the bytes are not valid UTF-8.
pub fn transcode_bytes(input: &[u8], options: &Options) -> Result<Vec<String>, Error> {
    let text = std::str::from_utf8(input)?;
    Ok(transcode_with_options(text.lines(), options))
}

/// Join HTML lines into a document, terminating every line with `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let size = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut out = String::with_capacity(size);
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}
