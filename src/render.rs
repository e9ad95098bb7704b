//! HTML output writer.
//!
//! Output is a sequence of lines; the writer never builds a tree.

use crate::block::{ListKind, MAX_HTML_HEADING_LEVEL};
use crate::{HeadingLevels, Options, ParagraphStyle};

/// Line-break element between joined paragraph lines.
pub const LINE_BREAK: &str = "<br />";

/// HTML output writer collecting one string per output line.
///
/// # Example
/// ```
/// use markdown2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.write_heading(2, "Usage");
/// writer.write_line("<hr />");
///
/// assert_eq!(writer.into_lines(), vec!["<h2>Usage</h2>", "<hr />"]);
/// ```
pub struct HtmlWriter {
    lines: Vec<String>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            lines: Vec::with_capacity(64),
        }
    }

    /// Create with explicit capacity (in lines).
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    /// Append a static line.
    #[inline]
    pub fn write_line(&mut self, line: &'static str) {
        self.lines.push(line.to_owned());
    }

    /// Append a code block content line, escaping `<`, `>` and `&` if asked.
    pub fn write_code_line(&mut self, line: &str, escape: bool) {
        if escape {
            self.lines.push(html_escape::encode_text(line).into_owned());
        } else {
            self.lines.push(line.to_owned());
        }
    }

    /// Write `<h{level}>text</h{level}>` with the level used verbatim.
    pub fn write_heading(&mut self, level: usize, text: &str) {
        self.lines.push(format!("<h{level}>{text}</h{level}>"));
    }

    /// Write a list item.
    pub fn write_list_item(&mut self, text: &str) {
        self.lines.push(format!("<li>{text}</li>"));
    }

    /// Open a list of the given kind.
    #[inline]
    pub fn open_list(&mut self, kind: ListKind) {
        self.write_line(kind.open_tag());
    }

    /// Close a list of the given kind.
    #[inline]
    pub fn close_list(&mut self, kind: ListKind) {
        self.write_line(kind.close_tag());
    }

    /// Open a code block.
    #[inline]
    pub fn open_code_block(&mut self) {
        self.write_line("<pre><code>");
    }

    /// Close a code block.
    #[inline]
    pub fn close_code_block(&mut self) {
        self.write_line("</code></pre>");
    }

    /// Write a paragraph from its accumulated lines. Nothing is written for
    /// an empty slice.
    pub fn write_paragraph<S: AsRef<str>>(&mut self, lines: &[S], options: &Options) {
        if lines.is_empty() {
            return;
        }

        match options.paragraphs {
            ParagraphStyle::Joined => {
                let indent = " ".repeat(options.paragraph_indent);
                self.write_line("<p>");
                for (idx, line) in lines.iter().enumerate() {
                    if idx > 0 {
                        self.lines.push(format!("{indent}{LINE_BREAK}"));
                    }
                    self.lines.push(format!("{indent}{}", line.as_ref()));
                }
                self.write_line("</p>");
            }
            ParagraphStyle::PerLine => {
                for line in lines {
                    self.lines.push(format!("<p>{}</p>", line.as_ref()));
                }
            }
        }
    }

    /// Number of lines written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the writer and return the output lines.
    #[inline]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Consume the writer and return a newline-terminated document.
    pub fn into_string(self) -> String {
        crate::join_lines(&self.lines)
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag level for a heading with `count` leading `#` characters.
#[inline]
pub fn heading_tag_level(count: usize, policy: HeadingLevels) -> usize {
    match policy {
        HeadingLevels::Clamp => count.min(MAX_HTML_HEADING_LEVEL),
        HeadingLevels::Raw => count,
    }
}
