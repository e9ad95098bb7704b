//! Single-pass line transcoder.
//!
//! Carried state between lines is limited to the open list kind, whether a
//! code block is open, and the pending paragraph lines.

use smallvec::SmallVec;
use tracing::trace;

use crate::Options;
use crate::block::{Block, ListKind, classify_line, is_fence};
use crate::inline::substitute_code_spans;
use crate::render::{HtmlWriter, heading_tag_level};

/// Streaming Markdown-subset to HTML line transducer.
///
/// Feed lines with [`push_line`](Self::push_line), then call
/// [`finish`](Self::finish) to close whatever is still open.
///
/// # Example
/// ```
/// use markdown2html::{LineTranscoder, Options};
///
/// let options = Options::default();
/// let mut transcoder = LineTranscoder::new(&options);
/// transcoder.push_line("- a");
/// transcoder.push_line("- b");
/// assert_eq!(
///     transcoder.finish(),
///     vec!["<ul>", "<li>a</li>", "<li>b</li>", "</ul>"]
/// );
/// ```
pub struct LineTranscoder<'o> {
    options: &'o Options,
    writer: HtmlWriter,
    /// Kind of list currently open, if any. Never more than one.
    open_list: Option<ListKind>,
    /// Inside a fenced code block.
    in_code_block: bool,
    /// Pending paragraph lines, already inline-substituted.
    paragraph: SmallVec<[String; 4]>,
}

impl<'o> LineTranscoder<'o> {
    /// Create a transcoder with empty state.
    pub fn new(options: &'o Options) -> Self {
        Self {
            options,
            writer: HtmlWriter::new(),
            open_list: None,
            in_code_block: false,
            paragraph: SmallVec::new(),
        }
    }

    /// Create a transcoder sized for roughly `lines` input lines.
    pub fn with_capacity(options: &'o Options, lines: usize) -> Self {
        Self {
            writer: HtmlWriter::with_capacity(lines + lines / 4),
            ..Self::new(options)
        }
    }

    /// Process one input line (without its terminator).
    pub fn push_line(&mut self, line: &str) {
        if self.in_code_block {
            if is_fence(line) {
                self.writer.close_code_block();
                self.in_code_block = false;
            } else {
                self.writer.write_code_line(line, self.options.escape_code);
            }
            return;
        }

        let block = classify_line(line);
        trace!(?block, "classified line");

        if block.is_structural() {
            self.flush_paragraph();
        }

        match block {
            Block::Fence => {
                self.close_list();
                self.writer.open_code_block();
                self.in_code_block = true;
            }
            Block::Heading { level, text } => {
                self.close_list();
                let tag_level = heading_tag_level(level, self.options.heading_levels);
                self.writer.write_heading(tag_level, text);
            }
            Block::ListItem { kind, text } => {
                if self.open_list != Some(kind) {
                    self.close_list();
                    self.writer.open_list(kind);
                    self.open_list = Some(kind);
                }
                self.writer.write_list_item(text);
            }
            Block::Blank => {
                self.close_list();
                self.flush_paragraph();
            }
            Block::Text(text) => {
                self.close_list();
                self.paragraph.push(substitute_code_spans(text).into_owned());
            }
        }
    }

    /// Close any open list, paragraph and code block, and return the output.
    ///
    /// A code block without a closing fence is closed here.
    pub fn finish(mut self) -> Vec<String> {
        self.close_list();
        self.flush_paragraph();
        if self.in_code_block {
            trace!("closing unterminated code block at end of input");
            self.writer.close_code_block();
            self.in_code_block = false;
        }
        self.writer.into_lines()
    }

    /// Currently open list kind.
    #[inline]
    pub fn open_list(&self) -> Option<ListKind> {
        self.open_list
    }

    /// Whether a code block is open.
    #[inline]
    pub fn in_code_block(&self) -> bool {
        self.in_code_block
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.open_list.take() {
            self.writer.close_list(kind);
        }
    }

    fn flush_paragraph(&mut self) {
        self.writer.write_paragraph(self.paragraph.as_slice(), self.options);
        self.paragraph.clear();
    }
}
