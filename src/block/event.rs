//! Line classification types.

/// Highest heading level with a valid HTML tag.
pub const MAX_HTML_HEADING_LEVEL: usize = 6;

/// The literal fence delimiter line.
pub const FENCE: &str = "```";

/// Kind of list a list item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1.`, `2.`, ... markers, rendered as `<ol>`.
    Ordered,
    /// `-`, `*` or `+` markers, rendered as `<ul>`.
    Unordered,
}

impl ListKind {
    /// Opening tag for a list of this kind.
    pub fn open_tag(self) -> &'static str {
        match self {
            Self::Ordered => "<ol>",
            Self::Unordered => "<ul>",
        }
    }

    /// Closing tag for a list of this kind.
    pub fn close_tag(self) -> &'static str {
        match self {
            Self::Ordered => "</ol>",
            Self::Unordered => "</ul>",
        }
    }
}

/// Classification of a single input line outside a code block.
///
/// Text fields borrow from the classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#`-prefixed heading.
    Heading {
        /// Raw count of leading `#` characters (not capped).
        level: usize,
        /// Text following the single space after the `#` run.
        text: &'a str,
    },
    /// Ordered or unordered list item.
    ListItem {
        /// Which list the item belongs to.
        kind: ListKind,
        /// Item text with marker removed and whitespace trimmed.
        text: &'a str,
    },
    /// A code fence delimiter line.
    Fence,
    /// Empty or whitespace-only line.
    Blank,
    /// Anything else: paragraph content (trailing whitespace trimmed).
    Text(&'a str),
}

impl Block<'_> {
    /// Whether this line terminates an open paragraph and list.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Heading { .. } | Self::ListItem { .. } | Self::Fence)
    }
}
