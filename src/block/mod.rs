//! Block-level line classification.
//!
//! Every input line outside a code block is one of:
//! - Headings (`#` through any depth)
//! - Ordered list items (`1.`) and unordered list items (`-`, `*`, `+`)
//! - Code fences (a bare ```` ``` ```` line)
//! - Blank lines
//! - Paragraph text

mod event;
mod parser;

pub use event::{Block, FENCE, ListKind, MAX_HTML_HEADING_LEVEL};
pub use parser::{classify_line, is_fence};
