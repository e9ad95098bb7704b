use markdown2html::{HeadingLevels, Options, ParagraphStyle, to_html, to_html_with_options, transcode};
use pretty_assertions::assert_eq;

#[test]
fn heading() {
    assert_eq!(to_html("# Title\n"), "<h1>Title</h1>\n");
}

#[test]
fn unordered_list_grouping() {
    assert_eq!(to_html("- a\n- b\n"), "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
}

#[test]
fn ordered_list_grouping() {
    assert_eq!(to_html("1. a\n2. b\n"), "<ol>\n<li>a</li>\n<li>b</li>\n</ol>\n");
}

#[test]
fn mixed_unordered_markers_share_one_list() {
    assert_eq!(
        to_html("- a\n* b\n+ c\n"),
        "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>\n"
    );
}

#[test]
fn paragraph_lines_joined_with_break() {
    assert_eq!(
        to_html("line one\nline two\n"),
        "<p>\nline one\n<br />\nline two\n</p>\n"
    );
}

#[test]
fn code_fence() {
    assert_eq!(
        to_html("```\ncode here\n```\n"),
        "<pre><code>\ncode here\n</code></pre>\n"
    );
}

#[test]
fn empty_input() {
    assert_eq!(to_html(""), "");
    assert_eq!(to_html("\n\n   \n"), "");
}

#[test]
fn heading_terminates_list_and_paragraph() {
    assert_eq!(
        to_html("- a\n# H\ntext\n## I\n"),
        "<ul>\n<li>a</li>\n</ul>\n<h1>H</h1>\n<p>\ntext\n</p>\n<h2>I</h2>\n"
    );
}

#[test]
fn switching_list_kind_closes_previous() {
    assert_eq!(
        to_html("- a\n1. b\n- c\n"),
        "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>\n<ul>\n<li>c</li>\n</ul>\n"
    );
}

#[test]
fn blank_line_splits_lists() {
    assert_eq!(
        to_html("- a\n\n- b\n"),
        "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>\n"
    );
}

#[test]
fn blank_line_splits_paragraphs() {
    assert_eq!(to_html("a\n\nb\n"), "<p>\na\n</p>\n<p>\nb\n</p>\n");
}

#[test]
fn whitespace_only_line_is_blank() {
    assert_eq!(to_html("a\n \t \nb\n"), "<p>\na\n</p>\n<p>\nb\n</p>\n");
}

#[test]
fn deep_heading_clamped_by_default() {
    assert_eq!(to_html("######## deep\n"), "<h6>deep</h6>\n");
}

#[test]
fn deep_heading_raw_count() {
    let options = Options {
        heading_levels: HeadingLevels::Raw,
        ..Options::default()
    };
    assert_eq!(to_html_with_options("######## deep\n", &options), "<h8>deep</h8>\n");
}

#[test]
fn inline_code_in_paragraph() {
    assert_eq!(
        to_html("call `main()` now\n"),
        "<p>\ncall <code>main()</code> now\n</p>\n"
    );
}

#[test]
fn inline_code_not_applied_to_headings_or_items() {
    assert_eq!(
        to_html("# The `x` flag\n- use `y`\n"),
        "<h1>The `x` flag</h1>\n<ul>\n<li>use `y`</li>\n</ul>\n"
    );
}

#[test]
fn code_block_is_verbatim() {
    assert_eq!(
        to_html("```\n# not heading\n- not item\n`not code`\n\n```\n"),
        "<pre><code>\n# not heading\n- not item\n`not code`\n\n</code></pre>\n"
    );
}

#[test]
fn unterminated_fence_closed_at_end() {
    assert_eq!(to_html("```\nx\n"), "<pre><code>\nx\n</code></pre>\n");
}

#[test]
fn fence_with_info_string_is_text() {
    assert_eq!(to_html("```rust\n"), "<p>\n```rust\n</p>\n");
}

#[test]
fn list_item_text_trimmed() {
    assert_eq!(to_html("-    spaced   \n"), "<ul>\n<li>spaced</li>\n</ul>\n");
}

#[test]
fn bare_markers_are_text() {
    assert_eq!(to_html("# \n"), "<p>\n#\n</p>\n");
    assert_eq!(to_html("- \n"), "<p>\n-\n</p>\n");
    assert_eq!(to_html("1.\n"), "<p>\n1.\n</p>\n");
}

#[test]
fn per_line_paragraphs() {
    let options = Options {
        paragraphs: ParagraphStyle::PerLine,
        ..Options::default()
    };
    assert_eq!(
        to_html_with_options("line one\nline two\n\n# H\n", &options),
        "<p>line one</p>\n<p>line two</p>\n<h1>H</h1>\n"
    );
}

#[test]
fn indented_paragraph_body() {
    let options = Options {
        paragraph_indent: 4,
        ..Options::default()
    };
    assert_eq!(
        to_html_with_options("a\nb\n", &options),
        "<p>\n    a\n    <br />\n    b\n</p>\n"
    );
}

#[test]
fn transcode_is_pure() {
    let input = ["- a", "text", "```", "x"];
    assert_eq!(transcode(input), transcode(input));
}

#[test]
fn html_is_not_escaped() {
    assert_eq!(to_html("a <b> & c\n"), "<p>\na <b> & c\n</p>\n");
}
