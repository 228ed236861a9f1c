use super::*;

#[test]
fn renders_headings_and_paragraphs() {
    let html = render_markdown("# Title\n\nbody text");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<p>body text</p>"));
}

#[test]
fn renders_code_fences() {
    let html = render_markdown("```\nlet x = 1;\n```");
    assert!(html.contains("<pre><code>"));
}

#[test]
fn renders_tables_and_strikethrough_extensions() {
    let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));

    let html = render_markdown("~~gone~~");
    assert!(html.contains("<del>gone</del>"));
}

#[test]
fn empty_input_renders_empty_fragment() {
    assert_eq!(render_markdown(""), "");
}
