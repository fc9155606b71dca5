use super::html::HtmlRenderer;
use super::markdown::MarkdownRenderer;
use super::tree::TreeRenderer;
use super::{render, OutputFormat, Render};
use crate::config::Config;
use crate::entry::Entry;
use crate::outline::{build, DepthRange, Node};

fn scenario() -> Node {
    build(
        vec![
            Entry::new(2, "a", "Intro"),
            Entry::new(3, "a-detail", "Detail"),
            Entry::new(2, "b", "Next"),
        ],
        DepthRange::default(),
    )
    .unwrap()
}

fn skip_level() -> Node {
    build(
        vec![Entry::new(2, "x", "X"), Entry::new(4, "y", "Y")],
        DepthRange::default(),
    )
    .unwrap()
}

#[test]
fn test_html_nests_lists() {
    let html = HtmlRenderer { scroll_offset: 40 }.render(&scenario());
    let expected = "\
<ul class=\"automenu\" data-offset=\"40\">
  <li><a href=\"#a\">Intro</a>
    <ul>
      <li><a href=\"#a-detail\">Detail</a></li>
    </ul>
  </li>
  <li><a href=\"#b\">Next</a></li>
</ul>
";
    assert_eq!(html, expected);
}

#[test]
fn test_html_filler_has_list_but_no_item() {
    let html = HtmlRenderer { scroll_offset: 0 }.render(&skip_level());
    let expected = "\
<ul class=\"automenu\" data-offset=\"0\">
  <li><a href=\"#x\">X</a>
    <ul>
      <ul>
        <li><a href=\"#y\">Y</a></li>
      </ul>
    </ul>
  </li>
</ul>
";
    assert_eq!(html, expected);
    assert_eq!(html.matches("<li>").count(), 2);
}

#[test]
fn test_html_escapes_labels() {
    let root = build(
        vec![Entry::new(2, "q\"a", "Q&A <fast>")],
        DepthRange::default(),
    )
    .unwrap();
    let html = HtmlRenderer { scroll_offset: 40 }.render(&root);
    assert!(html.contains(">Q&amp;A &lt;fast&gt;</a>"));
    assert!(html.contains("href=\"#q&quot;a\""));
}

#[test]
fn test_empty_outline_renders_nothing() {
    let root = Node::container();
    assert_eq!(HtmlRenderer { scroll_offset: 40 }.render(&root), "");
    assert_eq!(MarkdownRenderer.render(&root), "");
    assert_eq!(TreeRenderer.render(&root), "");
}

#[test]
fn test_markdown_bullets() {
    let md = MarkdownRenderer.render(&scenario());
    assert_eq!(md, "- [Intro](#a)\n  - [Detail](#a-detail)\n- [Next](#b)\n");

    let skipped = MarkdownRenderer.render(&skip_level());
    assert_eq!(skipped, "- [X](#x)\n  -\n    - [Y](#y)\n");
}

#[test]
fn test_markdown_deep_first_entry_stays_a_list() {
    let root = build(vec![Entry::new(4, "deep", "Deep")], DepthRange::default()).unwrap();
    assert_eq!(MarkdownRenderer.render(&root), "-\n  -\n    - [Deep](#deep)\n");
}

#[test]
fn test_markdown_never_indents_past_previous_bullet() {
    let root = build(
        vec![Entry::new(1, "top", "Top"), Entry::new(6, "bottom", "Bottom")],
        DepthRange::new(1, 6).unwrap(),
    )
    .unwrap();
    let md = MarkdownRenderer.render(&root);
    assert_eq!(
        md,
        "- [Top](#top)\n  -\n    -\n      -\n        -\n          - [Bottom](#bottom)\n"
    );

    let mut previous = 0;
    for line in md.lines() {
        let indent = line.len() - line.trim_start().len();
        assert!(indent <= previous + 2, "over-indented line {line:?} in {md:?}");
        assert!(line.trim_start().starts_with('-'));
        previous = indent;
    }
}

#[test]
fn test_markdown_escapes_brackets() {
    let root = build(
        vec![Entry::new(2, "arrays", "Arrays [T; N]")],
        DepthRange::default(),
    )
    .unwrap();
    assert_eq!(
        MarkdownRenderer.render(&root),
        "- [Arrays \\[T; N\\]](#arrays)\n"
    );
}

#[test]
fn test_tree_drawing() {
    let text = TreeRenderer.render(&scenario());
    assert_eq!(
        text,
        "├── Intro (#a)\n│   └── Detail (#a-detail)\n└── Next (#b)\n"
    );

    let skipped = TreeRenderer.render(&skip_level());
    assert_eq!(skipped, "└── X (#x)\n    └── ┄\n        └── Y (#y)\n");
}

#[test]
fn test_json_round_trips_structure() {
    let root = skip_level();
    let json = render(&root, OutputFormat::Json, &Config::default()).unwrap();
    let parsed: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, root);
}

#[test]
fn test_render_uses_configured_offset() {
    let config = Config {
        scroll_offset: 12,
        ..Config::default()
    };
    let html = render(&scenario(), OutputFormat::Html, &config).unwrap();
    assert!(html.starts_with("<ul class=\"automenu\" data-offset=\"12\">"));
}
