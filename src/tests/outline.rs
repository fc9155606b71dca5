use super::{build, DepthRange, Node, OutlineBuilder, Transition};
use crate::entry::Entry;
use crate::error::OutlineError;
use proptest::prelude::*;
use rstest::rstest;

fn entries(spec: &[(usize, &str)]) -> Vec<Entry> {
    spec.iter()
        .map(|(depth, id)| Entry::new(*depth, *id, id.to_uppercase()))
        .collect()
}

fn ids(nodes: &[Node]) -> Vec<Option<&str>> {
    nodes
        .iter()
        .map(|n| n.entry.as_ref().map(|e| e.id.as_str()))
        .collect()
}

fn default_build(spec: &[(usize, &str)]) -> Node {
    build(entries(spec), DepthRange::default()).unwrap()
}

#[test]
fn test_empty_input_yields_bare_root() {
    let root = default_build(&[]);
    assert!(root.is_filler());
    assert!(root.children.is_empty());
    assert_eq!(root.height(), 0);
}

#[test]
fn test_single_entry_creates_one_level() {
    let root = default_build(&[(2, "a")]);
    assert_eq!(ids(&root.children), vec![Some("a")]);
    assert!(root.children[0].children.is_empty());
}

#[test]
fn test_intro_detail_next_scenario() {
    let input = vec![
        Entry::new(2, "a", "Intro"),
        Entry::new(3, "a-detail", "Detail"),
        Entry::new(2, "b", "Next"),
    ];
    let root = build(input, DepthRange::new(2, 4).unwrap()).unwrap();

    assert_eq!(ids(&root.children), vec![Some("a"), Some("b")]);
    assert_eq!(ids(&root.children[0].children), vec![Some("a-detail")]);
    assert!(root.children[1].children.is_empty());
    assert_eq!(root.children[0].entry.as_ref().unwrap().label, "Intro");
}

#[test]
fn test_skip_level_inserts_single_filler() {
    let root = default_build(&[(2, "x"), (4, "y")]);

    assert_eq!(ids(&root.children), vec![Some("x")]);
    let x = &root.children[0];
    assert_eq!(x.children.len(), 1);
    let filler = &x.children[0];
    assert!(filler.is_filler());
    assert_eq!(ids(&filler.children), vec![Some("y")]);
}

#[test]
fn test_first_entry_deeper_than_start_keeps_filler_above_it() {
    let root = default_build(&[(3, "deep"), (2, "top")]);

    assert_eq!(ids(&root.children), vec![None, Some("top")]);
    assert_eq!(ids(&root.children[0].children), vec![Some("deep")]);
}

#[test]
fn test_same_depth_is_flat() {
    let root = default_build(&[(3, "a"), (3, "b"), (3, "c")]);

    assert_eq!(root.children.len(), 1);
    let filler = &root.children[0];
    assert!(filler.is_filler());
    assert_eq!(ids(&filler.children), vec![Some("a"), Some("b"), Some("c")]);
    assert!(filler.children.iter().all(|n| n.children.is_empty()));
}

#[test]
fn test_up_walk_returns_to_top_level() {
    let root = default_build(&[(2, "a"), (3, "b"), (4, "c"), (2, "d")]);

    assert_eq!(ids(&root.children), vec![Some("a"), Some("d")]);
    assert_eq!(ids(&root.children[0].children), vec![Some("b")]);
    assert_eq!(ids(&root.children[0].children[0].children), vec![Some("c")]);
    assert!(root.children[1].children.is_empty());
}

#[test]
fn test_shallower_into_filler_level_becomes_sibling_of_filler() {
    let root = default_build(&[(2, "x"), (4, "y"), (3, "z")]);

    let x = &root.children[0];
    assert_eq!(ids(&x.children), vec![None, Some("z")]);
    assert_eq!(ids(&x.children[0].children), vec![Some("y")]);
}

#[test]
fn test_repeated_deep_jumps_create_fresh_fillers() {
    let root = default_build(&[(2, "a"), (4, "b"), (2, "c"), (4, "d")]);

    assert_eq!(ids(&root.children), vec![Some("a"), Some("c")]);
    for (parent, child) in [(0, "b"), (1, "d")] {
        let filler = &root.children[parent].children[0];
        assert!(filler.is_filler());
        assert_eq!(ids(&filler.children), vec![Some(child)]);
    }
}

#[test]
fn test_wide_range_synthesises_every_skipped_level() {
    let range = DepthRange::new(1, 6).unwrap();
    let root = build(entries(&[(1, "h1"), (6, "h6")]), range).unwrap();

    let mut node = &root.children[0];
    for _ in 0..4 {
        assert_eq!(node.children.len(), 1);
        node = &node.children[0];
        assert!(node.is_filler());
    }
    assert_eq!(ids(&node.children), vec![Some("h6")]);
    assert_eq!(root.height(), 6);
}

#[rstest]
#[case(1, 2, Transition::Deeper)]
#[case(2, 5, Transition::Deeper)]
#[case(4, 2, Transition::Shallower)]
#[case(3, 3, Transition::Same)]
fn test_transition_classification(
    #[case] current: usize,
    #[case] depth: usize,
    #[case] expected: Transition,
) {
    assert_eq!(Transition::classify(current, depth), expected);
}

#[rstest]
#[case(0, 2)]
#[case(3, 2)]
fn test_invalid_bounds_rejected(#[case] start: usize, #[case] end: usize) {
    assert!(matches!(
        DepthRange::new(start, end),
        Err(OutlineError::InvalidBounds { .. })
    ));
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn test_out_of_range_entry_is_invalid(#[case] depth: usize) {
    let input = vec![Entry::new(2, "ok", "Ok"), Entry::new(depth, "bad", "Bad")];
    let err = build(input, DepthRange::default()).unwrap_err();

    match err {
        OutlineError::InvalidEntry { depth: d, id, .. } => {
            assert_eq!(d, depth);
            assert_eq!(id, "bad");
        }
        other => panic!("expected InvalidEntry, got {other:?}"),
    }
}

#[test]
fn test_duplicate_identifier_surfaces() {
    let input = entries(&[(2, "a"), (3, "b"), (2, "a")]);
    let err = build(input, DepthRange::default()).unwrap_err();
    assert!(matches!(err, OutlineError::DuplicateIdentifier { id } if id == "a"));
}

#[test]
fn test_builder_is_reusable() {
    let builder = OutlineBuilder::new(DepthRange::new(1, 3).unwrap());
    let first = builder.build(entries(&[(1, "a"), (2, "b")])).unwrap();
    let second = builder.build(entries(&[(1, "a"), (2, "b")])).unwrap();
    assert_eq!(first, second);
    assert_eq!(builder.range().end(), 3);
}

#[test]
fn test_empty_label_is_kept() {
    let root = build(vec![Entry::new(2, "blank", "")], DepthRange::default()).unwrap();
    assert_eq!(root.children[0].entry.as_ref().unwrap().label, "");
}

#[test]
fn test_serialises_without_empty_fields() {
    let root = default_build(&[(2, "a")]);
    let json = serde_json::to_string(&root).unwrap();
    assert_eq!(
        json,
        r#"{"children":[{"entry":{"depth":2,"id":"a","label":"A"}}]}"#
    );
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(2usize..=4, 0..48).prop_map(|depths| {
        depths
            .into_iter()
            .enumerate()
            .map(|(i, depth)| Entry::new(depth, format!("e{i}"), format!("Entry {i}")))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_every_entry_appears_once(input in arbitrary_entries()) {
        let root = build(input.clone(), DepthRange::default()).unwrap();
        prop_assert_eq!(root.entry_count(), input.len());
    }

    #[test]
    fn prop_preorder_matches_input_order(input in arbitrary_entries()) {
        let root = build(input.clone(), DepthRange::default()).unwrap();
        let seen: Vec<Entry> = root.entries().cloned().collect();
        prop_assert_eq!(seen, input);
    }

    #[test]
    fn prop_structural_level_follows_depth(input in arbitrary_entries()) {
        let range = DepthRange::default();
        let root = build(input, range).unwrap();

        let mut mismatches = Vec::new();
        root.walk(|node, level| {
            if let Some(entry) = &node.entry {
                if range.level(entry.depth) != level {
                    mismatches.push(entry.id.clone());
                }
            }
            for child in &node.children {
                if let (Some(parent), Some(child)) = (&node.entry, &child.entry) {
                    if child.depth != parent.depth + 1 {
                        mismatches.push(child.id.clone());
                    }
                }
            }
        });
        prop_assert!(mismatches.is_empty(), "misplaced: {:?}", mismatches);
    }
}
