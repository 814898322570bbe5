use rstest::rstest;

use super::*;

fn fixed(text: &str) -> Wildpart {
    Wildpart::Fixed(text.into())
}

fn group(text: &str) -> Wildpart {
    Wildpart::Group(text.into())
}

#[test]
fn test_builder_empty() {
    let wildcard = Builder::new().build();
    assert!(wildcard.is_empty());
    assert_eq!(wildcard.len(), 0);
    assert_eq!(wildcard.to_string(), "");
}

#[test]
fn test_builder_fixed_merges() {
    let mut builder = Builder::new();
    builder.append_fixed('a');
    builder.append_fixed('b');
    builder.append_fixed('c');
    assert_eq!(builder.build().parts(), &[fixed("abc")]);
}

#[test]
fn test_builder_fixed_after_wild() {
    let mut builder = Builder::new();
    builder.append_fixed('a');
    builder.append_wild();
    builder.append_fixed('b');
    assert_eq!(builder.build().parts(), &[fixed("a"), Wildpart::Wild, fixed("b")]);
}

#[test]
fn test_builder_kleene_collapses() {
    let mut builder = Builder::new();
    builder.append_kleene();
    builder.append_kleene();
    assert_eq!(builder.build().parts(), &[Wildpart::Kleene]);
}

#[test]
fn test_builder_wild_then_kleene() {
    let mut builder = Builder::new();
    builder.append_fixed('x');
    builder.append_wild();
    builder.append_kleene();
    assert_eq!(builder.build().parts(), &[fixed("x"), Wildpart::Kleene]);
}

#[test]
fn test_builder_many_wilds_then_kleene() {
    let mut builder = Builder::new();
    builder.append_wild();
    builder.append_wild();
    builder.append_wild();
    builder.append_kleene();
    assert_eq!(builder.build().parts(), &[Wildpart::Kleene]);
}

#[test]
fn test_builder_kleene_then_wild() {
    let mut builder = Builder::new();
    builder.append_kleene();
    builder.append_wild();
    builder.append_wild();
    assert_eq!(builder.build().parts(), &[Wildpart::Kleene]);
}

#[test]
fn test_builder_wilds_are_kept_apart() {
    let mut builder = Builder::new();
    builder.append_wild();
    builder.append_wild();
    assert_eq!(builder.build().parts(), &[Wildpart::Wild, Wildpart::Wild]);
}

#[test]
fn test_builder_group_merges() {
    let mut builder = Builder::new();
    builder.open_group();
    builder.append_group('a');
    builder.append_group('b');
    assert_eq!(builder.build().parts(), &[group("ab")]);
}

#[test]
fn test_builder_open_group_starts_new_part() {
    let mut builder = Builder::new();
    builder.open_group();
    builder.append_group('a');
    builder.open_group();
    builder.append_group('b');
    assert_eq!(builder.build().parts(), &[group("a"), group("b")]);
}

#[test]
fn test_builder_empty_group_leaves_no_part() {
    let mut builder = Builder::new();
    builder.append_fixed('a');
    builder.open_group();
    builder.append_fixed('b');
    assert_eq!(builder.build().parts(), &[fixed("ab")]);
}

#[rstest]
#[case(fixed("a*b"), r"a\*b")]
#[case(fixed(r"a\b"), r"a\\b")]
#[case(fixed("[x]?"), r"\[x\]\?")]
#[case(Wildpart::Wild, "?")]
#[case(Wildpart::Kleene, "*")]
#[case(group("a-z"), "[a-z]")]
#[case(group("*?"), "[*?]")]
#[case(group(r"a]b[\"), r"[a\]b\[\\]")]
fn test_part_display(#[case] part: Wildpart, #[case] expected: &str) {
    assert_eq!(part.to_string(), expected);
}

#[rstest]
#[case(fixed("a"), PartKind::Fixed)]
#[case(Wildpart::Wild, PartKind::Wild)]
#[case(Wildpart::Kleene, PartKind::Kleene)]
#[case(group("a"), PartKind::Group)]
fn test_part_kind(#[case] part: Wildpart, #[case] kind: PartKind) {
    assert_eq!(part.kind(), kind);
}

#[test]
fn test_wildcard_iteration() {
    let mut builder = Builder::new();
    builder.append_fixed('a');
    builder.append_kleene();
    let wildcard = builder.build();

    let kinds: Vec<_> = wildcard.iter().map(Wildpart::kind).collect();
    assert_eq!(kinds, [PartKind::Fixed, PartKind::Kleene]);

    let borrowed: Vec<_> = (&wildcard).into_iter().cloned().collect();
    assert_eq!(borrowed, wildcard.clone().into_parts());

    let owned: Vec<_> = wildcard.into_iter().collect();
    assert_eq!(owned, [fixed("a"), Wildpart::Kleene]);
}

#[cfg(feature = "serde")]
#[test]
fn test_wildcard_serialize() {
    let mut builder = Builder::new();
    builder.append_fixed('a');
    builder.append_wild();
    builder.append_kleene();
    builder.open_group();
    builder.append_group('x');
    let value = json::to_string(&builder.build()).unwrap();
    assert_eq!(value, r#"[{"fixed":"a"},"kleene",{"group":"x"}]"#);
}
