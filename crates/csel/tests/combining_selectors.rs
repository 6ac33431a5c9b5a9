//! Integration tests for combining selectors with combinators.

use csel::{CombinedSelector, Combinator, Stringify, class, combine, element, id, stringify};
use insta::assert_snapshot;

#[test]
fn test_combine_adjacent_sibling() -> csel::Result<()> {
    let combined = combine(
        &element("div").id("main")?,
        "+",
        &element("table").id("data")?,
    );
    assert_eq!(combined.stringify(), "div#main + table#data");
    Ok(())
}

#[test]
fn test_combinator_enum_tokens() {
    let (ul, li) = (element("ul"), element("li"));

    assert_snapshot!(combine(&ul, Combinator::Child, &li), @"ul > li");
    assert_snapshot!(combine(&ul, Combinator::NextSibling, &li), @"ul + li");
    assert_snapshot!(combine(&ul, Combinator::SubsequentSibling, &li), @"ul ~ li");
}

#[test]
fn test_descendant_combinator_is_verbatim() {
    let combined = combine(&element("nav"), Combinator::Descendant, &element("a"));
    assert_eq!(combined.as_str(), "nav   a");
}

#[test]
fn test_combinator_string_is_not_validated() {
    let combined = combine(&class("a"), "||", &class("b"));
    assert_eq!(stringify(&combined), ".a || .b");
}

#[test]
fn test_combined_selectors_nest() -> csel::Result<()> {
    let inner = combine(&id("menu"), ">", &element("li").class("item")?);
    let outer = combine(&inner, "~", &element("li").pseudo_class("last-child")?);
    assert_snapshot!(outer, @"#menu > li.item ~ li:last-child");
    Ok(())
}

#[test]
fn test_combine_leaves_operands_usable() -> csel::Result<()> {
    let left = element("h1");
    let right = element("p").class("lead")?;
    let combined = combine(&left, "+", &right);

    // Operands are borrowed, so they can keep growing independently.
    let left = left.class("title")?;
    assert_eq!(left.stringify(), "h1.title");
    assert_eq!(right.stringify(), "p.lead");
    assert_eq!(combined.stringify(), "h1 + p.lead");
    Ok(())
}

#[test]
fn test_combined_display_matches_stringify() {
    let combined = CombinedSelector::new(&element("a"), ">", &element("b"));
    assert_eq!(combined.to_string(), combined.stringify());
}

#[test]
fn test_stringify_through_reference() {
    let sel = element("em");
    let by_ref: &dyn Stringify = &sel;
    assert_eq!(stringify(&by_ref), "em");
}
