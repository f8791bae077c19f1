//! Integration tests for joining selectors with combinators.

use tessera_css::{Combinator, SelectorBuilder, SelectorFactory};

fn div_with_id() -> SelectorBuilder {
    let mut builder = SelectorFactory::element("div").unwrap();
    let _ = builder.id("id").unwrap();
    builder
}

fn span_with_class() -> SelectorBuilder {
    let mut builder = SelectorFactory::element("span").unwrap();
    let _ = builder.class("cls").unwrap();
    builder
}

#[test]
fn test_combine_child() {
    let combined = SelectorFactory::combine(&div_with_id(), ">", &span_with_class());
    assert_eq!(combined.render(), "div#id > span.cls");
}

#[test]
fn test_combine_with_typed_combinator() {
    let combined = SelectorFactory::combine(
        &div_with_id(),
        Combinator::SubsequentSibling.as_str(),
        &span_with_class(),
    );
    assert_eq!(combined.render(), "div#id ~ span.cls");
}

#[test]
fn test_combine_nests() {
    let inner = SelectorFactory::combine(&div_with_id(), "+", &span_with_class());
    let outer = SelectorFactory::combine(
        &SelectorFactory::element("main").unwrap(),
        ">",
        &inner,
    );
    assert_eq!(outer.render(), "main > div#id + span.cls");
}

#[test]
fn test_combine_overwrites_existing_text() {
    let mut builder = SelectorFactory::element("section").unwrap();
    let _ = builder.combine(&div_with_id(), ">", &span_with_class());
    assert_eq!(builder.render(), "div#id > span.cls");
}

#[test]
fn test_combine_keeps_recorded_categories() {
    // The text is replaced but the element already used still counts.
    let mut builder = SelectorFactory::element("section").unwrap();
    let _ = builder.combine(&div_with_id(), ">", &span_with_class());
    assert!(builder.element("p").is_err());
    let _ = builder.class("extra").unwrap();
    assert_eq!(builder.render(), "div#id > span.cls.extra");
}

#[test]
fn test_unrecognized_combinator_is_written_as_given() {
    let combined = SelectorFactory::combine(&div_with_id(), "/deep/", &span_with_class());
    assert_eq!(combined.render(), "div#id /deep/ span.cls");
}

#[test]
fn test_descendant_token_is_padded_like_any_other() {
    let combined = SelectorFactory::combine(
        &div_with_id(),
        Combinator::Descendant.as_str(),
        &span_with_class(),
    );
    assert_eq!(combined.render(), "div#id   span.cls");
}
