//! Property tests for the ordering and uniqueness rules.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use tessera_css::{Category, SelectorBuilder, SelectorError};

fn category(n: u8) -> Category {
    Category::ALL[usize::from(n) % Category::ALL.len()]
}

/// Sorted categories with repeated singletons dropped.
fn valid_sequence(raw: &[u8]) -> Vec<Category> {
    let mut categories: Vec<Category> = raw.iter().copied().map(category).collect();
    categories.sort();
    categories.dedup_by(|next, prev| next == prev && next.is_singleton());
    categories
}

#[quickcheck]
fn prop_valid_sequence_renders_concatenation(raw: Vec<u8>) -> bool {
    let categories = valid_sequence(&raw);
    let mut builder = SelectorBuilder::new();
    let mut expected = String::new();

    for (i, category) in categories.into_iter().enumerate() {
        let value = format!("v{i}");
        expected.push_str(&category.format(&value));
        if builder.append(category, &value).is_err() {
            return false;
        }
    }

    builder.render() == expected
}

#[quickcheck]
fn prop_lower_category_after_higher_fails(high: u8, low: u8) -> TestResult {
    let (high, low) = (category(high), category(low));
    if low >= high {
        return TestResult::discard();
    }

    let mut builder = SelectorBuilder::new();
    let _ = builder.append(high, "a").unwrap();
    TestResult::from_bool(
        builder.append(low, "b").unwrap_err()
            == SelectorError::OrderViolation {
                attempted: low,
                after: high,
            },
    )
}

#[quickcheck]
fn prop_render_is_idempotent(raw: Vec<u8>, reads: u8) -> bool {
    let mut builder = SelectorBuilder::new();
    for category in valid_sequence(&raw) {
        let _ = builder.append(category, "x").unwrap();
    }

    let first = builder.render();
    (0..reads % 16).all(|_| builder.render() == first)
}

#[quickcheck]
fn prop_failed_append_changes_nothing(raw: Vec<u8>, extra: u8) -> bool {
    let mut builder = SelectorBuilder::new();
    for category in valid_sequence(&raw) {
        let _ = builder.append(category, "x").unwrap();
    }

    let before = builder.clone();
    match builder.append(category(extra), "y") {
        Ok(_) => true,
        Err(_) => builder == before,
    }
}

#[quickcheck]
fn prop_repeated_singleton_is_duplicate(pick: u8, between: Vec<u8>) -> bool {
    let singletons = [Category::Element, Category::Id, Category::PseudoElement];
    let singleton = singletons[usize::from(pick) % singletons.len()];

    let mut builder = SelectorBuilder::new();
    let _ = builder.append(singleton, "first").unwrap();
    for category in valid_sequence(&between).into_iter().filter(|&c| c > singleton) {
        let _ = builder.append(category, "x").unwrap();
    }

    builder.append(singleton, "second").unwrap_err()
        == SelectorError::DuplicateSingleton(singleton)
}
