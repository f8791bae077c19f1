//! Errors raised while appending selector fragments.

use thiserror::Error;

use crate::selector::Category;

/// Misuse of a [`SelectorBuilder`](crate::SelectorBuilder).
///
/// Both kinds are caller errors: the builder is left untouched and the
/// append can simply not be retried as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A fragment was appended after a fragment that must come later.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// Category of the rejected fragment.
        attempted: Category,
        /// Highest category already in the selector.
        after: Category,
    },

    /// `element`, `id` or `pseudo-element` was appended a second time.
    #[error("{0} should not occur more than once inside the selector")]
    DuplicateSingleton(Category),
}
