//! Order-checked CSS selector assembly
//!
//! A [`SelectorBuilder`] accumulates the fragments of one compound selector
//! and refuses fragments that would break the required order of
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound):
//! type, id, class, attribute, pseudo-class, pseudo-element.
//!
//! Nothing here parses or matches selectors. Fragment values are written as
//! given; only the category sequence is checked.

mod category;

pub use category::Category;

use std::fmt;

use crate::error::SelectorError;

/// Accumulates selector fragments in order and renders the final string.
///
/// Each append returns `&mut Self` so calls chain with `?`:
///
/// ```
/// use tessera_css::SelectorBuilder;
///
/// let mut builder = SelectorBuilder::new();
/// let selector = builder.element("a")?.class("nav")?.pseudo_class("hover")?.render();
/// assert_eq!(selector, "a.nav:hover");
/// # Ok::<(), tessera_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Selector text written so far.
    rendered: String,
    /// Category of every successful append, in call order.
    appended: Vec<Category>,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rendered: String::new(),
            appended: Vec::new(),
        }
    }

    /// Append a type selector, written verbatim.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Element, value)
    }

    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Id, value)
    }

    /// Append `.value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Class, value)
    }

    /// Append `[value]`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn attr(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// Append `:value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// Append `::value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::PseudoElement, value)
    }

    /// Append a fragment of any category.
    ///
    /// A repeated singleton is reported as a duplicate even when it would
    /// also break the order (`#a.b#c`). On error the builder is unchanged.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::OrderViolation`] if `category` sorts before a
    ///   category already appended.
    /// - [`SelectorError::DuplicateSingleton`] if `category` is `element`, `id`
    ///   or `pseudo-element` and was already appended.
    pub fn append(
        &mut self,
        category: Category,
        value: &str,
    ) -> Result<&mut Self, SelectorError> {
        self.check(category)?;

        category.write_fragment(&mut self.rendered, value);
        self.appended.push(category);
        Ok(self)
    }

    fn check(&self, category: Category) -> Result<(), SelectorError> {
        if category.is_singleton() && self.appended.contains(&category) {
            return Err(SelectorError::DuplicateSingleton(category));
        }

        if let Some(after) = self.max_category().filter(|&max| category < max) {
            return Err(SelectorError::OrderViolation {
                attempted: category,
                after,
            });
        }

        Ok(())
    }

    /// Replace this builder's text with `left combinator right`.
    ///
    /// The combined text is not re-checked and the combinator token is not
    /// validated, so any token is written as given. The token is always
    /// padded with one space on each side; the whitespace token of
    /// [`Combinator::Descendant`](crate::Combinator::Descendant) therefore
    /// renders as three spaces. The recorded categories are left as they were.
    pub fn combine(&mut self, left: &Self, combinator: &str, right: &Self) -> &mut Self {
        self.rendered = format!("{} {combinator} {}", left.as_str(), right.as_str());
        self
    }

    /// Snapshot of the selector text.
    #[must_use]
    pub fn render(&self) -> String {
        self.rendered.clone()
    }

    /// Alias of [`SelectorBuilder::render`].
    #[must_use]
    pub fn stringify(&self) -> String {
        self.render()
    }

    /// Borrow the selector text without copying it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Categories appended so far, in call order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.appended
    }

    /// True if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    fn max_category(&self) -> Option<Category> {
        self.appended.iter().copied().max()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}
