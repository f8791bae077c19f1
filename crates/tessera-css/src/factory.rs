//! One-call entry points that start a new selector.

use crate::error::SelectorError;
use crate::selector::{Category, SelectorBuilder};

/// Starts a fresh [`SelectorBuilder`] per call.
///
/// ```
/// use tessera_css::SelectorFactory;
///
/// let selector = SelectorFactory::id("main")?.class("a")?.class("b")?.render();
/// assert_eq!(selector, "#main.a.b");
/// # Ok::<(), tessera_css::SelectorError>(())
/// ```
///
/// The first append on an empty builder always succeeds; the `Result` keeps
/// the signature uniform with the builder methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorFactory;

impl SelectorFactory {
    /// New builder starting with a type selector.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn element(value: &str) -> Result<SelectorBuilder, SelectorError> {
        Self::start(Category::Element, value)
    }

    /// New builder starting with `#value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn id(value: &str) -> Result<SelectorBuilder, SelectorError> {
        Self::start(Category::Id, value)
    }

    /// New builder starting with `.value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn class(value: &str) -> Result<SelectorBuilder, SelectorError> {
        Self::start(Category::Class, value)
    }

    /// New builder starting with `[value]`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn attr(value: &str) -> Result<SelectorBuilder, SelectorError> {
        Self::start(Category::Attribute, value)
    }

    /// New builder starting with `:value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_class(value: &str) -> Result<SelectorBuilder, SelectorError> {
        Self::start(Category::PseudoClass, value)
    }

    /// New builder starting with `::value`.
    ///
    /// # Errors
    ///
    /// See [`SelectorBuilder::append`].
    pub fn pseudo_element(value: &str) -> Result<SelectorBuilder, SelectorError> {
        Self::start(Category::PseudoElement, value)
    }

    /// New builder holding `left combinator right`.
    #[must_use]
    pub fn combine(
        left: &SelectorBuilder,
        combinator: &str,
        right: &SelectorBuilder,
    ) -> SelectorBuilder {
        let mut builder = SelectorBuilder::new();
        let _ = builder.combine(left, combinator, right);
        builder
    }

    fn start(category: Category, value: &str) -> Result<SelectorBuilder, SelectorError> {
        let mut builder = SelectorBuilder::new();
        let _ = builder.append(category, value)?;
        Ok(builder)
    }
}
