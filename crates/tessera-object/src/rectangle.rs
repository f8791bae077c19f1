//! Rectangle value object.

use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::shape::Shape;

/// A rectangle with public `width` and `height`.
///
/// Only the two fields are serialized; the area is computed on every call,
/// never stored. Inputs are not validated, so negative sizes give a
/// negative area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rectangle<T = f64> {
    /// Horizontal extent.
    pub width: T,
    /// Vertical extent.
    pub height: T,
}

impl<T> Rectangle<T> {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Copy + Mul<Output = T>> Rectangle<T> {
    /// `width * height`, in the rectangle's own number type.
    #[must_use]
    pub fn area(&self) -> T {
        self.width * self.height
    }
}

impl<T: Copy + Into<f64>> Shape for Rectangle<T> {
    fn area(&self) -> f64 {
        self.width.into() * self.height.into()
    }
}
