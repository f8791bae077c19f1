//! Behavior shared by shape value objects.

/// A two-dimensional shape.
///
/// This is the behavior a record is bound to when it is rebuilt with
/// [`deserialize`](crate::deserialize): the parsed fields become the shape's
/// data, and `area` comes from the target type.
pub trait Shape {
    /// Surface area, computed from the current fields.
    fn area(&self) -> f64;
}
