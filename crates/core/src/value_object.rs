//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared entirely by their attribute
/// values: `Money::from_cents(100)` equals any other `Money` of 100 cents.
/// "Modifying" one means constructing a new value. This keeps them safe to
/// copy around and trivially comparable in tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
