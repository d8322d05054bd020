//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A lane code or a
/// product identity is a value object: two products with the same lane code and
/// description are the same product, wherever they were constructed.
///
/// To "modify" a value object, build a new one. Mutable state (stock and sales
/// counters) lives in records owned by the machine, never in the value itself.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
