//! Value object trait: equality by value, not identity.
//!
//! Inventory records are mutable and owned by the caller; the snapshots the
//! engine hands out about them are value objects.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two snapshots of
/// the same change are interchangeable, so they can be cloned into audit logs,
/// compared in tests, and printed in diagnostics.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct QualityBand {
///     min: i32,
///     max: i32,
/// }
///
/// impl ValueObject for QualityBand {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
