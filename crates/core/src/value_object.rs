//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are compared by their attribute values.
/// `Amount` and `TaxId` are value objects: two amounts of `10.50` are the same
/// amount, and a tax id is only ever a key, never a record.
///
/// Implementors validate on construction, so a value that exists is valid.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
