//! Value-based identity for enumerants.
//!
//! Two enumerants of the same concrete type are equal iff their values are
//! equal; names do not participate. Hashing and ordering follow the value so
//! that `a == b` implies `hash(a) == hash(b)` and `a.cmp(b) == Equal`.
//!
//! [`impl_enumerant!`](crate::impl_enumerant) wires these functions into the
//! standard traits. Both operands share one type parameter, so comparing two
//! different enumeration types does not type-check.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::Enumerant;

/// Returns true if both enumerants carry equal values.
#[inline]
pub fn eq<T: Enumerant>(a: &T, b: &T) -> bool {
	a.value() == b.value()
}

/// Orders enumerants by their values.
#[inline]
pub fn cmp<T: Enumerant>(a: &T, b: &T) -> Ordering {
	a.value().cmp(b.value())
}

/// Feeds the enumerant's value into `state`.
#[inline]
pub fn hash<T: Enumerant, H: Hasher>(enumerant: &T, state: &mut H) {
	enumerant.value().hash(state);
}

/// Renders `TypeName { name: .., value: .. }`.
pub fn fmt_debug<T: Enumerant>(enumerant: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	f.debug_struct(T::TYPE_NAME)
		.field("name", &enumerant.name())
		.field("value", enumerant.value())
		.finish()
}
