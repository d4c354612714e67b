use core::fmt::Debug;
use core::hash::Hash;

/// Contract for the underlying value of an enumerant.
///
/// Values need equality and a total order for identity operations, a hash for
/// the value index, and a debug rendering for error messages. Implemented for
/// every type that satisfies the bounds.
pub trait EnumValue: Eq + Ord + Hash + Debug + Send + Sync + 'static {}

impl<V> EnumValue for V where V: Eq + Ord + Hash + Debug + Send + Sync + 'static {}

/// Name and value shared by every enumerant.
///
/// Stored in a `meta` field of the concrete enumeration type so that
/// [`impl_enumerant!`](crate::impl_enumerant) can expose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerantMeta<V> {
	/// Name used for lookups, unique within the concrete type.
	pub name: &'static str,
	/// Underlying value; several enumerants may share one.
	pub value: V,
}

impl<V> EnumerantMeta<V> {
	/// Creates the metadata for one enumerant.
	pub const fn new(name: &'static str, value: V) -> Self {
		Self { name, value }
	}
}
