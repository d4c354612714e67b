use super::{Map, fold_case};
use crate::Enumerant;

/// Indexed, immutable set of enumerants for one concrete type.
///
/// Built via [`RegistryBuilder`](super::RegistryBuilder), provides:
/// - exact and case-insensitive name lookup
/// - value lookup resolving to the canonically-first enumerant
/// - iteration in canonical (name) order
pub struct RegistryIndex<T: Enumerant> {
	pub(super) label: &'static str,
	pub(super) items: Vec<&'static T>,
	pub(super) by_name: Map<&'static str, &'static T>,
	pub(super) by_folded_name: Map<Box<str>, &'static T>,
	pub(super) by_value: Map<&'static T::Value, &'static T>,
}

impl<T: Enumerant> RegistryIndex<T> {
	/// Looks up an enumerant by exact name.
	#[inline]
	pub fn get_by_name(&self, name: &str) -> Option<&'static T> {
		self.by_name.get(name).copied()
	}

	/// Looks up an enumerant by name, ignoring case.
	#[inline]
	pub fn get_by_name_ignore_case(&self, name: &str) -> Option<&'static T> {
		let folded = fold_case(name);
		self.by_folded_name.get(&*folded).copied()
	}

	/// Looks up the canonically-first enumerant carrying `value`.
	#[inline]
	pub fn get_by_value(&self, value: &T::Value) -> Option<&'static T> {
		self.by_value.get(value).copied()
	}

	/// Returns all enumerants in canonical order.
	#[inline]
	pub fn items(&self) -> &[&'static T] {
		&self.items
	}

	/// Returns an iterator over all enumerants in canonical order.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &'static T> + '_ {
		self.items.iter().copied()
	}

	/// Returns the number of enumerants.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if the type declares no enumerants.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns the number of distinct values.
	///
	/// Smaller than [`len`](Self::len) when values repeat.
	#[inline]
	pub fn distinct_values(&self) -> usize {
		self.by_value.len()
	}

	/// Returns the label used in diagnostics.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}
}

impl<T: Enumerant> core::fmt::Debug for RegistryIndex<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("RegistryIndex")
			.field("label", &self.label)
			.field("len", &self.items.len())
			.field("distinct_values", &self.by_value.len())
			.finish()
	}
}
