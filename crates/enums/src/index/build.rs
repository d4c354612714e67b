use std::collections::hash_map::Entry;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use super::types::RegistryIndex;
use super::{DuplicatePolicy, KeyKind, Map, build_value_map, fold_case};
use crate::Enumerant;
use crate::error::BuildError;

/// Builder for constructing a [`RegistryIndex`].
///
/// Collects enumerants, sorts them into canonical order, validates names and
/// values, and produces the final index.
///
/// Names are always unique, exactly and after case folding. Only the value
/// index has a configurable [`DuplicatePolicy`].
///
/// # Example
///
/// ```rust,ignore
/// let index = RegistryBuilder::for_type()
///     .extend([CreditCard::STANDARD, CreditCard::PREMIUM])
///     .build()?;
/// ```
pub struct RegistryBuilder<T: Enumerant> {
	label: &'static str,
	defs: Vec<&'static T>,
	value_policy: DuplicatePolicy,
}

impl<T: Enumerant> RegistryBuilder<T> {
	/// Creates a new builder with the given label for error messages.
	///
	/// Shared values default to [`DuplicatePolicy::FirstWins`].
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
			value_policy: DuplicatePolicy::FirstWins,
		}
	}

	/// Creates a builder labelled with the concrete type name.
	pub fn for_type() -> Self {
		Self::new(T::TYPE_NAME)
	}

	/// Returns the number of enumerants added so far.
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	/// Returns true if no enumerants have been added.
	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Sets the policy for enumerants sharing a value.
	pub fn value_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.value_policy = policy;
		self
	}

	/// Adds a single enumerant to the builder.
	pub fn push(mut self, def: &'static T) -> Self {
		self.defs.push(def);
		self
	}

	/// Adds multiple enumerants to the builder.
	pub fn extend<I: IntoIterator<Item = &'static T>>(mut self, defs: I) -> Self {
		self.defs.extend(defs);
		self
	}

	/// Collects all enumerants submitted to inventory via the wrapper type.
	///
	/// The wrapper type `R` must implement [`EnumerantReg<T>`](crate::EnumerantReg)
	/// and be collected via `inventory::collect!(R)`.
	#[cfg(feature = "inventory")]
	pub fn extend_inventory<R>(mut self) -> Self
	where
		R: crate::EnumerantReg<T>,
		inventory::iter<R>: IntoIterator<Item = &'static R>,
	{
		for reg in inventory::iter::<R> {
			self.defs.push(reg.enumerant());
		}
		self
	}

	/// Builds the index.
	///
	/// # Errors
	///
	/// Returns [`BuildError::DuplicateName`] when two distinct enumerants share
	/// a name or a case-folded name, and [`BuildError::DuplicateValue`] when
	/// values collide under [`DuplicatePolicy::Reject`].
	pub fn build(mut self) -> Result<RegistryIndex<T>, BuildError> {
		let mut seen = FxHashSet::with_capacity_and_hasher(self.defs.len(), Default::default());
		self.defs.retain(|d| seen.insert(*d as *const T as usize));

		// Stable: enumerants sharing a name keep their registration order.
		self.defs.sort_by(|a, b| a.name().cmp(b.name()));

		let mut by_name = Map::with_capacity_and_hasher(self.defs.len(), Default::default());
		let mut by_folded_name = Map::with_capacity_and_hasher(self.defs.len(), Default::default());

		for &def in &self.defs {
			self.insert_name(&mut by_name, KeyKind::Name, def.name(), def)?;
			let folded: Box<str> = fold_case(def.name()).into();
			self.insert_name(&mut by_folded_name, KeyKind::FoldedName, folded, def)?;
		}

		let by_value = build_value_map(self.label, &self.defs, self.value_policy)?;

		Ok(RegistryIndex {
			label: self.label,
			items: self.defs,
			by_name,
			by_folded_name,
			by_value,
		})
	}

	fn insert_name<K>(
		&self,
		map: &mut Map<K, &'static T>,
		kind: KeyKind,
		key: K,
		def: &'static T,
	) -> Result<(), BuildError>
	where
		K: Eq + Hash + AsRef<str>,
	{
		match map.entry(key) {
			Entry::Occupied(slot) => Err(BuildError::DuplicateName {
				type_name: self.label,
				kind,
				key: slot.key().as_ref().to_owned(),
				existing: slot.get().name(),
				incoming: def.name(),
			}),
			Entry::Vacant(slot) => {
				slot.insert(def);
				Ok(())
			}
		}
	}
}
