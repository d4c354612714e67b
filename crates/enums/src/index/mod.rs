//! Registry index infrastructure.
//!
//! Every concrete enumeration type owns one [`RegistryCell`] that builds its
//! [`RegistryIndex`] on first access:
//!
//! ```rust,ignore
//! fn registry_cell() -> &'static RegistryCell<CreditCard> {
//!     static CELL: RegistryCell<CreditCard> = RegistryCell::new();
//!     &CELL
//! }
//!
//! CreditCard::registry_cell().get_or_build(|| {
//!     RegistryBuilder::for_type()
//!         .extend([CreditCard::STANDARD, CreditCard::PREMIUM])
//!         .build()
//! })
//! ```
//!
//! # Invariants
//!
//! - Iteration order is ascending by name (ordinal byte order).
//! - Exactly one exact-name entry and one case-folded entry per enumerant; any
//!   collision is a [`BuildError::DuplicateName`]. Every member of
//!   [`RegistryIndex::items`] is therefore reachable by its own name.
//! - The value index maps each distinct value to the first enumerant in
//!   iteration order unless another [`DuplicatePolicy`] is configured.
//! - A cell is initialized at most once. A failed build is cached and handed
//!   out again rather than retried.

use std::borrow::Cow;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::Enumerant;
use crate::error::BuildError;

mod build;
mod cell;
mod types;

pub use build::RegistryBuilder;
pub use cell::RegistryCell;
pub use types::RegistryIndex;


pub(crate) type Map<K, V> = FxHashMap<K, V>;

/// Policy for enumerants sharing a value during index construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Fail the build with a [`BuildError`].
	#[default]
	Reject,
	/// Keep the first definition seen for a key.
	FirstWins,
	/// Overwrite with the last definition seen.
	LastWins,
}

/// Which name index a duplicate was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
	/// The exact-match name index.
	Name,
	/// The case-insensitive name index.
	FoldedName,
}

impl core::fmt::Display for KeyKind {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Name => write!(f, "name"),
			Self::FoldedName => write!(f, "case-folded name"),
		}
	}
}

/// Folds a name for the case-insensitive index.
///
/// Maps each `char` on its own, so a final `ς` folds like `σ` and `Σ`.
pub(crate) fn fold_case(name: &str) -> Cow<'_, str> {
	if name.is_ascii() {
		if name.bytes().any(|b| b.is_ascii_uppercase()) {
			Cow::Owned(name.to_ascii_lowercase())
		} else {
			Cow::Borrowed(name)
		}
	} else {
		Cow::Owned(name.chars().flat_map(fold_char).collect())
	}
}

/// Simple one-to-one uppercase, then lowercase. Characters whose uppercase
/// expands (`ß` to `SS`) keep their own lowercase.
fn fold_char(c: char) -> std::char::ToLowercase {
	let mut upper = c.to_uppercase();
	match (upper.next(), upper.next()) {
		(Some(u), None) => u.to_lowercase(),
		_ => c.to_lowercase(),
	}
}

/// Builds the value index over `items`, which must already be in canonical order.
pub(crate) fn build_value_map<T: Enumerant>(
	label: &'static str,
	items: &[&'static T],
	policy: DuplicatePolicy,
) -> Result<Map<&'static T::Value, &'static T>, BuildError> {
	let mut map: Map<&'static T::Value, &'static T> =
		Map::with_capacity_and_hasher(items.len(), Default::default());

	for &item in items {
		match map.entry(item.value()) {
			Entry::Vacant(slot) => {
				slot.insert(item);
			}
			Entry::Occupied(mut slot) => match policy {
				DuplicatePolicy::Reject => {
					return Err(BuildError::DuplicateValue {
						type_name: label,
						value: format!("{:?}", item.value()),
						existing: slot.get().name(),
						incoming: item.name(),
					});
				}
				DuplicatePolicy::FirstWins => {}
				DuplicatePolicy::LastWins => {
					slot.insert(item);
				}
			},
		}
	}

	Ok(map)
}
