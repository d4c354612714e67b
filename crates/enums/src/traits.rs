use crate::error::{BuildError, DiscoveryError, EnumError};
use crate::index::{RegistryBuilder, RegistryCell, RegistryIndex};
use crate::lookup;
use crate::meta::{EnumValue, EnumerantMeta};

/// Trait for accessing enumerant metadata from a concrete enumeration type.
///
/// Usually implemented through [`impl_enumerant!`](crate::impl_enumerant),
/// which also derives the value-based identity traits.
pub trait Enumerant: Sized + Send + Sync + 'static {
	/// Underlying value type.
	type Value: EnumValue;

	/// Name of the concrete enumeration type, used in diagnostics.
	const TYPE_NAME: &'static str;

	/// Returns the metadata struct for this enumerant.
	fn meta(&self) -> &EnumerantMeta<Self::Value>;

	/// Returns the enumerant name.
	fn name(&self) -> &'static str {
		self.meta().name
	}

	/// Returns the underlying value.
	fn value(&self) -> &Self::Value {
		&self.meta().value
	}
}

/// A concrete enumeration type with a closed, discoverable set of enumerants.
///
/// Implementors provide the discovery hook and a per-type [`RegistryCell`];
/// the lookup API is provided on top of them. The registry is built on the
/// first call to any lookup and cached, including a failed build.
pub trait StrongEnum: Enumerant {
	/// Returns the cell caching this type's registry.
	///
	/// Must return the same `static` on every call.
	fn registry_cell() -> &'static RegistryCell<Self>;

	/// Appends every declared enumerant to `builder`.
	///
	/// Called at most once per process. May adjust the builder's duplicate
	/// policies before returning it.
	fn discover(builder: RegistryBuilder<Self>) -> Result<RegistryBuilder<Self>, DiscoveryError>;

	/// Returns the registry for this type, building it on first access.
	fn registry() -> Result<&'static RegistryIndex<Self>, BuildError> {
		Self::registry_cell().get_or_build(|| {
			Self::discover(RegistryBuilder::for_type())
				.map_err(|source| BuildError::Discovery {
					type_name: Self::TYPE_NAME,
					source,
				})?
				.build()
		})
	}

	/// Returns every enumerant in canonical (name) order.
	fn all() -> Result<&'static [&'static Self], BuildError> {
		Self::registry().map(RegistryIndex::items)
	}

	/// Looks up an enumerant by exact name.
	///
	/// # Errors
	///
	/// [`EnumError::InvalidArgument`] for a missing or empty name,
	/// [`EnumError::NotFound`] when no enumerant has that name, and
	/// [`EnumError::Build`] when the registry could not be built.
	fn from_name<'a>(name: impl Into<Option<&'a str>>) -> Result<&'static Self, EnumError> {
		lookup::from_name(name.into(), false)
	}

	/// Looks up an enumerant by name, ignoring case.
	fn from_name_ignore_case<'a>(
		name: impl Into<Option<&'a str>>,
	) -> Result<&'static Self, EnumError> {
		lookup::from_name(name.into(), true)
	}

	/// Looks up an enumerant by exact name, folding every failure into `None`.
	fn try_from_name<'a>(name: impl Into<Option<&'a str>>) -> Option<&'static Self> {
		lookup::try_from_name(name.into(), false)
	}

	/// Looks up an enumerant by name ignoring case, folding every failure into `None`.
	fn try_from_name_ignore_case<'a>(name: impl Into<Option<&'a str>>) -> Option<&'static Self> {
		lookup::try_from_name(name.into(), true)
	}

	/// Looks up the canonically-first enumerant carrying `value`.
	///
	/// # Errors
	///
	/// [`EnumError::NotFound`] when no enumerant has that value and
	/// [`EnumError::Build`] when the registry could not be built.
	fn from_value(value: &Self::Value) -> Result<&'static Self, EnumError> {
		lookup::from_value(value)
	}

	/// Looks up an enumerant by value without raising.
	fn try_from_value(value: &Self::Value) -> Option<&'static Self> {
		lookup::try_from_value(value)
	}

	/// Looks up an enumerant by value, returning `default` when absent.
	fn from_value_or(value: &Self::Value, default: &'static Self) -> &'static Self {
		Self::try_from_value(value).unwrap_or(default)
	}

	/// Returns true if any candidate shares this enumerant's value.
	fn is_any_of(&self, candidates: &[&Self]) -> bool {
		candidates.iter().any(|c| c.value() == self.value())
	}
}

/// Trait for inventory wrapper types to expose their enumerant.
///
/// [`impl_strong_enum!`](crate::impl_strong_enum) generates one wrapper per
/// concrete type and collects it with `inventory::collect!`, allowing
/// [`RegistryBuilder::extend_inventory`] to extract the submitted enumerants.
#[cfg(feature = "inventory")]
pub trait EnumerantReg<T: Enumerant>: 'static {
	/// Returns the static enumerant reference from this wrapper.
	fn enumerant(&self) -> &'static T;
}

/// Links a concrete type to its inventory wrapper.
///
/// [`register_enumerants!`](crate::register_enumerants) reaches the wrapper
/// through this projection, so submissions can live in any module that can
/// name the type.
#[cfg(feature = "inventory")]
pub trait EnumerantInventory: StrongEnum {
	/// The wrapper collected via `inventory::collect!`.
	type Reg: EnumerantReg<Self>;
}
