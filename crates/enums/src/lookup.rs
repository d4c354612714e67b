//! Name and value lookups shared by the [`StrongEnum`] provided methods.
//!
//! Strict lookups validate their input before touching the registry; the
//! `try_` forms fold invalid input, misses and a failed build into `None`.

use crate::error::{EnumError, LookupKey};
use crate::index::RegistryIndex;
use crate::{Enumerant, StrongEnum};

pub(crate) fn from_name<T: StrongEnum>(
	name: Option<&str>,
	ignore_case: bool,
) -> Result<&'static T, EnumError> {
	let name = match name {
		Some(name) if !name.is_empty() => name,
		_ => {
			return Err(EnumError::InvalidArgument {
				type_name: T::TYPE_NAME,
				argument: "name",
				reason: "cannot be null or empty",
			});
		}
	};

	let registry = T::registry()?;
	find_by_name(registry, name, ignore_case).ok_or_else(|| EnumError::NotFound {
		type_name: T::TYPE_NAME,
		key: LookupKey::Name(name.to_owned()),
	})
}

pub(crate) fn try_from_name<T: StrongEnum>(
	name: Option<&str>,
	ignore_case: bool,
) -> Option<&'static T> {
	let name = name.filter(|name| !name.is_empty())?;
	let found = find_by_name(registry_or_log::<T>()?, name, ignore_case);
	if found.is_none() {
		tracing::trace!(registry = T::TYPE_NAME, name, ignore_case, "name lookup missed");
	}
	found
}

pub(crate) fn from_value<T: StrongEnum>(value: &T::Value) -> Result<&'static T, EnumError> {
	T::registry()?
		.get_by_value(value)
		.ok_or_else(|| EnumError::NotFound {
			type_name: T::TYPE_NAME,
			key: LookupKey::Value(format!("{value:?}")),
		})
}

pub(crate) fn try_from_value<T: StrongEnum>(value: &T::Value) -> Option<&'static T> {
	let found = registry_or_log::<T>()?.get_by_value(value);
	if found.is_none() {
		tracing::trace!(registry = T::TYPE_NAME, ?value, "value lookup missed");
	}
	found
}

fn find_by_name<T: Enumerant>(
	registry: &RegistryIndex<T>,
	name: &str,
	ignore_case: bool,
) -> Option<&'static T> {
	if ignore_case {
		registry.get_by_name_ignore_case(name)
	} else {
		registry.get_by_name(name)
	}
}

fn registry_or_log<T: StrongEnum>() -> Option<&'static RegistryIndex<T>> {
	match T::registry() {
		Ok(registry) => Some(registry),
		Err(error) => {
			tracing::error!(registry = T::TYPE_NAME, %error, "lookup against a failed enum registry");
			None
		}
	}
}
