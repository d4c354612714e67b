use std::sync::OnceLock;

use super::types::RegistryIndex;
use crate::Enumerant;
use crate::error::BuildError;

/// Single-initialization cache for one concrete type's registry.
///
/// Declared as a `static` per concrete type, so unrelated enumerations never
/// contend. Concurrent first callers block until the single build completes;
/// afterwards every access is a plain read. The build result is cached
/// whether it succeeded or not.
pub struct RegistryCell<T: Enumerant> {
	inner: OnceLock<Result<RegistryIndex<T>, BuildError>>,
}

impl<T: Enumerant> RegistryCell<T> {
	/// Creates an empty cell.
	pub const fn new() -> Self {
		Self {
			inner: OnceLock::new(),
		}
	}

	/// Returns the cached registry, running `build` if this is the first access.
	///
	/// `build` runs at most once per cell, even under concurrent first access.
	///
	/// # Errors
	///
	/// Returns a clone of the cached [`BuildError`] if the build failed.
	pub fn get_or_build<F>(&self, build: F) -> Result<&RegistryIndex<T>, BuildError>
	where
		F: FnOnce() -> Result<RegistryIndex<T>, BuildError>,
	{
		self.inner
			.get_or_init(|| {
				let built = build();
				match &built {
					Ok(index) => tracing::debug!(
						registry = T::TYPE_NAME,
						enumerants = index.len(),
						distinct_values = index.distinct_values(),
						"built enum registry"
					),
					Err(error) => tracing::error!(
						registry = T::TYPE_NAME,
						%error,
						"enum registry build failed"
					),
				}
				built
			})
			.as_ref()
			.map_err(Clone::clone)
	}

	/// Returns true once the cell holds a build result, successful or not.
	pub fn is_built(&self) -> bool {
		self.inner.get().is_some()
	}
}

impl<T: Enumerant> Default for RegistryCell<T> {
	fn default() -> Self {
		Self::new()
	}
}
