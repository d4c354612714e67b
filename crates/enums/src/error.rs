use core::fmt;

use crate::index::KeyKind;

/// Key that a failed lookup was searching for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
	/// A queried name, verbatim.
	Name(String),
	/// The debug rendering of a queried value.
	Value(String),
}

impl fmt::Display for LookupKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Name(name) => write!(f, "name {name:?}"),
			Self::Value(value) => write!(f, "value {value}"),
		}
	}
}

/// Error returned by the strict lookup operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
	/// No enumerant matches the queried key.
	#[error("no {type_name} item with {key} found")]
	NotFound {
		type_name: &'static str,
		key: LookupKey,
	},

	/// The query itself is malformed.
	#[error("invalid argument `{argument}` for {type_name}: {reason}")]
	InvalidArgument {
		type_name: &'static str,
		argument: &'static str,
		reason: &'static str,
	},

	/// The registry for the type could not be built.
	#[error(transparent)]
	Build(#[from] BuildError),
}

impl EnumError {
	/// Returns true for [`EnumError::NotFound`].
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}

/// Fatal registry construction errors.
///
/// These indicate a broken enumeration definition rather than bad input. They
/// are cached with the registry and returned on every later access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	/// Two enumerants of the same type share a name.
	#[error("duplicate {kind} in {type_name}: key={key:?} existing={existing:?} new={incoming:?}")]
	DuplicateName {
		type_name: &'static str,
		kind: KeyKind,
		key: String,
		existing: &'static str,
		incoming: &'static str,
	},

	/// Two enumerants share a value under a rejecting value policy.
	#[error("duplicate value in {type_name}: value={value} existing={existing:?} new={incoming:?}")]
	DuplicateValue {
		type_name: &'static str,
		value: String,
		existing: &'static str,
		incoming: &'static str,
	},

	/// The discovery hook failed.
	#[error("discovery failed for {type_name}: {source}")]
	Discovery {
		type_name: &'static str,
		#[source]
		source: DiscoveryError,
	},
}

/// Failure reported by a [`StrongEnum::discover`](crate::StrongEnum::discover) hook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct DiscoveryError {
	reason: String,
}

impl DiscoveryError {
	/// Creates a discovery error with a human-readable reason.
	pub fn new(reason: impl Into<String>) -> Self {
		Self {
			reason: reason.into(),
		}
	}

	/// Returns the reason given by the discovery hook.
	pub fn reason(&self) -> &str {
		&self.reason
	}
}
