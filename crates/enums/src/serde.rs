//! Serde adapters for `&'static` enumerant fields.
//!
//! Encoding reads the enumerant's name or value; decoding resolves it
//! through the registry and reports lookup failures as custom errors.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Account {
//!     #[serde(with = "strong_enums::serde::by_name")]
//!     card: &'static CreditCard,
//!     #[serde(with = "strong_enums::serde::by_value")]
//!     fallback: &'static CreditCard,
//! }
//! ```

/// Encodes an enumerant as its name.
pub mod by_name {
	use ::serde::de::Error as _;
	use ::serde::{Deserialize, Deserializer, Serializer};

	use crate::{Enumerant, StrongEnum};

	pub fn serialize<T, S>(enumerant: &&'static T, serializer: S) -> Result<S::Ok, S::Error>
	where
		T: Enumerant,
		S: Serializer,
	{
		serializer.serialize_str(enumerant.name())
	}

	pub fn deserialize<'de, T, D>(deserializer: D) -> Result<&'static T, D::Error>
	where
		T: StrongEnum,
		D: Deserializer<'de>,
	{
		let name = String::deserialize(deserializer)?;
		T::from_name(name.as_str()).map_err(D::Error::custom)
	}
}

/// Encodes an enumerant as its underlying value.
///
/// Decoding needs an owned value type; string-valued enumerations backed by
/// `&'static str` should use [`by_name`](super::by_name) instead.
pub mod by_value {
	use ::serde::de::{DeserializeOwned, Error as _};
	use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Enumerant, StrongEnum};

	pub fn serialize<T, S>(enumerant: &&'static T, serializer: S) -> Result<S::Ok, S::Error>
	where
		T: Enumerant,
		T::Value: Serialize,
		S: Serializer,
	{
		enumerant.value().serialize(serializer)
	}

	pub fn deserialize<'de, T, D>(deserializer: D) -> Result<&'static T, D::Error>
	where
		T: StrongEnum,
		T::Value: DeserializeOwned,
		D: Deserializer<'de>,
	{
		let value = <T::Value as Deserialize>::deserialize(deserializer)?;
		T::from_value(&value).map_err(D::Error::custom)
	}
}
