//! Closed, typed enumerations backed by lazily built registries.
//!
//! A strong enumeration is a type whose instances are a fixed set of `static`
//! enumerants, each carrying a name and an underlying value. The set is
//! discovered on first use, indexed by name and by value, and cached for the
//! rest of the process.
//!
//! - [`EnumerantMeta`]: the (name, value) pair every enumerant carries
//! - [`Enumerant`]: accessor trait for the metadata
//! - [`StrongEnum`]: discovery hook and the lookup API
//! - [`RegistryBuilder`] / [`RegistryIndex`]: index construction and storage
//! - [`RegistryCell`]: per-type single-initialization cache
//!
//! # Declaring an enumeration
//!
//! ```rust
//! use strong_enums::{Enumerant, StrongEnum, strong_enum};
//!
//! strong_enum! {
//!     /// Card tiers offered to customers.
//!     pub struct CreditCard: i32 {
//!         STANDARD("Standard") = 1,
//!         PREMIUM("Premium") = 2,
//!         PLATINUM("Platinum") = 3,
//!     }
//! }
//!
//! assert_eq!(CreditCard::from_value(&3).unwrap().name(), "Platinum");
//! assert_eq!(*CreditCard::from_name("Premium").unwrap().value(), 2);
//! assert!(CreditCard::try_from_name("unknown").is_none());
//! ```
//!
//! Types that carry extra payload are written by hand with a `meta` field and
//! wired up with [`impl_strong_enum!`]. Enumerants may be listed explicitly or,
//! with the `inventory` feature, submitted from anywhere in the binary with
//! [`register_enumerants!`].

mod error;
pub mod identity;
pub mod index;
mod lookup;
mod macros;
mod meta;
#[cfg(feature = "serde")]
pub mod serde;
mod traits;

pub use error::{BuildError, DiscoveryError, EnumError, LookupKey};
pub use index::{DuplicatePolicy, KeyKind, RegistryBuilder, RegistryCell, RegistryIndex};
pub use meta::{EnumValue, EnumerantMeta};
#[cfg(feature = "inventory")]
pub use traits::{EnumerantInventory, EnumerantReg};
pub use traits::{Enumerant, StrongEnum};

#[cfg(feature = "inventory")]
#[doc(hidden)]
pub use inventory;
#[doc(hidden)]
pub use paste;
