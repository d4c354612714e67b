//! Declaration macros for strong enumerations.

/// Implements [`Enumerant`](crate::Enumerant) and the value-based identity
/// traits for a type with a `meta: EnumerantMeta<V>` field.
///
/// Generates `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`, `Debug` and
/// `Display` (the name); do not derive any of them on the type.
#[macro_export]
macro_rules! impl_enumerant {
	($ty:ident : $value:ty) => {
		impl $crate::Enumerant for $ty {
			type Value = $value;
			const TYPE_NAME: &'static str = stringify!($ty);

			fn meta(&self) -> &$crate::EnumerantMeta<$value> {
				&self.meta
			}
		}

		impl ::core::cmp::PartialEq for $ty {
			fn eq(&self, other: &Self) -> bool {
				$crate::identity::eq(self, other)
			}
		}

		impl ::core::cmp::Eq for $ty {}

		impl ::core::hash::Hash for $ty {
			fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
				$crate::identity::hash(self, state)
			}
		}

		impl ::core::cmp::PartialOrd for $ty {
			fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
				::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
			}
		}

		impl ::core::cmp::Ord for $ty {
			fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
				$crate::identity::cmp(self, other)
			}
		}

		impl ::core::fmt::Display for $ty {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(self.meta.name)
			}
		}

		impl ::core::fmt::Debug for $ty {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				$crate::identity::fmt_debug(self, f)
			}
		}
	};
}

/// Implements [`StrongEnum`](crate::StrongEnum) for a hand-written type.
///
/// The type must have a `meta: EnumerantMeta<V>` field. Two discovery modes:
///
/// ```ignore
/// // Explicit manifest: the closed set is listed here.
/// impl_strong_enum!(pub Tier: u8 => [&BASIC, &PREMIUM, &VIP]);
///
/// // Inventory: members are submitted with `register_enumerants!`, from any
/// // module that can name the type.
/// impl_strong_enum!(pub Tier: u8);
/// register_enumerants!(Tier: BASIC, PREMIUM, VIP);
/// ```
///
/// The visibility is applied to the generated inventory wrapper and should
/// match the type's own.
#[macro_export]
macro_rules! impl_strong_enum {
	($vis:vis $ty:ident : $value:ty => [$($member:expr),* $(,)?]) => {
		$crate::impl_enumerant!($ty : $value);

		impl $crate::StrongEnum for $ty {
			fn registry_cell() -> &'static $crate::RegistryCell<Self> {
				static CELL: $crate::RegistryCell<$ty> = $crate::RegistryCell::new();
				&CELL
			}

			fn discover(
				builder: $crate::RegistryBuilder<Self>,
			) -> ::core::result::Result<$crate::RegistryBuilder<Self>, $crate::DiscoveryError> {
				::core::result::Result::Ok(builder.extend([$($member),*]))
			}
		}
	};
	($vis:vis $ty:ident : $value:ty) => {
		$crate::impl_enumerant!($ty : $value);

		$crate::paste::paste! {
			#[doc(hidden)]
			$vis struct [<$ty Reg>](&'static $ty);

			impl [<$ty Reg>] {
				#[doc(hidden)]
				pub const fn new(enumerant: &'static $ty) -> Self {
					Self(enumerant)
				}
			}

			$crate::inventory::collect!([<$ty Reg>]);

			impl $crate::EnumerantReg<$ty> for [<$ty Reg>] {
				fn enumerant(&self) -> &'static $ty {
					self.0
				}
			}

			impl $crate::EnumerantInventory for $ty {
				type Reg = [<$ty Reg>];
			}

			impl $crate::StrongEnum for $ty {
				fn registry_cell() -> &'static $crate::RegistryCell<Self> {
					static CELL: $crate::RegistryCell<$ty> = $crate::RegistryCell::new();
					&CELL
				}

				fn discover(
					builder: $crate::RegistryBuilder<Self>,
				) -> ::core::result::Result<$crate::RegistryBuilder<Self>, $crate::DiscoveryError> {
					::core::result::Result::Ok(builder.extend_inventory::<[<$ty Reg>]>())
				}
			}
		}
	};
}

/// Submits `static` enumerants to an inventory-discovered type.
///
/// The type must have been declared with the inventory form of
/// [`impl_strong_enum!`]. Submissions are collected at link time, so members
/// may be spread across modules.
///
/// ```ignore
/// register_enumerants!(Tier: BASIC, PREMIUM);
/// register_enumerants!(crate::tiers::Tier: super::VIP);
/// ```
#[macro_export]
macro_rules! register_enumerants {
	($ty:ty : $($member:path),+ $(,)?) => {
		$(
			$crate::inventory::submit! {
				<$ty as $crate::EnumerantInventory>::Reg::new(&$member)
			}
		)+
	};
}

/// Declares a strong enumeration with a compile-time manifest.
///
/// Each member becomes an associated `&'static` constant; the name literal is
/// the lookup name and the expression after `=` is the value.
///
/// # Examples
///
/// ```
/// use strong_enums::{Enumerant, StrongEnum, strong_enum};
///
/// strong_enum! {
///     /// Released API versions.
///     pub struct ApiVersion: &'static str {
///         V1("Version 1") = "v1.0",
///         V2("Version 2") = "v2.0",
///     }
/// }
///
/// assert_eq!(ApiVersion::V2.name(), "Version 2");
/// assert_eq!(ApiVersion::from_value(&"v1.0").unwrap(), ApiVersion::V1);
/// ```
#[macro_export]
macro_rules! strong_enum {
	(
		$(#[$attr:meta])*
		$vis:vis struct $ty:ident : $value:ty {
			$(
				$(#[$member_attr:meta])*
				$member:ident ( $name:expr ) = $val:expr
			),* $(,)?
		}
	) => {
		$(#[$attr])*
		$vis struct $ty {
			meta: $crate::EnumerantMeta<$value>,
		}

		$crate::paste::paste! {
			$(
				#[allow(non_upper_case_globals)]
				static [<__ $ty _ $member>]: $ty = $ty {
					meta: $crate::EnumerantMeta::new($name, $val),
				};
			)*

			impl $ty {
				$(
					$(#[$member_attr])*
					pub const $member: &'static $ty = &[<__ $ty _ $member>];
				)*
			}
		}

		$crate::impl_strong_enum!($vis $ty : $value => [$($ty::$member),*]);
	};
}
