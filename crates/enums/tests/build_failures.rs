use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use strong_enums::{
	BuildError, DiscoveryError, DuplicatePolicy, EnumError, EnumerantMeta, KeyKind, RegistryBuilder,
	RegistryCell, StrongEnum, impl_enumerant,
};

struct Clashing {
	meta: EnumerantMeta<i32>,
}

impl_enumerant!(Clashing: i32);

static ONE: Clashing = Clashing {
	meta: EnumerantMeta::new("One", 1),
};

static ONE_AGAIN: Clashing = Clashing {
	meta: EnumerantMeta::new("One", 2),
};

static CLASHING_BUILDS: AtomicUsize = AtomicUsize::new(0);

impl StrongEnum for Clashing {
	fn registry_cell() -> &'static RegistryCell<Self> {
		static CELL: RegistryCell<Clashing> = RegistryCell::new();
		&CELL
	}

	fn discover(builder: RegistryBuilder<Self>) -> Result<RegistryBuilder<Self>, DiscoveryError> {
		CLASHING_BUILDS.fetch_add(1, Ordering::SeqCst);
		Ok(builder.extend([&ONE, &ONE_AGAIN]))
	}
}

struct Unreachable {
	meta: EnumerantMeta<i32>,
}

impl_enumerant!(Unreachable: i32);

static UNREACHABLE_BUILDS: AtomicUsize = AtomicUsize::new(0);

impl StrongEnum for Unreachable {
	fn registry_cell() -> &'static RegistryCell<Self> {
		static CELL: RegistryCell<Unreachable> = RegistryCell::new();
		&CELL
	}

	fn discover(_: RegistryBuilder<Self>) -> Result<RegistryBuilder<Self>, DiscoveryError> {
		UNREACHABLE_BUILDS.fetch_add(1, Ordering::SeqCst);
		Err(DiscoveryError::new("manifest unavailable"))
	}
}

/// Rejects shared values instead of keeping the first.
struct Exclusive {
	meta: EnumerantMeta<char>,
}

impl_enumerant!(Exclusive: char);

static NORTH: Exclusive = Exclusive {
	meta: EnumerantMeta::new("North", 'N'),
};

static NORTHWEST: Exclusive = Exclusive {
	meta: EnumerantMeta::new("Northwest", 'N'),
};

impl StrongEnum for Exclusive {
	fn registry_cell() -> &'static RegistryCell<Self> {
		static CELL: RegistryCell<Exclusive> = RegistryCell::new();
		&CELL
	}

	fn discover(builder: RegistryBuilder<Self>) -> Result<RegistryBuilder<Self>, DiscoveryError> {
		Ok(builder
			.value_policy(DuplicatePolicy::Reject)
			.extend([&NORTHWEST, &NORTH]))
	}
}

/// Lenient about values, which must not relax name uniqueness.
struct Relaxed {
	meta: EnumerantMeta<u8>,
}

impl_enumerant!(Relaxed: u8);

static FIRST_X: Relaxed = Relaxed {
	meta: EnumerantMeta::new("X", 1),
};

static SECOND_X: Relaxed = Relaxed {
	meta: EnumerantMeta::new("X", 2),
};

impl StrongEnum for Relaxed {
	fn registry_cell() -> &'static RegistryCell<Self> {
		static CELL: RegistryCell<Relaxed> = RegistryCell::new();
		&CELL
	}

	fn discover(builder: RegistryBuilder<Self>) -> Result<RegistryBuilder<Self>, DiscoveryError> {
		Ok(builder
			.value_policy(DuplicatePolicy::LastWins)
			.extend([&FIRST_X, &SECOND_X]))
	}
}

#[test]
fn duplicate_name_fails_every_lookup_with_the_same_error() {
	let expected = BuildError::DuplicateName {
		type_name: "Clashing",
		kind: KeyKind::Name,
		key: "One".to_owned(),
		existing: "One",
		incoming: "One",
	};

	assert_eq!(Clashing::all().unwrap_err(), expected);
	assert_eq!(
		Clashing::from_name("One").unwrap_err(),
		EnumError::Build(expected.clone())
	);
	assert_eq!(
		Clashing::from_value(&1).unwrap_err(),
		EnumError::Build(expected.clone())
	);
	assert_eq!(
		Clashing::from_name_ignore_case("one").unwrap_err(),
		EnumError::Build(expected)
	);

	assert_eq!(Clashing::try_from_name("One"), None);
	assert_eq!(Clashing::try_from_name_ignore_case("ONE"), None);
	assert_eq!(Clashing::try_from_value(&2), None);
	assert!(std::ptr::eq(Clashing::from_value_or(&1, &ONE), &ONE));

	// Input validation still runs ahead of the broken registry.
	assert!(matches!(
		Clashing::from_name("").unwrap_err(),
		EnumError::InvalidArgument { .. }
	));

	assert_eq!(CLASHING_BUILDS.load(Ordering::SeqCst), 1);
}

#[test]
fn discovery_failure_is_cached() {
	let first = Unreachable::from_name("Anything").unwrap_err();
	let second = Unreachable::from_value(&7).unwrap_err();

	assert_eq!(
		first,
		EnumError::Build(BuildError::Discovery {
			type_name: "Unreachable",
			source: DiscoveryError::new("manifest unavailable"),
		})
	);
	assert_eq!(first, second);
	assert_eq!(
		first.to_string(),
		"discovery failed for Unreachable: manifest unavailable"
	);
	assert_eq!(Unreachable::try_from_name("Anything"), None);
	assert!(Unreachable::registry_cell().is_built());

	assert_eq!(UNREACHABLE_BUILDS.load(Ordering::SeqCst), 1);
}

#[test]
fn discover_can_reject_shared_values() {
	let err = Exclusive::from_name("North").unwrap_err();
	assert_eq!(
		err,
		EnumError::Build(BuildError::DuplicateValue {
			type_name: "Exclusive",
			value: "'N'".to_owned(),
			existing: "North",
			incoming: "Northwest",
		})
	);
	assert_eq!(
		err.to_string(),
		"duplicate value in Exclusive: value='N' existing=\"North\" new=\"Northwest\""
	);
}

#[test]
fn value_policy_does_not_admit_shared_names() {
	assert!(matches!(
		Relaxed::all().unwrap_err(),
		BuildError::DuplicateName {
			type_name: "Relaxed",
			kind: KeyKind::Name,
			..
		}
	));
	assert_eq!(Relaxed::try_from_value(&2), None);
	assert_eq!(Relaxed::try_from_name("X"), None);
}
