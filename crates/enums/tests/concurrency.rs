use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use strong_enums::{
	DiscoveryError, Enumerant, EnumerantMeta, RegistryBuilder, RegistryCell, RegistryIndex,
	StrongEnum, impl_enumerant,
};

const THREADS: usize = 16;

struct Signal {
	meta: EnumerantMeta<u8>,
}

impl_enumerant!(Signal: u8);

static RED: Signal = Signal {
	meta: EnumerantMeta::new("Red", 1),
};

static AMBER: Signal = Signal {
	meta: EnumerantMeta::new("Amber", 2),
};

static GREEN: Signal = Signal {
	meta: EnumerantMeta::new("Green", 3),
};

static DISCOVERIES: AtomicUsize = AtomicUsize::new(0);

impl StrongEnum for Signal {
	fn registry_cell() -> &'static RegistryCell<Self> {
		static CELL: RegistryCell<Signal> = RegistryCell::new();
		&CELL
	}

	fn discover(builder: RegistryBuilder<Self>) -> Result<RegistryBuilder<Self>, DiscoveryError> {
		DISCOVERIES.fetch_add(1, Ordering::SeqCst);
		// Hold the build open so the other threads pile up behind it.
		thread::sleep(Duration::from_millis(20));
		Ok(builder.extend([&RED, &AMBER, &GREEN]))
	}
}

#[test]
fn concurrent_first_access_builds_once() {
	assert!(!Signal::registry_cell().is_built());

	let barrier = Barrier::new(THREADS);
	let barrier = &barrier;

	let registries: Vec<usize> = thread::scope(|s| {
		let handles: Vec<_> = (0..THREADS)
			.map(|i| {
				s.spawn(move || {
					barrier.wait();
					match i % 3 {
						0 => assert_eq!(Signal::from_name("Red").unwrap().value(), &1),
						1 => assert_eq!(Signal::try_from_value(&2).map(Enumerant::name), Some("Amber")),
						_ => assert_eq!(Signal::all().unwrap().len(), 3),
					}
					let registry: &'static RegistryIndex<Signal> = Signal::registry().unwrap();
					registry as *const RegistryIndex<Signal> as usize
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	assert_eq!(DISCOVERIES.load(Ordering::SeqCst), 1);
	assert!(registries.windows(2).all(|w| w[0] == w[1]));
	assert!(Signal::registry_cell().is_built());
}
