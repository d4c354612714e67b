//! Enumerations exercised by the demo.

use strong_enums::{EnumerantMeta, impl_strong_enum, register_enumerants, strong_enum};

strong_enum! {
	/// Card tiers offered to customers.
	pub struct CreditCard: i32 {
		STANDARD("Standard") = 1,
		PREMIUM("Premium") = 2,
		PLATINUM("Platinum") = 3,
	}
}

strong_enum! {
	/// Released API versions, keyed by their wire string.
	pub struct ApiVersion: &'static str {
		V1("Version 1") = "v1.0",
		V2("Version 2") = "v2.0",
		V3("Version 3") = "v3.0",
	}
}

/// Loyalty tier carrying a discount alongside its rank.
pub struct Tier {
	meta: EnumerantMeta<u8>,
	discount_percent: u8,
}

impl Tier {
	pub fn discount_percent(&self) -> u8 {
		self.discount_percent
	}
}

impl_strong_enum!(pub Tier: u8);

static BRONZE: Tier = Tier {
	meta: EnumerantMeta::new("Bronze", 1),
	discount_percent: 0,
};

static SILVER: Tier = Tier {
	meta: EnumerantMeta::new("Silver", 2),
	discount_percent: 5,
};

static GOLD: Tier = Tier {
	meta: EnumerantMeta::new("Gold", 3),
	discount_percent: 15,
};

register_enumerants!(Tier: BRONZE, SILVER, GOLD);
