//! Walkthrough binary for strong enumerations.
//!
//! Lists the demo enumerations and resolves credit cards by name and by
//! value, printing either a plain report or JSON.

mod catalog;

use clap::Parser;
use serde::Serialize;
use strong_enums::{Enumerant, StrongEnum};
use tracing::{debug, info};

use crate::catalog::{ApiVersion, CreditCard, Tier};

/// Demo command line arguments.
#[derive(Parser, Debug)]
#[command(name = "strong-enums-demo")]
#[command(about = "Inspect and resolve strong enumerations")]
struct Args {
	/// Credit card name to resolve
	#[arg(short, long, value_name = "NAME")]
	name: Option<String>,

	/// Credit card value to resolve
	#[arg(long, value_name = "VALUE")]
	value: Option<i32>,

	/// Match names without regard to case
	#[arg(short, long)]
	ignore_case: bool,

	/// Print JSON instead of a plain report
	#[arg(long)]
	json: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

#[derive(Serialize)]
struct Report {
	cards: Vec<Entry<i32>>,
	api_versions: Vec<Entry<&'static str>>,
	tiers: Vec<TierEntry>,
	#[serde(skip_serializing_if = "Option::is_none")]
	by_name: Option<NamedCard>,
	#[serde(skip_serializing_if = "Option::is_none")]
	by_value: Option<ValuedCard>,
}

#[derive(Serialize)]
struct Entry<V> {
	name: &'static str,
	value: V,
}

#[derive(Serialize)]
struct TierEntry {
	name: &'static str,
	rank: u8,
	discount_percent: u8,
}

/// Card resolved from `--name`, encoded as its name.
#[derive(Serialize)]
struct NamedCard {
	#[serde(with = "strong_enums::serde::by_name")]
	card: &'static CreditCard,
}

/// Card resolved from `--value`, encoded as its value.
#[derive(Serialize)]
struct ValuedCard {
	#[serde(with = "strong_enums::serde::by_value")]
	card: &'static CreditCard,
	fallback: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	setup_tracing(args.verbose);

	info!("starting strong-enums-demo");

	let report = Report {
		cards: entries::<CreditCard>()?,
		api_versions: entries::<ApiVersion>()?,
		tiers: Tier::all()?
			.iter()
			.map(|tier| TierEntry {
				name: tier.name(),
				rank: *tier.value(),
				discount_percent: tier.discount_percent(),
			})
			.collect(),
		by_name: resolve_name(&args)?.map(|card| NamedCard { card }),
		by_value: args.value.map(resolve_value),
	};

	if args.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		print_report(&report);
	}

	Ok(())
}

fn entries<T>() -> Result<Vec<Entry<T::Value>>, strong_enums::BuildError>
where
	T: StrongEnum,
	T::Value: Copy,
{
	Ok(T::all()?
		.iter()
		.map(|e| Entry {
			name: e.name(),
			value: *e.value(),
		})
		.collect())
}

/// Resolves `--name`, honoring `--ignore-case`.
fn resolve_name(args: &Args) -> Result<Option<&'static CreditCard>, strong_enums::EnumError> {
	let Some(name) = args.name.as_deref() else {
		return Ok(None);
	};
	let card = if args.ignore_case {
		CreditCard::from_name_ignore_case(name)?
	} else {
		CreditCard::from_name(name)?
	};
	debug!(%card, "resolved card by name");
	Ok(Some(card))
}

/// Resolves `--value`, falling back to the standard card.
fn resolve_value(value: i32) -> ValuedCard {
	let card = CreditCard::from_value_or(&value, CreditCard::STANDARD);
	let fallback = card.value() != &value;
	if fallback {
		info!(value, fallback = %card, "unknown card value");
	}
	ValuedCard { card, fallback }
}

fn print_report(report: &Report) {
	println!("Credit cards:");
	for card in &report.cards {
		println!("  {:<10} {}", card.name, card.value);
	}

	println!("API versions:");
	for version in &report.api_versions {
		println!("  {:<10} {}", version.name, version.value);
	}

	println!("Tiers:");
	for tier in &report.tiers {
		println!(
			"  {:<10} rank {} ({}% off)",
			tier.name, tier.rank, tier.discount_percent
		);
	}

	if let Some(named) = &report.by_name {
		println!(
			"By name: {} = {} (premium: {})",
			named.card,
			named.card.value(),
			is_premium(named.card)
		);
	}

	if let Some(valued) = &report.by_value {
		let note = if valued.fallback { ", fallback" } else { "" };
		println!(
			"By value: {} = {} (premium: {}{note})",
			valued.card,
			valued.card.value(),
			is_premium(valued.card)
		);
	}
}

fn is_premium(card: &CreditCard) -> bool {
	card.is_any_of(&[CreditCard::PREMIUM, CreditCard::PLATINUM])
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("strong_enums=trace,strong_enums_demo=debug,info")
		} else {
			EnvFilter::new("strong_enums=info,warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn known_value_is_not_a_fallback() {
		let valued = resolve_value(3);
		assert!(std::ptr::eq(valued.card, CreditCard::PLATINUM));
		assert!(!valued.fallback);
	}

	#[test]
	fn unknown_value_falls_back_to_standard() {
		let valued = resolve_value(99);
		assert!(std::ptr::eq(valued.card, CreditCard::STANDARD));
		assert!(valued.fallback);
	}

	#[test]
	fn each_lookup_encodes_its_card_once() {
		let named = NamedCard {
			card: CreditCard::PREMIUM,
		};
		assert_eq!(serde_json::to_string(&named).unwrap(), r#"{"card":"Premium"}"#);
		assert_eq!(
			serde_json::to_string(&resolve_value(2)).unwrap(),
			r#"{"card":2,"fallback":false}"#
		);
	}

	#[test]
	fn name_lookup_honors_ignore_case() {
		let args = Args::parse_from(["strong-enums-demo", "--name", "platinum", "--ignore-case"]);
		assert!(std::ptr::eq(
			resolve_name(&args).unwrap().unwrap(),
			CreditCard::PLATINUM
		));

		let strict = Args::parse_from(["strong-enums-demo", "--name", "platinum"]);
		assert!(resolve_name(&strict).unwrap_err().is_not_found());
	}
}
