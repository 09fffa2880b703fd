//! Basic usage example for validizer
//!
//! Run: `RUST_LOG=validizer=debug cargo run -p validizer --example basic_usage`

use tracing_subscriber::EnvFilter;
use validizer::prelude::*;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Registry::new(ValidatorConfig::default())?
        .with_rule(Rule::options(OptionSet::parse("Rock, Paper, Scissors"), true));

    let inputs = [
        ("phone number", "709 555 1234"),
        ("postal code", "a1b2c3"),
        ("licence plate", "abc-12"),
        ("name", "mary-jane o'brien"),
        ("number", "1234.5"),
        ("range", "10-5"),
        ("mcp", "123456789012"),
        ("bank card", "9111111111111111"),
        ("text", "ro"),
        ("date", "2024 02 29"),
        ("colour", "red"),
    ];

    for (validator, input) in inputs {
        match registry.validate_named(validator, input) {
            Ok(value) => println!("✓ {validator}: {input:?} -> {value}"),
            Err(e) => println!("✗ {validator}: {input:?} rejected: {e}"),
        }
    }

    let price = ValidatorConfig::default()
        .number()
        .format(NumberFormat::Currency);
    match price.validate("-1234.5") {
        Ok(value) => println!("\n✓ currency: {value}"),
        Err(e) => println!("\n✗ currency: {e}"),
    }

    Ok(())
}
