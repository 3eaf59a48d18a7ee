// ============================================================================
// Basic Usage Example
// ============================================================================

use number_validator::prelude::*;
use number_validator::utils::init_logging;
use tracing::Level;

fn main() {
    // Rejections are logged at TRACE
    init_logging(Level::TRACE).expect("logging already initialized elsewhere");

    println!("=== Number Validator Example ===\n");

    // Build the format N(17,2) for non-negative amounts
    let config = ValidatorConfig::builder(17)
        .scale(2)
        .only_positive(true)
        .build()
        .unwrap();
    let validator = NumberValidator::from_config(config);

    println!("Created validator for {}\n", config);

    println!("Checking values...");
    for value in ["0", "0,0", "+1.23", "-1.23", "0.000", "a.bc", "12345678901234567.0"] {
        println!("  {:<22} -> {}", format!("{:?}", value), validator.is_valid(Some(value)));
    }
    println!("  {:<22} -> {}", "None", validator.is_valid(None));

    // Parse accepted values into decimals
    println!("\n=== Decimal Conversion ===");
    for value in ["123,45", "+0.5", "42"] {
        if let Some(parsed) = validator.parse(Some(value)) {
            match parsed.to_decimal() {
                Ok(amount) => println!("  {} -> {}", parsed, amount),
                Err(err) => println!("  {} -> {}", parsed, err),
            }
        }
    }

    // Formats can also be read from notation
    println!("\n=== Notation ===");
    for notation in ["N(5)", "N(10,4)", "N(2,2)", "N(0)"] {
        match notation.parse::<ValidatorConfig>() {
            Ok(config) => println!("  {:<8} -> {:?}", notation, config),
            Err(err) => println!("  {:<8} -> error: {}", notation, err),
        }
    }
}
