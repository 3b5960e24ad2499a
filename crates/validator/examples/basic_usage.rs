//! Basic usage example for tessera-validator

use tessera_validator::prelude::*;

fn main() {
    let validator = Validator::default();

    // Plain mode: yes or no
    for value in ["user@example.com", "user@example"] {
        if validator.is_email(value, Plain) {
            println!("✓ '{value}' is an email address");
        } else {
            println!("✗ '{value}' is not an email address");
        }
    }

    // Verbose mode: message and captures
    let outcome = validator.is_date("31/12/2023", "DD/MM/YYYY", Verbose);
    println!("date: {outcome}");
    if let Some(matches) = &outcome.matches {
        println!("  fields: {:?}", &matches[1..]);
    }

    // Password policies
    let relaxed = PasswordPolicy {
        min_length: 6,
        require_uppercase: false,
        require_special_chars: false,
        ..Default::default()
    };
    println!(
        "password123 under relaxed policy: {}",
        validator.is_strong_password("password123", relaxed, Plain)
    );

    // Keyed lookups fail closed
    let outcome = validator.is_postal_code_by_key("12345", "XX", Verbose);
    println!("postal code: {}", outcome.message);

    // Custom patterns
    match validator.compile("^[A-Z]{3}-[0-9]{4}$") {
        Ok(rule) => println!("ABC-1234 matches: {}", validator.is_valid("ABC-1234", &rule, Plain)),
        Err(e) => println!("✗ {e}"),
    }

    println!("\nCatalog has {} built-in formats", Format::ALL.len());
}
