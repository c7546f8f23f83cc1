// User registration with custom failure messages
//
// Run with: cargo run -p rusty-validate --example custom_messages

use rusty_validate::{FieldFailure, Validate, ValidateError, Validator, ValidatorConfig};

#[derive(Debug, Validate)]
struct User {
    #[required]
    #[custom_message = "First Name is required!"]
    first_name: String,

    last_name: String,

    #[range(0, 130)]
    #[custom_message = "Age must be between 0 and 130!"]
    age: i32,

    #[required]
    #[email]
    email: String,
}

fn report(user: &User, validator: &Validator) {
    match validator.validate(user) {
        Ok(()) => println!("{:?} is valid", user),
        Err(ValidateError::Invalid(errors)) => {
            println!("{} field(s) failed:", errors.len());
            for failure in &errors {
                println!("  {}: {}", failure.namespace(), failure.message());
            }
            println!("\nDiagnostics:\n{}", errors);
        }
        Err(ValidateError::Engine(err)) => println!("validation did not run: {}", err),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = ValidatorConfig::load_default()?;
    let validator = Validator::with_config(config);

    let user = User {
        first_name: String::new(),
        last_name: "Doe".to_string(),
        age: 200,
        email: "john.doe@example.com".to_string(),
    };
    report(&user, &validator);

    let user = User {
        first_name: "John".to_string(),
        ..user
    };
    let user = User { age: 42, ..user };
    report(&user, &validator);

    Ok(())
}
