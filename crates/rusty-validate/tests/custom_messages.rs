// Custom message resolution through the public API

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_validate::{FieldFailure, Kind, Validate, ValidateError, Validator, ValidatorConfig};

#[derive(Debug, Clone, Validate)]
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

fn user(first_name: &str, age: i32, email: &str) -> User {
    User {
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        age,
        email: email.to_string(),
    }
}

#[test]
fn valid_user_passes() {
    assert_eq!(user("John", 30, "x@y.com").validate(), Ok(()));
}

#[test]
fn invalid_user_reports_custom_messages() {
    let err = user("", 200, "x@y.com").validate().unwrap_err();
    let errors = err.field_errors().unwrap();

    assert_eq!(errors.len(), 2);

    let first = errors.get(0).unwrap();
    assert_eq!(first.struct_field(), "first_name");
    assert_eq!(first.tag(), "required");
    assert_eq!(first.custom_message(), "First Name is required!");

    let second = errors.get(1).unwrap();
    assert_eq!(second.struct_field(), "age");
    assert_eq!(second.tag(), "range");
    assert_eq!(second.param(), "0,130");
    assert_eq!(second.kind(), Kind::Int);
    assert_eq!(second.custom_message(), "Age must be between 0 and 130!");
}

#[test]
fn summary_lists_diagnostics() {
    let err = user("", 200, "x@y.com").validate().unwrap_err();

    assert_eq!(
        err.to_string(),
        "Key: 'User.first_name' Error:Field validation for 'first_name' failed on the 'required' tag\n\
         Key: 'User.age' Error:Field validation for 'age' failed on the 'range' tag"
    );
}

#[test]
fn unannotated_field_has_empty_message() {
    let err = user("John", 30, "not-an-email").validate().unwrap_err();
    let errors = err.field_errors().unwrap();

    assert_eq!(errors.len(), 1);
    let failure = errors.for_field("email").unwrap();
    assert_eq!(failure.tag(), "email");
    assert_eq!(failure.custom_message(), "");
    assert!(errors.custom_messages().is_empty());
}

#[rstest]
#[case(user("", 30, "x@y.com"), 1)]
#[case(user("", 200, "x@y.com"), 2)]
#[case(user("", -1, ""), 3)]
fn one_failure_per_violation(#[case] record: User, #[case] expected: usize) {
    let err = record.validate().unwrap_err();
    assert_eq!(err.field_errors().map(|e| e.len()), Some(expected));
}

#[test]
fn validation_is_idempotent() {
    let record = user("", 200, "x@y.com");
    let validator = Validator::new();

    assert_eq!(validator.validate(&record), validator.validate(&record));
}

#[test]
fn failures_serialize_with_messages() {
    let err = user("", 30, "x@y.com").validate().unwrap_err();
    let errors = err.into_field_errors().unwrap();

    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json[0]["namespace"], "User.first_name");
    assert_eq!(json[0]["custom_message"], "First Name is required!");
}

#[derive(Validate)]
struct Account {
    #[required]
    #[label("Username")]
    #[custom_message = "Choose a username"]
    username: String,

    #[length(8, 64)]
    #[label("Password")]
    password: String,
}

#[test]
fn labels_change_reported_field_only() {
    let mut config = ValidatorConfig::default();
    config.engine.use_labels = true;

    let account = Account {
        username: String::new(),
        password: "short".to_string(),
    };
    let err = Validator::with_config(config).validate(&account).unwrap_err();
    let errors = err.field_errors().unwrap();

    let username = errors.get(0).unwrap();
    assert_eq!(username.field(), "Username");
    assert_eq!(username.namespace(), "Account.Username");
    assert_eq!(username.struct_field(), "username");
    assert_eq!(username.custom_message(), "Choose a username");

    let password = errors.get(1).unwrap();
    assert_eq!(password.message(), password.to_string());
}

#[test]
fn configured_annotation_key() {
    let mut config = ValidatorConfig::default();
    config.messages.annotation = "label".to_string();

    let account = Account {
        username: String::new(),
        password: "long enough password".to_string(),
    };
    let err = account.validate_with(&Validator::with_config(config)).unwrap_err();

    assert!(matches!(&err, ValidateError::Invalid(_)));
    assert_eq!(err.field_errors().unwrap().custom_messages(), vec!["Username"]);
}

#[derive(Validate)]
struct Note {
    #[required]
    #[custom_message = "  Spaced out!  "]
    body: String,
}

#[test]
fn message_is_kept_verbatim() {
    let err = Note { body: String::new() }.validate().unwrap_err();
    let failure = err.field_errors().unwrap().get(0).unwrap().clone();

    assert_eq!(failure.custom_message(), "  Spaced out!  ");
    assert_eq!(failure.message(), "  Spaced out!  ");
}
