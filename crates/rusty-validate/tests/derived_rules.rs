// Rule attributes evaluated through #[derive(Validate)]

use pretty_assertions::assert_eq;
use rusty_validate::{FieldFailure, Validate};

fn is_even(value: &i64) -> bool {
    value % 2 == 0
}

#[derive(Clone, Validate)]
struct Registration {
    #[required]
    #[min_length(3)]
    #[max_length(20)]
    #[starts_with("user_")]
    username: String,

    #[email]
    #[no_public_domains]
    #[blocked_domains("spam.test")]
    email: String,

    #[password("medium")]
    password: String,

    #[equals_field(password)]
    password_confirm: String,

    #[enum_variant("admin", "member")]
    role: String,

    #[depends_on("role", "admin")]
    admin_code: Option<String>,

    #[url]
    website: Option<String>,

    #[min(18)]
    #[max(99)]
    age: u8,

    #[unique]
    #[min_items(1)]
    tags: Vec<String>,

    #[custom(is_even)]
    seats: i64,
}

fn valid() -> Registration {
    Registration {
        username: "user_john".to_string(),
        email: "john@acme.test".to_string(),
        password: "Secret123".to_string(),
        password_confirm: "Secret123".to_string(),
        role: "member".to_string(),
        admin_code: None,
        website: None,
        age: 30,
        tags: vec!["a".to_string(), "b".to_string()],
        seats: 4,
    }
}

fn failed_tags(record: &Registration) -> Vec<(String, String)> {
    match record.validate() {
        Ok(()) => Vec::new(),
        Err(err) => err
            .field_errors()
            .map(|errors| {
                errors
                    .iter()
                    .map(|e| (e.struct_field().to_string(), e.tag().to_string()))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn pair(field: &str, tag: &str) -> (String, String) {
    (field.to_string(), tag.to_string())
}

#[test]
fn valid_registration() {
    assert!(valid().validate().is_ok());
}

#[test]
fn first_failing_rule_per_field() {
    let mut record = valid();
    record.username = "ab".to_string();

    // min_length fails first; starts_with is not reported
    assert_eq!(failed_tags(&record), vec![pair("username", "min_length")]);
}

#[test]
fn string_and_email_rules() {
    let mut record = valid();
    record.username = "john_doe".to_string();
    record.email = "john@gmail.com".to_string();

    assert_eq!(
        failed_tags(&record),
        vec![pair("username", "starts_with"), pair("email", "no_public_domains")]
    );

    record.username = "user_john".to_string();
    record.email = "john@spam.test".to_string();
    assert_eq!(failed_tags(&record), vec![pair("email", "blocked_domains")]);
}

#[test]
fn cross_field_rules() {
    let mut record = valid();
    record.password_confirm = "Secret124".to_string();
    record.role = "admin".to_string();

    assert_eq!(
        failed_tags(&record),
        vec![pair("password_confirm", "equals_field"), pair("admin_code", "depends_on")]
    );

    record.password_confirm = record.password.clone();
    record.admin_code = Some("42".to_string());
    assert!(failed_tags(&record).is_empty());
}

#[test]
fn enum_and_numeric_rules() {
    let mut record = valid();
    record.role = "guest".to_string();
    record.age = 12;
    record.seats = 3;

    assert_eq!(
        failed_tags(&record),
        vec![pair("role", "enum_variant"), pair("age", "min"), pair("seats", "is_even")]
    );
}

#[test]
fn collection_rules() {
    let mut record = valid();
    record.tags = vec!["a".to_string(), "a".to_string()];
    assert_eq!(failed_tags(&record), vec![pair("tags", "unique")]);

    record.tags = Vec::new();
    assert_eq!(failed_tags(&record), vec![pair("tags", "min_items")]);
}

#[test]
fn optional_values_only_checked_when_present() {
    let mut record = valid();
    record.website = Some("not a url".to_string());
    assert_eq!(failed_tags(&record), vec![pair("website", "url")]);

    record.website = Some("https://acme.test".to_string());
    assert!(failed_tags(&record).is_empty());
}

#[test]
fn weak_password() {
    let mut record = valid();
    record.password = "password".to_string();
    record.password_confirm = "password".to_string();

    let err = record.validate().unwrap_err();
    let failure = err.field_errors().unwrap().for_field("password").unwrap().clone();
    assert_eq!(failure.param(), "medium");
    assert_eq!(failure.custom_message(), "");
}

#[derive(Validate)]
struct Ledger {
    #[max(9007199254740992)]
    balance: u64,

    #[range(-9007199254740992, 0)]
    debt: i64,

    #[unique]
    labels: Option<Vec<String>>,
}

#[test]
fn integer_bounds_are_exact_beyond_float_precision() {
    let ledger = Ledger {
        balance: 9_007_199_254_740_993,
        debt: -9_007_199_254_740_993,
        labels: None,
    };

    let err = ledger.validate().unwrap_err();
    let tags: Vec<(&str, &str)> = err
        .field_errors()
        .unwrap()
        .iter()
        .map(|e| (e.struct_field(), e.tag()))
        .collect();
    assert_eq!(tags, vec![("balance", "max"), ("debt", "range")]);

    let ledger = Ledger {
        balance: 9_007_199_254_740_992,
        debt: -9_007_199_254_740_992,
        labels: None,
    };
    assert!(ledger.validate().is_ok());
}

#[test]
fn unique_checks_items_of_optional_collection() {
    let ledger = Ledger {
        balance: 0,
        debt: 0,
        labels: Some(vec!["q1".to_string(), "q1".to_string()]),
    };

    let err = ledger.validate().unwrap_err();
    let failure = err.field_errors().unwrap().for_field("labels").unwrap().clone();
    assert_eq!(failure.tag(), "unique");

    let ledger = Ledger {
        labels: Some(vec!["q1".to_string(), "q2".to_string()]),
        ..ledger
    };
    assert!(ledger.validate().is_ok());
}
