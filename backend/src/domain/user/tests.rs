//! Tests for the user record and its validation rules.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn valid_user() -> User {
    User::new("Al", "al@example.com", Some("1234567890".to_owned()))
}

fn violations(user: &User) -> Vec<UserValidationError> {
    user.validate()
        .map(|()| Vec::new())
        .unwrap_or_else(|errors| errors.as_slice().to_vec())
}

#[rstest]
fn constructor_keeps_fields_unmodified(valid_user: User) {
    assert_eq!(valid_user.id(), None);
    assert_eq!(valid_user.name(), "Al");
    assert_eq!(valid_user.email(), "al@example.com");
    assert_eq!(valid_user.phone(), Some("1234567890"));
}

#[rstest]
fn default_user_is_empty() {
    let user = User::default();
    assert_eq!(user.id(), None);
    assert_eq!(user.name(), "");
    assert_eq!(user.email(), "");
    assert_eq!(user.phone(), None);
}

#[rstest]
fn setters_round_trip_through_getters() {
    let mut user = User::default();
    user.set_id(Some(UserId::new(7)));
    user.set_name("Siti Rahma");
    user.set_email("siti@example.id");
    user.set_phone(Some("081234567890".to_owned()));

    assert_eq!(user.id(), Some(UserId::new(7)));
    assert_eq!(user.name(), "Siti Rahma");
    assert_eq!(user.email(), "siti@example.id");
    assert_eq!(user.phone(), Some("081234567890"));

    user.set_phone(None);
    user.set_id(None);
    assert_eq!(user.phone(), None);
    assert_eq!(user.id(), None);
}

#[rstest]
fn setters_do_not_validate() {
    let mut user = User::default();
    user.set_name("");
    user.set_email("nope");
    assert_eq!(user.name(), "");
    assert_eq!(user.email(), "nope");
}

#[rstest]
fn with_id_attaches_identifier(valid_user: User) {
    let stored = valid_user.clone().with_id(UserId::new(42));
    assert_eq!(stored.id(), Some(UserId::new(42)));
    assert_eq!(stored.name(), valid_user.name());
}

#[rstest]
fn valid_user_passes(valid_user: User) {
    assert!(valid_user.validate().is_ok());
}

#[rstest]
fn phone_is_optional() {
    let user = User::new("Al", "al@example.com", None);
    assert!(user.validate().is_ok());
}

#[rstest]
#[case(NAME_MIN)]
#[case(NAME_MAX)]
fn name_accepts_boundary_lengths(#[case] length: usize) {
    let user = User::new("a".repeat(length), "al@example.com", None);
    assert!(user.validate().is_ok());
}

#[rstest]
#[case(PHONE_MIN)]
#[case(PHONE_MAX)]
fn phone_accepts_boundary_lengths(#[case] length: usize) {
    let user = User::new("Al", "al@example.com", Some("1".repeat(length)));
    assert!(user.validate().is_ok());
}

#[rstest]
#[case("", vec![UserValidationError::NameRequired])]
#[case(
    " ",
    vec![
        UserValidationError::NameRequired,
        UserValidationError::NameLength { min: NAME_MIN, max: NAME_MAX },
    ]
)]
#[case("A", vec![UserValidationError::NameLength { min: NAME_MIN, max: NAME_MAX }])]
#[case("   ", vec![UserValidationError::NameRequired])]
fn name_violations(#[case] name: &str, #[case] expected: Vec<UserValidationError>) {
    let user = User::new(name, "al@example.com", None);
    assert_eq!(violations(&user), expected);
}

#[rstest]
fn empty_name_is_not_also_reported_as_too_short() {
    let errors = User::new("", "al@example.com", None)
        .validate()
        .expect_err("name missing");

    assert_eq!(errors.to_string(), "name: Name is required");
}

#[rstest]
fn name_rejects_overlong_value() {
    let user = User::new("a".repeat(NAME_MAX + 1), "al@example.com", None);
    assert_eq!(
        violations(&user),
        vec![UserValidationError::NameLength {
            min: NAME_MIN,
            max: NAME_MAX
        }]
    );
}

#[rstest]
fn name_length_counts_characters_not_bytes() {
    let user = User::new("é".repeat(NAME_MAX), "al@example.com", None);
    assert!(user.validate().is_ok());
}

#[rstest]
#[case("", vec![UserValidationError::EmailRequired])]
#[case(
    "  ",
    vec![UserValidationError::EmailRequired, UserValidationError::EmailInvalid]
)]
#[case("plainaddress", vec![UserValidationError::EmailInvalid])]
fn email_violations(#[case] email: &str, #[case] expected: Vec<UserValidationError>) {
    let user = User::new("Al", email, None);
    assert_eq!(violations(&user), expected);
}

#[rstest]
#[case(9)]
#[case(16)]
fn phone_rejects_out_of_range_lengths(#[case] length: usize) {
    let user = User::new("Al", "al@example.com", Some("1".repeat(length)));
    assert_eq!(
        violations(&user),
        vec![UserValidationError::PhoneLength {
            min: PHONE_MIN,
            max: PHONE_MAX
        }]
    );
}

#[rstest]
fn validation_reports_every_field() {
    let user = User::new("", "", Some("123".to_owned()));
    let errors = user.validate().expect_err("all fields invalid");
    let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
    assert_eq!(
        fields,
        vec![UserField::Name, UserField::Email, UserField::Phone]
    );
}

#[rstest]
#[case(UserValidationError::NameRequired, "Name is required")]
#[case(
    UserValidationError::NameLength { min: NAME_MIN, max: NAME_MAX },
    "Name must be between 2 and 50 characters"
)]
#[case(UserValidationError::EmailRequired, "Email is required")]
#[case(UserValidationError::EmailInvalid, "Email should be valid")]
#[case(
    UserValidationError::PhoneLength { min: PHONE_MIN, max: PHONE_MAX },
    "Phone number must be between 10 and 15 characters"
)]
fn violation_messages(#[case] error: UserValidationError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn collected_errors_display_field_prefixes() {
    let errors = User::new("A", "x", None)
        .validate()
        .expect_err("invalid user");
    assert_eq!(
        errors.to_string(),
        "name: Name must be between 2 and 50 characters; email: Email should be valid"
    );
}

#[rstest]
#[case("al@example.com")]
#[case("first.last+tag@sub.example.co.id")]
#[case("admin@localhost")]
#[case("user@[192.168.0.1]")]
#[case("o'brien@example.org")]
#[case("pengguna@contoh.indonesia")]
#[case("josé@dominio.es")]
#[case("\"john doe\"@example.com")]
#[case("\"a@b\"@example.com")]
#[case(r#""back\\slash"@example.com"#)]
#[case(r#""say \"hi\""@example.com"#)]
#[case("first.\"middle name\".last@example.com")]
#[case("😀@example.com")]
#[case("user@😀.example.com")]
#[case("user@exa_mple.com")]
#[case("user@[IPv6:2001:db8::1]")]
#[case("user@[ipv6:::1]")]
fn accepts_well_formed_emails(#[case] email: &str) {
    assert!(is_valid_email(email), "{email} should be accepted");
}

#[rstest]
#[case("plainaddress")]
#[case("@example.com")]
#[case("al@")]
#[case("al..dots@example.com")]
#[case(".al@example.com")]
#[case("al@-example.com")]
#[case("al@example-.com")]
#[case("al@exa mple.com")]
#[case("al@example..com")]
#[case("\"unterminated@example.com")]
#[case("\"\"@example.com")]
#[case(r#""lone\"@example.com"#)]
#[case("user@[IPv6:zz::1]")]
#[case("user@[IPv6:2001:db8::1")]
#[case("user@[2001:db8::1]")]
fn rejects_malformed_emails(#[case] email: &str) {
    assert!(!is_valid_email(email), "{email} should be rejected");
}

#[rstest]
fn rejects_overlong_local_part() {
    let email = format!("{}@example.com", "a".repeat(EMAIL_LOCAL_MAX + 1));
    assert!(!is_valid_email(&email));
}

#[rstest]
fn serialises_as_camel_case_json(valid_user: User) {
    let value = serde_json::to_value(valid_user.with_id(UserId::new(1))).expect("serialise");
    assert_eq!(
        value,
        json!({
            "id": 1,
            "name": "Al",
            "email": "al@example.com",
            "phone": "1234567890"
        })
    );
}

#[rstest]
fn deserialises_with_missing_fields() {
    let user: User = serde_json::from_value(json!({ "name": "Al" })).expect("deserialise");
    assert_eq!(user.name(), "Al");
    assert_eq!(user.email(), "");
    assert_eq!(user.id(), None);
}

#[rstest]
#[case("15", Some(15))]
#[case("-3", Some(-3))]
#[case("abc", None)]
#[case("", None)]
fn user_id_parses_decimal_text(#[case] raw: &str, #[case] expected: Option<i64>) {
    assert_eq!(raw.parse::<UserId>().ok().map(UserId::get), expected);
}
