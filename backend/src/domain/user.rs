//! User record stored in the `users` table.
//!
//! [`User`] is plain data: constructors and accessors never validate. The
//! constraints below are evaluated by [`User::validate`], which the user
//! service runs before anything reaches storage.
//!
//! | Field | Rule |
//! |-------|------|
//! | name  | not blank; [`NAME_MIN`]..=[`NAME_MAX`] characters |
//! | email | not blank; well-formed address |
//! | phone | optional; [`PHONE_MIN`]..=[`PHONE_MAX`] characters when present |

use std::fmt;
use std::net::Ipv6Addr;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum name length in characters.
pub const NAME_MIN: usize = 2;
/// Maximum name length in characters.
pub const NAME_MAX: usize = 50;
/// Minimum phone length in characters.
pub const PHONE_MIN: usize = 10;
/// Maximum phone length in characters.
pub const PHONE_MAX: usize = 15;

const EMAIL_LOCAL_MAX: usize = 64;
const EMAIL_DOMAIN_MAX: usize = 255;

/// Surrogate identifier assigned by storage on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field of [`User`] a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    /// Display name.
    Name,
    /// Contact address.
    Email,
    /// Optional phone number.
    Phone,
}

impl UserField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// A single constraint violation found by [`User::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Name is empty or whitespace.
    NameRequired,
    /// Name length falls outside `min..=max` characters.
    NameLength { min: usize, max: usize },
    /// Email is empty or whitespace.
    EmailRequired,
    /// Email does not match the address grammar.
    EmailInvalid,
    /// Phone length falls outside `min..=max` characters.
    PhoneLength { min: usize, max: usize },
}

impl UserValidationError {
    /// Field the violation belongs to.
    pub fn field(&self) -> UserField {
        match self {
            Self::NameRequired | Self::NameLength { .. } => UserField::Name,
            Self::EmailRequired | Self::EmailInvalid => UserField::Email,
            Self::PhoneLength { .. } => UserField::Phone,
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Name is required"),
            Self::NameLength { min, max } => {
                write!(f, "Name must be between {min} and {max} characters")
            }
            Self::EmailRequired => write!(f, "Email is required"),
            Self::EmailInvalid => write!(f, "Email should be valid"),
            Self::PhoneLength { min, max } => {
                write!(f, "Phone number must be between {min} and {max} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Every violation found on one record, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserValidationErrors(Vec<UserValidationError>);

impl UserValidationErrors {
    /// Borrow the individual violations.
    pub fn as_slice(&self) -> &[UserValidationError] {
        &self.0
    }

    /// Iterate over the violations.
    pub fn iter(&self) -> std::slice::Iter<'_, UserValidationError> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a UserValidationErrors {
    type Item = &'a UserValidationError;
    type IntoIter = std::slice::Iter<'a, UserValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for UserValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {violation}", violation.field().as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for UserValidationErrors {}

/// Application user.
///
/// `id` stays `None` until storage assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct User {
    id: Option<UserId>,
    name: String,
    email: String,
    phone: Option<String>,
}

impl User {
    /// Build an unsaved record from its fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            phone,
        }
    }

    /// Return the record with `id` attached. Used by storage adapters.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Storage-assigned identifier, if any.
    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Replace the identifier.
    pub fn set_id(&mut self, id: Option<UserId>) {
        self.id = id;
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Replace the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Contact address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Replace the contact address.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Phone number, if given.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Replace or clear the phone number.
    pub fn set_phone(&mut self, phone: Option<String>) {
        self.phone = phone;
    }

    /// Check every field constraint and report all violations at once.
    ///
    /// # Examples
    /// ```
    /// use techassessment::domain::{User, UserValidationError};
    ///
    /// let user = User::new("A", "not-an-email", None);
    /// let errors = user.validate().expect_err("both fields are invalid");
    /// assert!(errors.iter().any(|e| *e == UserValidationError::EmailInvalid));
    /// ```
    pub fn validate(&self) -> Result<(), UserValidationErrors> {
        let mut violations = Vec::new();
        check_name(&self.name, &mut violations);
        check_email(&self.email, &mut violations);
        if let Some(phone) = &self.phone {
            check_phone(phone, &mut violations);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(UserValidationErrors(violations))
        }
    }
}

/// Name rules: required, then length.
///
/// An empty name reports only [`UserValidationError::NameRequired`], even
/// though a plain size check would also flag it as too short. A blank but
/// non-empty name such as `" "` still gets both violations.
fn check_name(name: &str, violations: &mut Vec<UserValidationError>) {
    if name.trim().is_empty() {
        violations.push(UserValidationError::NameRequired);
    }
    if name.is_empty() {
        return;
    }
    let length = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&length) {
        violations.push(UserValidationError::NameLength {
            min: NAME_MIN,
            max: NAME_MAX,
        });
    }
}

fn check_email(email: &str, violations: &mut Vec<UserValidationError>) {
    if email.trim().is_empty() {
        violations.push(UserValidationError::EmailRequired);
    }
    if !email.is_empty() && !is_valid_email(email) {
        violations.push(UserValidationError::EmailInvalid);
    }
}

fn check_phone(phone: &str, violations: &mut Vec<UserValidationError>) {
    let length = phone.chars().count();
    if !(PHONE_MIN..=PHONE_MAX).contains(&length) {
        violations.push(UserValidationError::PhoneLength {
            min: PHONE_MIN,
            max: PHONE_MAX,
        });
    }
}

const ATOM_CHARS: &str = r"A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{10FFFF}";
const QUOTED_CHARS: &str = r"A-Za-z0-9!#$%&'*.(),<>\[\]:; @+/=?^_`{|}~\x{80}-\x{10FFFF}";
// Domain labels take the same specials as unquoted atoms.
const LABEL_CHARS: &str = ATOM_CHARS;
const IPV6_PREFIX: &str = "[ipv6:";

static LOCAL_PART_RE: OnceLock<Regex> = OnceLock::new();
static DOMAIN_RE: OnceLock<Regex> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
}

fn local_part_regex() -> &'static Regex {
    LOCAL_PART_RE.get_or_init(|| {
        let atom = format!("[{ATOM_CHARS}-]+");
        let quoted = format!(r#""(?:[{QUOTED_CHARS}-]|\\\\|\\")+""#);
        let word = format!("(?:{atom}|{quoted})");
        compile(&format!(r"^{word}(?:\.{word})*$"))
    })
}

fn domain_regex() -> &'static Regex {
    DOMAIN_RE.get_or_init(|| {
        let label = format!("[{LABEL_CHARS}](?:[{LABEL_CHARS}-]{{0,61}}[{LABEL_CHARS}])?");
        let ipv4 = r"\[[0-9]{1,3}(?:\.[0-9]{1,3}){3}\]";
        compile(&format!(r"^(?:{label}(?:\.{label})*|{ipv4})$"))
    })
}

/// `[IPv6:...]` literal; the prefix is case-insensitive.
fn is_ipv6_literal(domain: &str) -> bool {
    let Some(prefix) = domain.get(..IPV6_PREFIX.len()) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case(IPV6_PREFIX) {
        return false;
    }
    domain
        .get(IPV6_PREFIX.len()..)
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|address| address.parse::<Ipv6Addr>().is_ok())
}

/// Check `value` against the address grammar used by Bean Validation's
/// `@Email`.
///
/// The local part is dot-separated atoms or quoted strings. The domain is a
/// hostname (no dot required, so `admin@localhost` passes), an `[IPv4]`
/// literal or an `[IPv6:...]` literal.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.chars().count() > EMAIL_LOCAL_MAX || domain.chars().count() > EMAIL_DOMAIN_MAX {
        return false;
    }
    local_part_regex().is_match(local) && (is_ipv6_literal(domain) || domain_regex().is_match(domain))
}

#[cfg(test)]
mod tests;
