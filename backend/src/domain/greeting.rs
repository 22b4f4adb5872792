//! Greeting texts served by the root and `/greet` endpoints.

/// Name substituted when a greeting request carries no name.
pub const DEFAULT_GUEST_NAME: &str = "Guest";

/// Banner returned by the root endpoint to show the service is up.
pub const RUNNING_BANNER: &str = "Aplikasi Spring Boot Anda berjalan!";

/// Return the fixed running banner.
///
/// # Examples
/// ```
/// use techassessment::domain::greeting::say_hello;
///
/// assert_eq!(say_hello(), "Aplikasi Spring Boot Anda berjalan!");
/// ```
pub fn say_hello() -> &'static str {
    RUNNING_BANNER
}

/// Greet `name`, falling back to [`DEFAULT_GUEST_NAME`] when absent.
///
/// The name is echoed verbatim; empty or unusual input is not rejected.
///
/// # Examples
/// ```
/// use techassessment::domain::greeting::greet_with_name;
///
/// assert_eq!(greet_with_name(Some("Alice")), "Halo, Alice!");
/// assert_eq!(greet_with_name(None), "Halo, Guest!");
/// ```
pub fn greet_with_name(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_GUEST_NAME);
    format!("Halo, {name}!")
}
