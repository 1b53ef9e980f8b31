use serde::Serialize;
use std::fmt;

/// Checks whether a string looks like an email address.
///
/// This is a syntactic heuristic, not an RFC 5322 parser. The candidate is
/// split on the first `@` and accepted when:
/// - the local part is non-empty
/// - the domain part is non-empty and contains a `.`
/// - the domain neither starts nor ends with `.`
/// - the domain contains no `..`
///
/// The local part is not inspected further, and any `@` after the first one
/// simply becomes part of the domain.
///
/// # Examples
/// ```
/// use email_checker::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(is_valid_email("user..name@domain.com"));
/// assert!(!is_valid_email("user@domain..com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    combined_is_valid_email(email)
}

/// Same as [`is_valid_email`], with an absent value treated as invalid.
pub fn is_valid_optional_email(email: Option<&str>) -> bool {
    email.is_some_and(is_valid_email)
}

/// Selects which implementation of the syntax check runs.
///
/// Both variants accept exactly the same inputs. They are kept apart so their
/// cost can be compared (see [`crate::benchmark`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStrategy {
    /// One statement per rule, with an extra whole-string dot check up front.
    Naive,
    /// Early rejection followed by a single short-circuited condition.
    Combined,
}

impl ValidationStrategy {
    pub const ALL: [ValidationStrategy; 2] = [ValidationStrategy::Naive, ValidationStrategy::Combined];

    pub fn validate(self, email: &str) -> bool {
        match self {
            ValidationStrategy::Naive => naive_is_valid_email(email),
            ValidationStrategy::Combined => combined_is_valid_email(email),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValidationStrategy::Naive => "naive",
            ValidationStrategy::Combined => "combined",
        }
    }
}

impl fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Multi-statement variant of the syntax check.
pub fn naive_is_valid_email(email: &str) -> bool {
    if !email.contains('@') || !email.contains('.') {
        return false;
    }
    let Some((local_part, domain)) = email.split_once('@') else {
        return false;
    };
    if local_part.is_empty() || domain.is_empty() || !domain.contains('.') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    if domain.contains("..") {
        return false;
    }
    true
}

/// Short-circuited variant of the syntax check.
pub fn combined_is_valid_email(email: &str) -> bool {
    if email.is_empty() || !email.contains('@') {
        return false;
    }

    let Some((local_part, domain)) = email.split_once('@') else {
        return false;
    };

    !(local_part.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.contains(".."))
}
