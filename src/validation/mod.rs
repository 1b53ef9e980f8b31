/// Syntactic email checks.
///
/// A deliberately permissive heuristic: the candidate is split on the first
/// `@`, the local part only has to be non-empty and the domain has to contain
/// a dot without leading, trailing or doubled dots.
///
/// Two interchangeable implementations are exposed through
/// [`syntax::ValidationStrategy`].
///
/// # Examples
/// ```
/// use email_checker::validation::syntax::{ValidationStrategy, is_valid_email};
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(ValidationStrategy::Naive.validate("user@domain.c"));
/// assert!(!is_valid_email("plainaddress"));
/// ```
pub mod syntax;

/// Exact, case-sensitive matching of an address against a domain.
///
/// # Examples
/// ```
/// use email_checker::validation::domain::is_email_from_domain;
///
/// assert!(is_email_from_domain("user@example.com", "example.com"));
/// assert!(!is_email_from_domain("user@example.com", "Example.com"));
/// ```
pub mod domain;

pub use domain::is_email_from_domain;
pub use syntax::{ValidationStrategy, is_valid_email, is_valid_optional_email};
