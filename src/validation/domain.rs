use super::syntax::is_valid_email;

/// Checks whether a valid email address belongs to exactly `domain`.
///
/// Invalid addresses never match. The domain is taken from after the *last*
/// `@`, while [`is_valid_email`] splits on the first one, so the two can
/// disagree for addresses such as `a@b@c.com`. Comparison is exact: no case
/// folding, trimming or punycode conversion.
///
/// # Examples
/// ```
/// use email_checker::validation::domain::is_email_from_domain;
///
/// assert!(is_email_from_domain("user@example.com", "example.com"));
/// assert!(!is_email_from_domain("user@Example.com", "example.com"));
/// assert!(!is_email_from_domain("user@sub.domain.com", "domain.com"));
/// ```
pub fn is_email_from_domain(email: &str, domain: &str) -> bool {
    if !is_valid_email(email) {
        return false;
    }

    email_domain(email).is_some_and(|email_domain| email_domain == domain)
}

/// Returns everything after the last `@`, if there is one.
pub fn email_domain(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}
