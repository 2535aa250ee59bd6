use validator::ValidateEmail;

/// Validates that the input looks like a deliverable email address.
///
/// On top of the RFC checks done by `validator`, the domain must contain a dot
/// that is neither its first nor its last character, so `a@b` is rejected.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || !email.validate_email() {
        return false;
    }

    match email.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// The check a browser `type="email"` field applies before it lets a form submit:
/// non-empty, no whitespace, and a non-empty part on each side of a single `@`.
pub fn looks_like_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
