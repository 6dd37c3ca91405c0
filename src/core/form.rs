// Contact form validation. The form itself is a stub (no network I/O);
// only the checks and user-facing messages live here.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingField,
    InvalidEmail,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            FormError::MissingField => "Please fill in all required fields.",
            FormError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message. You will receive a response within 2-3 business days.";

pub fn validate(name: &str, email: &str, subject: &str, message: &str) -> Result<(), FormError> {
    if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
        return Err(FormError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// A single `@` with a non-empty local part and a dotted domain, and no
/// whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i + 1 < domain.len())
}
