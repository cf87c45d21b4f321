// Contact form validation.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Anything but `@` and the ECMAScript whitespace set (Unicode `\s` differs:
/// it has U+0085 and lacks U+FEFF).
const NOT_WS_OR_AT: &str = r"[^\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}@]";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let p = NOT_WS_OR_AT;
    Regex::new(&format!(r"^{p}+@{p}+\.{p}+$")).expect("email pattern compiles")
});

/// Display text is shown verbatim in the error toast.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

pub fn validate(name: &str, email: &str, message: &str) -> Result<ContactSubmission, ContactError> {
    let (name, email, message) = (name.trim(), email.trim(), message.trim());
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// `local@domain.tld` with no whitespace or extra `@` in any part.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_win_over_bad_email() {
        assert_eq!(validate("", "nope", "hi"), Err(ContactError::MissingFields));
        assert_eq!(validate("Ann", "a@b.co", "   "), Err(ContactError::MissingFields));
        assert_eq!(
            ContactError::MissingFields.to_string(),
            "Please fill in all fields"
        );
    }

    #[test]
    fn bad_email_is_reported() {
        assert_eq!(validate("Ann", "ann.example.com", "hi"), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn valid_submission_is_trimmed() {
        let s = validate(" Ann ", "ann@example.com ", " Table for two ").unwrap();
        assert_eq!(s.name, "Ann");
        assert_eq!(s.email, "ann@example.com");
        assert_eq!(s.message, "Table for two");
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.c", "first.last@mail.example.org", "x@y.z.w", "a@b..c"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["", "a@b", "@b.c", "a@.c", "a@b.", "a b@c.d", "a@b@c.d", "plain"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn whitespace_follows_the_browser_definition() {
        // BOM and NBSP count as whitespace, NEL does not
        assert!(!is_valid_email("a\u{feff}@b.c"));
        assert!(!is_valid_email("a@b\u{a0}.c"));
        assert!(!is_valid_email("a@b.c\u{2028}"));
        assert!(!is_valid_email("a\x0b@b.c"));
        assert!(is_valid_email("a\u{85}@b.c"));
    }
}
