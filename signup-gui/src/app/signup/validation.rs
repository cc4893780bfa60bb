pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password should be of minimum 8 characters length")]
    PasswordTooShort,
}

impl ValidationError {
    /// Message shown under the offending input.
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmailRequired => "Email is required",
            Self::InvalidEmail => "Enter a valid email",
            Self::PasswordRequired => "Password is required",
            Self::PasswordTooShort => "Password should be of minimum 8 characters length",
        }
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    email_address::EmailAddress::parse_with_options(
        email,
        email_address::Options::default()
            .with_required_tld()
            .without_display_text()
            .without_domain_literal(),
    )
    .map(|_| ())
    .map_err(|_| ValidationError::InvalidEmail)
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError::PasswordRequired)
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Err(ValidationError::PasswordTooShort)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_empty() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn test_validate_email_invalid() {
        for email in [
            "test",
            "test@",
            "@gmail.com",
            "test@gmail",
            "test gmail.com",
            "te st@gmail.com",
            "test@@gmail.com",
            "Jane <jane@example.com>",
            "jane@[127.0.0.1]",
        ] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::InvalidEmail),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_validate_email_valid() {
        for email in [
            "ANDtesXYZt@gmail.com",
            "user@example.com",
            "first.last+tag@sub.domain.org",
        ] {
            assert!(validate_email(email).is_ok(), "{} should be accepted", email);
        }
    }

    #[test]
    fn test_validate_password() {
        assert_eq!(validate_password(""), Err(ValidationError::PasswordRequired));
        assert_eq!(validate_password("123"), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            validate_password("1234567"),
            Err(ValidationError::PasswordTooShort)
        );
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("321321321").is_ok());
        // Counted in characters, not bytes.
        assert_eq!(
            validate_password("éééé"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_messages_match_display() {
        for e in [
            ValidationError::EmailRequired,
            ValidationError::InvalidEmail,
            ValidationError::PasswordRequired,
            ValidationError::PasswordTooShort,
        ] {
            assert_eq!(e.message(), e.to_string());
        }
    }
}
