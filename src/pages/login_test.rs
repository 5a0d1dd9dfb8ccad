use super::*;

#[test]
fn validate_credentials_accepts_minimal_valid_input() {
    assert_eq!(validate_credentials("a@b.com", "secret"), Ok(()));
}

#[test]
fn validate_credentials_rejects_email_without_at() {
    for email in ["", "plainaddress", "user.example.com", "   "] {
        assert_eq!(validate_credentials(email, "secret1"), Err(ValidationError::InvalidEmail), "{email:?}");
    }
}

#[test]
fn validate_credentials_is_not_rfc_validation() {
    assert_eq!(validate_credentials("@", "secret1"), Ok(()));
}

#[test]
fn validate_credentials_rejects_short_passwords() {
    for password in ["", "a", "12345"] {
        assert_eq!(validate_credentials("a@b.com", password), Err(ValidationError::WeakPassword));
    }
}

#[test]
fn validate_credentials_counts_utf16_units_not_bytes() {
    assert_eq!(validate_credentials("a@b.com", "ééééé"), Err(ValidationError::WeakPassword));
    assert_eq!(validate_credentials("a@b.com", "éééééé"), Ok(()));
}

#[test]
fn validate_credentials_counts_astral_characters_as_two_units() {
    assert_eq!(validate_credentials("a@b.com", "😀😀😀"), Ok(()));
    assert_eq!(validate_credentials("a@b.com", "😀😀"), Err(ValidationError::WeakPassword));
}

#[test]
fn validate_credentials_checks_email_first() {
    assert_eq!(validate_credentials("nope", "x"), Err(ValidationError::InvalidEmail));
}

#[test]
fn validation_error_messages() {
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address.");
    assert_eq!(ValidationError::WeakPassword.to_string(), "Password must be at least 6 characters long.");
}

#[test]
fn login_form_validate_sets_and_clears_error_message() {
    let mut form = LoginForm::new("nope", "secret1");
    assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    assert_eq!(form.error_message, "Please enter a valid email address.");

    form.email = "a@b.com".to_owned();
    assert_eq!(form.validate(), Ok(()));
    assert!(form.error_message.is_empty());
}

#[test]
fn login_form_credentials_copy_fields() {
    let form = LoginForm::new("a@b.com", "secret1");
    let creds = form.credentials();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "secret1");
}
