use super::*;

#[test]
fn credentials_serialize_as_email_and_password() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() };
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, serde_json::json!({ "email": "a@b.com", "password": "secret1" }));
}

#[test]
fn parse_login_response_reads_token_and_ignores_extra_fields() {
    let parsed = parse_login_response(r#"{"token":"abc.def.ghi","expiresIn":3600}"#).unwrap();
    assert_eq!(parsed, LoginResponse { token: "abc.def.ghi".to_owned() });
}

#[test]
fn parse_login_response_rejects_missing_token() {
    let err = parse_login_response(r#"{"ok":true}"#).unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[test]
fn status_error_formats_login_failed() {
    assert_eq!(ApiError::Status(401).to_string(), "Login failed: 401");
}

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpAuthApi::new(ApiConfig::default());
    let creds = Credentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() };
    let err = futures::executor::block_on(api.login(&creds)).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
