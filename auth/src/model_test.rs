use super::*;

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("admin@test.com", "secret");
    let debug = format!("{creds:?}");
    assert!(debug.contains("admin@test.com"));
    assert!(!debug.contains("secret"));
}

#[test]
fn credentials_serialize_as_login_body() {
    let creds = Credentials::new("admin@test.com", "secret");
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "admin@test.com", "password": "secret" }));
}

#[test]
fn validate_trims_email_and_keeps_password() {
    let creds = Credentials::new("  admin@test.com ", " pw ").validate().unwrap();
    assert_eq!(creds.email, "admin@test.com");
    assert_eq!(creds.password, " pw ");
}

#[test]
fn validate_requires_email_then_password() {
    assert_eq!(
        Credentials::new("   ", "").validate(),
        Err(LoginError::MissingField("email"))
    );
    assert_eq!(
        Credentials::new("a@b.com", "").validate(),
        Err(LoginError::MissingField("password"))
    );
}

// =============================================================
// CsrfToken
// =============================================================

#[test]
fn csrf_decode_percent_escapes() {
    assert_eq!(CsrfToken::decode("abc%3D123").unwrap().as_str(), "abc=123");
}

#[test]
fn csrf_decode_leaves_plus_alone() {
    assert_eq!(CsrfToken::decode("a+b").unwrap().as_str(), "a+b");
}

#[test]
fn csrf_decode_rejects_truncated_escape() {
    assert!(matches!(CsrfToken::decode("abc%3"), Err(LoginError::InvalidCsrfToken(_))));
    assert!(matches!(CsrfToken::decode("abc%"), Err(LoginError::InvalidCsrfToken(_))));
}

#[test]
fn csrf_decode_rejects_non_hex_escape() {
    assert!(matches!(CsrfToken::decode("%ZZ"), Err(LoginError::InvalidCsrfToken(_))));
}

#[test]
fn csrf_decode_rejects_invalid_utf8() {
    assert!(matches!(CsrfToken::decode("%FF"), Err(LoginError::InvalidCsrfToken(_))));
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn response_reads_string_token() {
    let resp = LoginResponse::from_body(r#"{"token":"tok_xyz","user":{"id":1}}"#);
    assert_eq!(resp.session_token(), Some(SessionToken::new("tok_xyz")));
}

#[test]
fn response_stringifies_numeric_token() {
    let resp = LoginResponse::from_body(r#"{"token":42}"#);
    assert_eq!(resp.session_token(), Some(SessionToken::new("42")));
}

#[test]
fn response_without_usable_token_is_empty() {
    for body in [r"{}", r#"{"token":null}"#, r#"{"token":""}"#, r#"{"token":false}"#, r#"{"token":{}}"#] {
        assert_eq!(LoginResponse::from_body(body).session_token(), None, "body {body}");
    }
}

#[test]
fn response_non_json_body_is_empty() {
    assert_eq!(LoginResponse::from_body("<html>ok</html>").session_token(), None);
    assert_eq!(LoginResponse::from_body("").session_token(), None);
}

#[test]
fn outcome_is_success() {
    assert!(LoginOutcome::Success(SessionToken::new("t")).is_success());
    assert!(!LoginOutcome::Failure("x".to_owned()).is_success());
}
