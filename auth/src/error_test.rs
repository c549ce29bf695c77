use super::*;

#[test]
fn status_formats_like_http_client_message() {
    assert_eq!(
        LoginError::status(422).to_string(),
        "Request failed with status code 422"
    );
}

#[test]
fn status_is_a_network_error() {
    assert!(matches!(LoginError::status(500), LoginError::Network(_)));
}

#[test]
fn missing_tokens_use_user_facing_messages() {
    assert_eq!(LoginError::MissingCsrfToken.to_string(), "CSRF token tidak ditemukan");
    assert_eq!(
        LoginError::MissingSessionToken.to_string(),
        "Login gagal: Token tidak diterima."
    );
}

#[test]
fn missing_field_names_the_field() {
    assert_eq!(LoginError::MissingField("email").to_string(), "email wajib diisi.");
}

#[test]
fn codes_are_distinct() {
    let codes = [
        LoginError::Network(String::new()).code(),
        LoginError::MissingCsrfToken.code(),
        LoginError::InvalidCsrfToken(String::new()).code(),
        LoginError::MissingSessionToken.code(),
        LoginError::MissingField("email").code(),
        LoginError::Storage(String::new()).code(),
    ];
    let unique: std::collections::HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), codes.len());
}
