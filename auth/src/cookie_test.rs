use super::*;

#[test]
fn find_cookie_locates_named_row() {
    let cookies = "theme=dark; XSRF-TOKEN=abc%3D123; laravel_session=s1";
    assert_eq!(find_cookie(cookies, "XSRF-TOKEN"), Some("abc%3D123"));
    assert_eq!(find_cookie(cookies, "theme"), Some("dark"));
}

#[test]
fn find_cookie_requires_exact_name() {
    let cookies = "XSRF-TOKEN-OLD=stale; other=1";
    assert_eq!(find_cookie(cookies, "XSRF-TOKEN"), None);
}

#[test]
fn find_cookie_stops_at_second_equals() {
    assert_eq!(find_cookie("XSRF-TOKEN=abc=123", "XSRF-TOKEN"), Some("abc"));
}

#[test]
fn find_cookie_empty_value_is_absent() {
    assert_eq!(find_cookie("XSRF-TOKEN=; a=b", "XSRF-TOKEN"), None);
}

#[test]
fn find_cookie_only_splits_on_semicolon_space() {
    // A row separated without the space is not a separate cookie.
    assert_eq!(find_cookie("a=1;XSRF-TOKEN=x", "XSRF-TOKEN"), None);
}

#[test]
fn csrf_token_decodes_value() {
    let token = csrf_token(Some("XSRF-TOKEN=abc%3D123")).unwrap();
    assert_eq!(token.as_str(), "abc=123");
}

#[test]
fn csrf_token_missing_cookie_store() {
    assert_eq!(csrf_token(None), Err(LoginError::MissingCsrfToken));
}

#[test]
fn csrf_token_missing_cookie() {
    assert_eq!(csrf_token(Some("a=b; c=d")), Err(LoginError::MissingCsrfToken));
    assert_eq!(csrf_token(Some("")), Err(LoginError::MissingCsrfToken));
}

#[test]
fn csrf_token_malformed_value() {
    assert!(matches!(
        csrf_token(Some("XSRF-TOKEN=%E0%A4%A")),
        Err(LoginError::InvalidCsrfToken(_))
    ));
}
