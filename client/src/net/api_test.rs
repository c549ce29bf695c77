use super::*;

#[test]
fn unavailable_is_a_network_error() {
    assert!(matches!(unavailable(), LoginError::Network(_)));
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn calls_outside_browser_fail_without_panicking() {
    let api = BrowserAuthApi::new(ApiConfig::default());
    assert_eq!(api.fetch_csrf_cookie().await, Err(unavailable()));

    let csrf = CsrfToken::decode("abc").unwrap();
    let result = api
        .submit_credentials(&Credentials::new("admin@test.com", "secret"), &csrf)
        .await;
    assert_eq!(result, Err(unavailable()));
}
