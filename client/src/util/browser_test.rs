use super::*;

#[cfg(not(feature = "csr"))]
#[test]
fn cookies_absent_outside_browser() {
    assert_eq!(DocumentCookies.cookie_string(), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn storage_fails_outside_browser() {
    let store = LocalTokenStore;
    assert!(matches!(store.save(&SessionToken::new("t")), Err(LoginError::Storage(_))));
    assert!(matches!(store.clear(), Err(LoginError::Storage(_))));
    assert_eq!(store.load(), None);
}
