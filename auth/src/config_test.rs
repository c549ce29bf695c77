use super::*;

#[test]
fn resolve_defaults_when_unset() {
    let cfg = ApiConfig::resolve(None);
    assert_eq!(cfg.base_url(), "http://localhost:8000");
    assert_eq!(cfg, ApiConfig::default());
}

#[test]
fn resolve_defaults_when_blank() {
    assert_eq!(ApiConfig::resolve(Some("   ")).base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_trims_trailing_slashes() {
    let cfg = ApiConfig::resolve(Some("https://api.example.test//"));
    assert_eq!(cfg.base_url(), "https://api.example.test");
}

#[test]
fn endpoint_urls() {
    let cfg = ApiConfig::resolve(Some("https://api.example.test/"));
    assert_eq!(cfg.csrf_cookie_url(), "https://api.example.test/sanctum/csrf-cookie");
    assert_eq!(cfg.login_url(), "https://api.example.test/api/admin/login");
}

#[test]
fn from_env_reads_variable() {
    // Only this test touches NEXT_PUBLIC_API_BASE_URL.
    unsafe { std::env::set_var(API_BASE_URL_ENV, "http://backend.test:9000/") };
    assert_eq!(ApiConfig::from_env().base_url(), "http://backend.test:9000");
    unsafe { std::env::remove_var(API_BASE_URL_ENV) };
    assert_eq!(ApiConfig::from_env().base_url(), DEFAULT_API_BASE_URL);
}
