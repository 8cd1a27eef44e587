use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

// =============================================================
// Defaults and env parsing
// =============================================================

#[test]
fn defaults_are_relative_with_ten_second_deadline() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "");
    assert_eq!(config.timeout, Duration::from_millis(10_000));
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.validate(), Ok(BaseKind::Relative));
}

#[test]
fn from_lookup_without_vars_uses_defaults() {
    let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, ApiConfig::default());
}

#[test]
fn from_lookup_reads_base_and_timeout() {
    let config = ApiConfig::from_lookup(lookup_from(&[
        (BASE_URL_ENV, " http://127.0.0.1:8000 "),
        (TIMEOUT_MS_ENV, "2500"),
    ]))
    .unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.timeout, Duration::from_millis(2500));
}

#[test]
fn from_lookup_rejects_bad_timeout() {
    let err = ApiConfig::from_lookup(lookup_from(&[(TIMEOUT_MS_ENV, "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: TIMEOUT_MS_ENV, value: "soon".to_owned() });

    let err = ApiConfig::from_lookup(lookup_from(&[(TIMEOUT_MS_ENV, "0")])).unwrap_err();
    assert_eq!(err, ConfigError::ZeroTimeout);
}

// =============================================================
// Base address classification
// =============================================================

#[test]
fn base_kind_accepts_relative_and_absolute_forms() {
    assert_eq!(base_kind(""), Ok(BaseKind::Relative));
    assert_eq!(base_kind("/api"), Ok(BaseKind::Relative));
    assert_eq!(base_kind("https://auth.example.com"), Ok(BaseKind::Absolute));
    assert_eq!(base_kind("http://localhost:8000"), Ok(BaseKind::Absolute));
}

#[test]
fn base_kind_rejects_other_forms() {
    assert!(base_kind("ftp://example.com").is_err());
    assert!(base_kind("example.com").is_err());
    assert!(base_kind("//example.com").is_err());
}

// =============================================================
// URL building
// =============================================================

#[test]
fn url_for_relative_base_keeps_same_origin_path() {
    let config = ApiConfig::default();
    assert_eq!(config.url_for("/admin/product/", &[]), "/admin/product/");
}

#[test]
fn url_for_trims_trailing_slash_on_base() {
    let config = ApiConfig::default().with_base_url("http://localhost:8000/");
    assert_eq!(config.url_for("/admin/product/7", &[]), "http://localhost:8000/admin/product/7");
    assert_eq!(config.url_for("admin/dashboard/", &[]), "http://localhost:8000/admin/dashboard/");
}

#[test]
fn url_for_encodes_query_pairs() {
    let config = ApiConfig::default();
    let query = vec![
        ("status".to_owned(), "enabled".to_owned()),
        ("product_code".to_owned(), "XRAY GUI&x".to_owned()),
    ];
    assert_eq!(
        config.url_for("/admin/license/", &query),
        "/admin/license/?status=enabled&product_code=XRAY+GUI%26x"
    );
}
