#[test]
fn webhook_secret_env_default_is_stable() {
    let cfg = payments_reconciler::config::AppConfig::from_env();
    assert!(!cfg.stripe_webhook_secret.is_empty());
    assert!(cfg.signature_tolerance_secs > 0);
}

#[test]
fn readiness_endpoints_exist_in_readme() {
    let readme = std::fs::read_to_string("README.md").unwrap_or_default();
    assert!(readme.contains("/webhook"));
    assert!(readme.contains("/ops/readiness"));
    assert!(readme.contains("/ops/liveness"));
}
