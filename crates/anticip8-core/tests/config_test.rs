use anticip8_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = Anticip8Config::from_toml("").unwrap();

    // Policy defaults
    assert_eq!(config.policy.markov_smooth, 0.5);
    assert_eq!(config.policy.min_prob, 0.01);
    assert!(config.policy.drop_self_loops);
    assert!(!config.policy.allow_prefetch_attempts);
    assert_eq!(config.policy.prefetch_attempt_weight, 0.15);
    assert_eq!(config.policy.max_prefetch, 2);
    assert_eq!(config.policy.prefetch_budget_ms, 120);
    assert_eq!(config.policy.default_limit, 3);
    assert_eq!(config.policy.noise_prefixes.len(), 6);
    assert!(config.policy.noise_prefixes.contains(&"/health".to_string()));

    // Embedding defaults
    assert_eq!(config.embeddings.key_prefix, "anticip8:i2v:topk:");
    assert_eq!(config.embeddings.alpha, 0.45);
    assert_eq!(config.embeddings.top_k, 30);

    // Storage defaults
    assert_eq!(config.storage.db_path, "anticip8.db");
    assert!(config.storage.wal_mode);
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[policy]
markov_smooth = 0.0
allow_prefetch_attempts = true
noise_prefixes = ["/internal"]

[embeddings]
alpha = 0.7
"#;
    let config = Anticip8Config::from_toml(toml).unwrap();
    assert_eq!(config.policy.markov_smooth, 0.0);
    assert!(config.policy.allow_prefetch_attempts);
    assert_eq!(config.policy.noise_prefixes, vec!["/internal".to_string()]);
    assert_eq!(config.embeddings.alpha, 0.7);
    // Non-overridden fields keep defaults
    assert_eq!(config.policy.min_prob, 0.01);
    assert_eq!(config.embeddings.top_k, 30);
}

#[test]
fn config_serde_roundtrip() {
    let config = Anticip8Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = Anticip8Config::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.embeddings.key_prefix, config.embeddings.key_prefix);
    assert_eq!(roundtripped.policy.noise_prefixes, config.policy.noise_prefixes);
}

#[test]
fn negative_smoothing_is_rejected() {
    let err = Anticip8Config::from_toml("[policy]\nmarkov_smooth = -0.1\n").unwrap_err();
    assert!(err.to_string().contains("policy.markov_smooth"));
}

#[test]
fn blend_weight_outside_unit_interval_is_rejected() {
    assert!(Anticip8Config::from_toml("[embeddings]\nalpha = 1.5\n").is_err());
    assert!(Anticip8Config::from_toml("[embeddings]\nalpha = 1.0\n").is_ok());
    assert!(Anticip8Config::from_toml("[embeddings]\nalpha = 0.0\n").is_ok());
}

#[test]
fn empty_noise_prefix_is_rejected() {
    let err = Anticip8Config::from_toml("[policy]\nnoise_prefixes = [\"\"]\n").unwrap_err();
    assert!(err.to_string().contains("noise_prefixes"));
}

#[test]
fn malformed_toml_is_a_config_error() {
    let err = Anticip8Config::from_toml("[policy\n").unwrap_err();
    assert!(matches!(err, anticip8_core::Anticip8Error::ConfigError(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = Anticip8Config::from_file(std::path::Path::new("/nonexistent/anticip8.toml"))
        .unwrap_err();
    assert!(err.to_string().contains("cannot read"));
}
