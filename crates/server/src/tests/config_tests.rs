use super::{apply_env, apply_file, Settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_config(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("site_server_test_{suffix}.toml"));
    fs::write(&path, contents).expect("write config");
    path
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn missing_file_keeps_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        &env::temp_dir().join("definitely-not-here.toml"),
    )
    .expect("missing file is fine");
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_values_override_defaults() {
    let path = temp_config(
        "bind_addr = \"0.0.0.0:9000\"\nbrand_name = \"Acme\"\nmax_body_bytes = 1024\n",
    );
    let mut settings = Settings::default();
    apply_file(&mut settings, &path).expect("apply");
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.brand_name, "Acme");
    assert_eq!(settings.max_body_bytes, 1024);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_file_is_an_error() {
    let path = temp_config("bind_addr = ");
    let mut settings = Settings::default();
    let result = apply_file(&mut settings, &path);
    fs::remove_file(&path).expect("cleanup");
    assert!(result.is_err());
}

#[test]
fn app_prefixed_env_wins_over_legacy_names() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[
            ("SERVER_BIND", "127.0.0.1:1"),
            ("APP__BIND_ADDR", "127.0.0.1:2"),
            ("RUST_LOG", "debug"),
            ("APP__LOG_FILTER", "server=trace"),
        ]),
    )
    .expect("apply");
    assert_eq!(settings.server_bind, "127.0.0.1:2");
    assert_eq!(settings.log_filter, "server=trace");
}

#[test]
fn bad_body_limit_is_rejected() {
    let mut settings = Settings::default();
    let err = apply_env(&mut settings, env_from(&[("APP__MAX_BODY_BYTES", "lots")]))
        .expect_err("should fail");
    assert!(err.to_string().contains("APP__MAX_BODY_BYTES"));
}
