use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::content::BRAND_NAME;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub brand_name: String,
    pub log_filter: String,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            brand_name: BRAND_NAME.into(),
            log_filter: "info".into(),
            max_body_bytes: 64 * 1024,
        }
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    apply_file(&mut settings, Path::new("server.toml"))?;
    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, path: &Path) -> anyhow::Result<()> {
    let Ok(raw) = fs::read_to_string(path) else {
        return Ok(());
    };
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(&raw)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;

    if let Some(v) = file_cfg.get("bind_addr").and_then(toml::Value::as_str) {
        settings.server_bind = v.to_string();
    }
    if let Some(v) = file_cfg.get("brand_name").and_then(toml::Value::as_str) {
        settings.brand_name = v.to_string();
    }
    if let Some(v) = file_cfg.get("log_filter").and_then(toml::Value::as_str) {
        settings.log_filter = v.to_string();
    }
    if let Some(v) = file_cfg.get("max_body_bytes").and_then(toml::Value::as_integer) {
        settings.max_body_bytes = usize::try_from(v)
            .with_context(|| format!("max_body_bytes must be non-negative, got {v}"))?;
    }
    Ok(())
}

fn apply_env(
    settings: &mut Settings,
    var: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = var("APP__BRAND_NAME") {
        settings.brand_name = v;
    }

    if let Some(v) = var("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = var("APP__MAX_BODY_BYTES") {
        settings.max_body_bytes = v
            .parse()
            .with_context(|| format!("APP__MAX_BODY_BYTES is not a byte count: '{v}'"))?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
