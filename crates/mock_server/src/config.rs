use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use shared::{domain::ListItem, protocol::UndoListResponse};

pub const SETTINGS_FILE: &str = "mock_server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub seed_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
            seed_path: None,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();
    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        tracing::warn!(file = SETTINGS_FILE, "ignoring unparseable settings file");
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.bind_addr = v.clone();
    }
    if let Some(v) = file_cfg.get("seed_path") {
        settings.seed_path = Some(PathBuf::from(v));
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("MOCK_SERVER_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = lookup("MOCK_SERVER_SEED") {
        settings.seed_path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("APP__SEED_PATH") {
        settings.seed_path = Some(PathBuf::from(v));
    }
}

pub fn default_seed() -> Vec<ListItem> {
    ["learn rust", "write tests", "ship it"]
        .into_iter()
        .map(ListItem::new)
        .collect()
}

/// Reads the seed list, either the `{ "data": [...] }` document the client
/// expects or a bare array of items.
pub fn load_seed(seed_path: Option<&Path>) -> anyhow::Result<Vec<ListItem>> {
    let Some(path) = seed_path else {
        return Ok(default_seed());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file '{}'", path.display()))?;
    parse_seed(&raw).with_context(|| format!("invalid seed file '{}'", path.display()))
}

fn parse_seed(raw: &str) -> anyhow::Result<Vec<ListItem>> {
    if let Ok(doc) = serde_json::from_str::<UndoListResponse>(raw) {
        return Ok(doc.data);
    }
    let items = serde_json::from_str::<Vec<ListItem>>(raw)?;
    Ok(items)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
