use crate::error::{FidelityError, Result};
use crate::types::config::{ConfigIssue, FidelityConfig};
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "fidelity.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".fidelity/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/fidelity/config.toml";

pub fn load_config(root: &Path) -> Result<Option<FidelityConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Global,
    Repo,
    Local,
}

impl LayerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Repo => "repo",
            Self::Local => "local",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLayer {
    pub kind: LayerKind,
    pub path: PathBuf,
    value: Value,
}

impl ConfigLayer {
    fn read(kind: LayerKind, path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let value = read_toml_value(path)?;
        tracing::info!(layer = kind.as_str(), path = %path.display(), "config layer loaded");
        Ok(Some(Self {
            kind,
            path: path.to_path_buf(),
            value,
        }))
    }

    fn defines(&self, dotted_key: &str) -> bool {
        dotted_key
            .split('.')
            .try_fold(&self.value, |value, part| value.get(part))
            .is_some()
    }

    fn describe(&self) -> String {
        format!("{} config {}", self.kind.as_str(), self.path.display())
    }
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<FidelityConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        tracing::debug!(path = %repo_path.display(), "no config file, using defaults");
        return Ok(None);
    }

    let mut layers = Vec::new();
    if let Some(path) = global_path {
        layers.extend(ConfigLayer::read(LayerKind::Global, path)?);
    }
    layers.extend(ConfigLayer::read(LayerKind::Repo, &repo_path)?);
    layers.extend(ConfigLayer::read(
        LayerKind::Local,
        &root.join(DEFAULT_LOCAL_FILE),
    )?);

    let mut merged = Value::Table(Map::new());
    for layer in &layers {
        merge_toml(&mut merged, layer.value.clone());
    }

    let cfg: FidelityConfig = merged.try_into().map_err(|e| {
        let sources: Vec<String> = layers.iter().map(ConfigLayer::describe).collect();
        FidelityError::ConfigParse(format!(
            "{} (merged from {})",
            e.to_string().trim_end(),
            sources.join(", ")
        ))
    })?;
    cfg.validate().map_err(|issue| attribute(&issue, &layers))?;
    Ok(Some(cfg))
}

// Later layers win the merge, so the last layer defining the key is the culprit.
fn attribute(issue: &ConfigIssue, layers: &[ConfigLayer]) -> FidelityError {
    match layers.iter().rev().find(|layer| layer.defines(issue.key)) {
        Some(layer) => FidelityError::ConfigParse(format!("{issue} (set in {})", layer.describe())),
        None => FidelityError::ConfigParse(issue.to_string()),
    }
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| FidelityError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
