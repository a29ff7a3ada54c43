use crate::error::{FlipscoreError, Result};
use crate::types::config::ScoringConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "flipscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".flipscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/flipscore/config.toml";

/// Load the scoring config for a data directory. Weight overrides stack
/// key by key across up to three layers: global defaults under `$HOME`,
/// the directory's `flipscore.toml`, then a local override, later layers
/// winning. Returns `None` when the directory carries no config at all.
pub fn load_config(root: &Path) -> Result<Option<ScoringConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ScoringConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut layers: Vec<PathBuf> = Vec::new();
    if let Some(path) = global_path {
        layers.push(path.to_path_buf());
    }
    layers.push(repo_path);
    layers.push(root.join(DEFAULT_LOCAL_FILE));

    let mut cfg = ScoringConfig::default();
    for path in layers.iter().filter(|path| path.exists()) {
        cfg.merge_overrides(parse_layer(path)?);
    }
    cfg.validate()?;
    Ok(Some(cfg))
}

fn parse_layer(path: &Path) -> Result<ScoringConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| FlipscoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}
