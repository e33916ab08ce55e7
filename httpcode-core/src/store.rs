// On-disk persistence for baseline and override descriptions

use crate::code::{DescriptionMap, StatusCode};
use crate::error::{Result, StatusError};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const BASELINE_FILE: &str = "original_data.json";
pub const OVERRIDES_FILE: &str = "custom_descriptions.json";

const APP_DIR: &str = "httpcode";

/// Per-user configuration directory.
///
/// `%APPDATA%\httpcode` on Windows, `$XDG_CONFIG_HOME/httpcode` or
/// `~/.config/httpcode` elsewhere. `None` if the relevant variable is unset.
pub fn default_config_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        return std::env::var_os("APPDATA")
            .filter(|v| !v.is_empty())
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join(APP_DIR));
    }

    let config_root = shellexpand::tilde("~/.config");
    if config_root.starts_with('~') {
        return None;
    }
    Some(Path::new(config_root.as_ref()).join(APP_DIR))
}

/// The two description files living in one directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn baseline_path(&self) -> PathBuf {
        self.dir.join(BASELINE_FILE)
    }

    pub fn overrides_path(&self) -> PathBuf {
        self.dir.join(OVERRIDES_FILE)
    }

    pub fn load_baseline(&self) -> DescriptionMap {
        load_map(&self.baseline_path())
    }

    pub fn save_baseline(&self, map: &DescriptionMap) -> Result<()> {
        save_map(&self.baseline_path(), map)
    }

    pub fn load_overrides(&self) -> DescriptionMap {
        load_map(&self.overrides_path())
    }

    pub fn save_overrides(&self, map: &DescriptionMap) -> Result<()> {
        save_map(&self.overrides_path(), map)
    }
}

/// Absent, unreadable and malformed files all load as an empty map.
///
/// Entries whose key is not a status code are skipped; the rest are kept.
fn load_map(path: &Path) -> DescriptionMap {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist yet", path.display());
            return DescriptionMap::new();
        }
        Err(e) => {
            warn!("Error loading {}: {}", path.display(), e);
            return DescriptionMap::new();
        }
    };

    let raw: BTreeMap<String, String> = match serde_json::from_str(&content) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Error loading {}: {}", path.display(), e);
            return DescriptionMap::new();
        }
    };

    let map: DescriptionMap = raw
        .into_iter()
        .filter_map(|(key, description)| match key.parse::<StatusCode>() {
            Ok(code) => Some((code, description)),
            Err(_) => {
                warn!("Skipping entry {:?} in {}: not a status code", key, path.display());
                None
            }
        })
        .collect();

    debug!("Loaded {} entries from {}", map.len(), path.display());
    map
}

// Written to a sibling file first so an interrupted save never truncates the target.
fn save_map(path: &Path, map: &DescriptionMap) -> Result<()> {
    let persistence = |source: io::Error| StatusError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(persistence)?;
    }

    let mut json = serde_json::to_string_pretty(map).map_err(|e| persistence(e.into()))?;
    json.push('\n');

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json).map_err(persistence)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(persistence(e));
    }

    debug!("Saved {} entries to {}", map.len(), path.display());
    Ok(())
}
