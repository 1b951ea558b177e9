use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

/// Environment variable that relocates every client file (config and session).
pub const HOME_ENV: &str = "STORE_CLIENT_HOME";
const APP_DIR: &str = "store-client";
const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";
const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Config`] and knows where the session file lives.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    session_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf, session_path: PathBuf) -> Self {
        Self {
            config_path,
            session_path,
        }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE), base.join(SESSION_FILE)))
    }

    /// Uses `STORE_CLIENT_HOME` when set, otherwise the platform config directory.
    pub fn new_default() -> Result<Self, ConfigError> {
        Self::with_base_dir(default_base_dir())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        replace_file(&self.config_path, &json)
    }
}

fn default_base_dir() -> PathBuf {
    if let Some(custom) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Writes to a sibling temp file and renames it over `path`.
pub(crate) fn replace_file(path: &Path, data: &str) -> Result<(), ConfigError> {
    let tmp = tmp_path(path);
    write_atomic(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
