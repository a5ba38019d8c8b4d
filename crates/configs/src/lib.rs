use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8081 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_options_file")]
    pub options_file: String,
    #[serde(default = "default_entreprise_file")]
    pub entreprise_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            options_file: default_options_file(),
            entreprise_file: default_entreprise_file(),
        }
    }
}

fn default_data_dir() -> String { "data".to_string() }
fn default_options_file() -> String { "options.json".to_string() }
fn default_entreprise_file() -> String { "entreprise.json".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        Ok(())
    }
}

impl StorageConfig {
    /// Let DATA_DIR override the TOML value when set.
    pub fn normalize_from_env(&mut self) {
        if let Ok(dir) = std::env::var("DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = dir;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("storage.data_dir must not be empty"));
        }
        if self.options_file.trim().is_empty() || self.entreprise_file.trim().is_empty() {
            return Err(anyhow!("storage file names must not be empty"));
        }
        Ok(())
    }

    /// Full path of the options store file under the data dir.
    pub fn options_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join(&self.options_file)
    }

    /// Full path of the entreprise store file under the data dir.
    pub fn entreprise_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join(&self.entreprise_file)
    }
}
