//! Data directory and endpoint resolution.
//!
//! Precedence for each endpoint: CLI flag, then env var, then `config.json`,
//! then the built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::{ClientConfig, Endpoints};
use crate::remote::RemoteClient;
use crate::session::{FileStorage, SessionStore, write_atomic};

pub const DATA_DIR_ENV: &str = "FIH_HOME";
pub const AUTH_URL_ENV: &str = "FIH_AUTH_URL";
pub const POSTS_URL_ENV: &str = "FIH_POSTS_URL";

const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "fih.log";

/// Values given on the command line; each one wins over everything else.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub auth_url: Option<String>,
    pub posts_url: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub endpoints: Endpoints,
}

impl Settings {
    pub fn resolve(overrides: &Overrides) -> Result<Self> {
        Self::resolve_with_env(overrides, |key| std::env::var(key).ok())
    }

    pub fn resolve_with_env(
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let data_dir = resolve_data_dir(overrides.data_dir.as_deref(), &env)?;
        let cfg = read_config(&data_dir)?;
        let endpoints = resolve_endpoints(&cfg, overrides, &env)?;
        Ok(Self {
            data_dir,
            endpoints,
        })
    }

    pub fn session_store(&self) -> Result<SessionStore> {
        let storage = FileStorage::open(&self.data_dir)?;
        Ok(SessionStore::new(Box::new(storage)))
    }

    pub fn remote_client(&self) -> Result<RemoteClient> {
        RemoteClient::new(self.endpoints.clone())
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

pub fn resolve_data_dir(
    flag: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    if let Some(p) = flag {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = env(DATA_DIR_ENV).filter(|s| !s.trim().is_empty()) {
        return Ok(PathBuf::from(p));
    }
    let base = dirs::data_dir()
        .context("cannot determine a data directory (set FIH_HOME or pass --data-dir)")?;
    Ok(base.join("fih"))
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// A missing file reads as the empty config.
pub fn read_config(data_dir: &Path) -> Result<ClientConfig> {
    let path = config_path(data_dir);
    if !path.exists() {
        return Ok(ClientConfig::default());
    }
    let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ClientConfig =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

pub fn write_config(data_dir: &Path, cfg: &ClientConfig) -> Result<()> {
    if let Some(url) = &cfg.auth_url {
        validate_url(url).context("auth_url")?;
    }
    if let Some(url) = &cfg.posts_url {
        validate_url(url).context("posts_url")?;
    }
    let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
    write_atomic(&config_path(data_dir), &bytes).context("write config.json")?;
    Ok(())
}

pub fn resolve_endpoints(
    cfg: &ClientConfig,
    overrides: &Overrides,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Endpoints> {
    let defaults = Endpoints::default();
    let pick = |flag: &Option<String>, var: &str, file: &Option<String>, default: String| {
        flag.clone()
            .or_else(|| env(var).filter(|s| !s.trim().is_empty()))
            .or_else(|| file.clone())
            .unwrap_or(default)
    };

    let auth_url = pick(
        &overrides.auth_url,
        AUTH_URL_ENV,
        &cfg.auth_url,
        defaults.auth_url,
    );
    let posts_url = pick(
        &overrides.posts_url,
        POSTS_URL_ENV,
        &cfg.posts_url,
        defaults.posts_url,
    );
    validate_url(&auth_url).context("auth endpoint")?;
    validate_url(&posts_url).context("posts endpoint")?;

    Ok(Endpoints {
        auth_url,
        posts_url,
    })
}

fn validate_url(url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url).with_context(|| format!("invalid url {url:?}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("unsupported url scheme {other:?} in {url:?}"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
