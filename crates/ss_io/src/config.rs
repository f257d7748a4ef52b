//! Site configuration loading.
//!
//! Layering (later wins): `SiteConfig::default()` → JSON file → environment.
//! CLI flags are applied by the binary on top of the returned value.
//!
//! Recognized environment variables:
//! - `SIGNSPORT_ENDPOINT`   endpoint base URL
//! - `SIGNSPORT_LANG`       `ru` | `en`
//! - `SIGNSPORT_TIMEOUT_MS` transport timeout in milliseconds

use std::{fs::File, io::Read, path::Path};

use tracing::info;

use ss_core::SiteConfig;

use crate::{IoError, IoResult};

pub const ENV_ENDPOINT: &str = "SIGNSPORT_ENDPOINT";
pub const ENV_LANG: &str = "SIGNSPORT_LANG";
pub const ENV_TIMEOUT_MS: &str = "SIGNSPORT_TIMEOUT_MS";

const MAX_CONFIG_BYTES: u64 = 256 * 1024;

/// Defaults → optional file → process environment.
pub fn load_site_config(path: Option<&Path>) -> IoResult<SiteConfig> {
    let mut cfg = match path {
        Some(p) => read_config_file(p)?,
        None => SiteConfig::default(),
    };
    apply_env(&mut cfg, |k| std::env::var(k).ok())?;
    Ok(cfg)
}

/// Read a JSON config file. Missing keys take defaults; unknown keys are rejected.
pub fn read_config_file(path: &Path) -> IoResult<SiteConfig> {
    let f = File::open(path).map_err(|e| IoError::Path(format!("{}: {e}", path.display())))?;
    let mut buf = Vec::new();
    f.take(MAX_CONFIG_BYTES + 1).read_to_end(&mut buf)?;
    if buf.len() as u64 > MAX_CONFIG_BYTES {
        return Err(IoError::Invalid(format!(
            "config file exceeds {MAX_CONFIG_BYTES} bytes: {}",
            path.display()
        )));
    }
    let cfg: SiteConfig = serde_json::from_slice(&buf)?;
    info!(path = %path.display(), "loaded site config");
    Ok(cfg)
}

/// Apply environment overrides through `lookup` (injectable for tests).
pub fn apply_env<F>(cfg: &mut SiteConfig, lookup: F) -> IoResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
        cfg.endpoint_base = v.trim().to_string();
    }
    if let Some(v) = lookup(ENV_LANG) {
        cfg.language = v
            .parse()
            .map_err(|_| IoError::Invalid(format!("{ENV_LANG}={v}: expected ru|en")))?;
    }
    if let Some(v) = lookup(ENV_TIMEOUT_MS) {
        let ms = v
            .trim()
            .parse::<u64>()
            .map_err(|_| IoError::Invalid(format!("{ENV_TIMEOUT_MS}={v}: expected milliseconds")))?;
        cfg.timeout_ms = Some(ms);
    }
    Ok(())
}
