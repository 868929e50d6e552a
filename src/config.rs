//! Server runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! components at construction. Nothing reads process-wide environment
//! variables during request handling, and there is no runtime mutation path.

use deckdrop_store::DEFAULT_DATA_DIR;
use std::path::{Path, PathBuf};

/// Default listen address when `DECKDROP_ADDR` is not set.
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Built-in admin key used when `DECKDROP_ADMIN_KEY` is not set.
///
/// Only acceptable for local debugging; startup logs a warning whenever this
/// fallback is in effect.
pub const INSECURE_ADMIN_KEY: &str = "admin";

/// Server configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    data_dir: PathBuf,
    admin_key: String,
}

impl AppConfig {
    /// Create a new `AppConfig` from explicit values.
    pub fn new(listen_addr: String, data_dir: PathBuf, admin_key: String) -> Self {
        Self {
            listen_addr,
            data_dir,
            admin_key,
        }
    }

    /// Resolve configuration from the environment, applying defaults.
    ///
    /// Reads `DECKDROP_ADDR`, `DECKDROP_DATA_DIR`, and `DECKDROP_ADMIN_KEY`.
    /// Call after `dotenvy::dotenv()` so a local `.env` file is honoured.
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("DECKDROP_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
        let data_dir = std::env::var("DECKDROP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        let admin_key =
            std::env::var("DECKDROP_ADMIN_KEY").unwrap_or_else(|_| INSECURE_ADMIN_KEY.to_owned());
        Self::new(listen_addr, data_dir, admin_key)
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn admin_key(&self) -> &str {
        &self.admin_key
    }

    /// True when the insecure built-in admin key is in effect.
    pub fn uses_fallback_admin_key(&self) -> bool {
        self.admin_key == INSECURE_ADMIN_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_key_is_flagged() {
        let config = AppConfig::new(
            DEFAULT_ADDR.to_owned(),
            PathBuf::from(DEFAULT_DATA_DIR),
            INSECURE_ADMIN_KEY.to_owned(),
        );
        assert!(config.uses_fallback_admin_key());

        let config = AppConfig::new(
            DEFAULT_ADDR.to_owned(),
            PathBuf::from(DEFAULT_DATA_DIR),
            "long-random-secret".to_owned(),
        );
        assert!(!config.uses_fallback_admin_key());
    }
}
