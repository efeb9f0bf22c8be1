//! # Configuração do Servidor
//!
//! Valores padrão com override por variável de ambiente:
//!
//! | Variável | Padrão | Campo |
//! |----------|--------|-------|
//! | `CANVAS_ADDR` | `0.0.0.0:3000` | [`ServerConfig::addr`] |
//! | `CANVAS_ASSETS_DIR` | `assets` | [`ServerConfig::assets_dir`] |
//!
//! O nível de log segue `RUST_LOG` (ver `main`).

use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Largura assumida antes do cliente reportar a sua (layout desktop).
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    pub assets_dir: PathBuf,
    pub default_width: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            default_width: DEFAULT_VIEWPORT_WIDTH,
        }
    }
}

impl ServerConfig {
    /// Lê a configuração do ambiente do processo.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de lookup; variáveis
    /// vazias são ignoradas.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(addr) = get("CANVAS_ADDR") {
            config.addr = addr;
        }
        if let Some(dir) = get("CANVAS_ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr, "0.0.0.0:3000");
    }

    #[test]
    fn env_overrides_addr_and_assets() {
        let config = ServerConfig::from_lookup(|key| match key {
            "CANVAS_ADDR" => Some("127.0.0.1:8080".to_string()),
            "CANVAS_ASSETS_DIR" => Some("/srv/canvas".to_string()),
            _ => None,
        });
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.assets_dir, PathBuf::from("/srv/canvas"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = ServerConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ServerConfig::default());
    }
}
