use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://quiz_app.db?mode=rwc";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { upload_dir: default_upload_dir() }
    }
}

fn default_upload_dir() -> String { DEFAULT_UPLOAD_DIR.to_string() }

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    /// Config file if present, otherwise environment variables and defaults.
    pub fn load_or_env() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_or_env_from(&path)
    }

    /// Only a missing file falls back to the environment; a file that exists
    /// but fails to read or parse is an error.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_not_found(&e) => Self::from_env(),
            Err(e) => return Err(e.context(format!("loading {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(dir) = std::env::var("UPLOAD_DIR") {
            cfg.storage.upload_dir = dir;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        if self.storage.upload_dir.trim().is_empty() {
            self.storage.upload_dir = default_upload_dir();
        }
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
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Fill an empty URL from `DATABASE_URL`, then from the built-in SQLite default.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("sqlite:") || lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with sqlite:, postgres:// or postgresql://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_with_defaults() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "sqlite::memory:"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.storage.upload_dir, "uploads");
    }

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("quiz_cfg_{}_{}.toml", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_config(
            "malformed",
            r#"
            [server]
            port = "not a number"

            [database]
            url = "postgres://prod/quiz"
            "#,
        );
        let res = AppConfig::load_or_env_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert!(res.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let path = std::env::temp_dir().join(format!("quiz_cfg_{}_absent.toml", std::process::id()));
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap()).unwrap();
        assert!(!cfg.database.url.is_empty());
        assert!(cfg.server.port > 0);
    }

    #[test]
    fn file_values_are_kept() {
        let path = temp_config(
            "valid",
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://prod/quiz"
            "#,
        );
        let res = AppConfig::load_or_env_from(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        let cfg = res.unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.url, "postgres://prod/quiz");
    }

    #[test]
    fn rejects_unknown_scheme() {
        let db = DatabaseConfig { url: "mysql://localhost/quiz".into(), ..Default::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let db = DatabaseConfig {
            url: "postgres://localhost/quiz".into(),
            min_connections: 5,
            max_connections: 2,
            ..Default::default()
        };
        assert!(db.validate().is_err());
    }

    #[test]
    fn normalize_fills_worker_threads_and_upload_dir() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite://quiz.db".into();
        cfg.server.worker_threads = Some(0);
        cfg.storage.upload_dir = "  ".into();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.storage.upload_dir, "uploads");
    }
}
