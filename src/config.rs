use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub db_max_connections: u32,
    pub max_body_size: usize,
    pub startup_mode: StartupMode,
}

/// What to do when the database cannot be reached at boot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartupMode {
    /// Log the failure and keep serving; requests fail with 500 until the
    /// database comes back.
    Degrade,
    FailFast,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| "Missing required environment variable: DATABASE_URL".to_string())?;

        let host: IpAddr = env_or("SISTEMA_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SISTEMA_HOST: {e}"))?;

        let port: u16 = env_or("SISTEMA_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid SISTEMA_PORT: {e}"))?;

        let log_level = env_or("SISTEMA_LOG_LEVEL", "info");

        let db_max_connections: u32 = env_or("SISTEMA_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid SISTEMA_DB_MAX_CONNECTIONS: {e}"))?;
        if db_max_connections == 0 {
            return Err("Invalid SISTEMA_DB_MAX_CONNECTIONS: must be at least 1".to_string());
        }

        let max_body_size: usize = env_or("SISTEMA_MAX_BODY_SIZE", "102400")
            .parse()
            .map_err(|e| format!("Invalid SISTEMA_MAX_BODY_SIZE: {e}"))?;

        let startup_mode = match env_or("SISTEMA_STARTUP_MODE", "degrade").as_str() {
            "degrade" => StartupMode::Degrade,
            "fail-fast" => StartupMode::FailFast,
            other => {
                return Err(format!(
                    "Invalid SISTEMA_STARTUP_MODE '{other}': expected 'degrade' or 'fail-fast'"
                ));
            }
        };

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            db_max_connections,
            max_body_size,
            startup_mode,
        })
    }
}
