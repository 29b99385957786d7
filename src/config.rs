/// Configuration management
use std::fmt;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_host")]
    pub server_host: String,
    #[serde(default = "default_server_port")]
    pub server_port: u16,

    pub database_url: String,

    /// HMAC signing secret for access tokens. Checked for strength at
    /// startup; never logged.
    pub jwt_secret: String,
    #[serde(default = "default_jwt_algorithm")]
    pub jwt_algorithm: String,
    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: u64,

    /// bcrypt work factor for password hashing.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
    /// Upper bound on a single user lookup, on top of pool acquisition.
    #[serde(default = "default_db_lookup_timeout_secs")]
    pub db_lookup_timeout_secs: u64,
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8000
}

fn default_jwt_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_token_expire_minutes() -> u64 {
    30
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_db_max_connections() -> u32 {
    12
}

fn default_db_min_connections() -> u32 {
    4
}

fn default_db_connect_timeout_secs() -> u64 {
    5
}

fn default_db_acquire_timeout_secs() -> u64 {
    10
}

fn default_db_lookup_timeout_secs() -> u64 {
    5
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field(
                "access_token_expire_minutes",
                &self.access_token_expire_minutes,
            )
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_connect_timeout_secs", &self.db_connect_timeout_secs)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("db_lookup_timeout_secs", &self.db_lookup_timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        for key in [
            "SERVER_HOST",
            "SERVER_PORT",
            "DATABASE_URL",
            "JWT_SECRET",
            "JWT_ALGORITHM",
            "ACCESS_TOKEN_EXPIRE_MINUTES",
            "BCRYPT_COST",
            "DB_MAX_CONNECTIONS",
            "DB_MIN_CONNECTIONS",
            "DB_CONNECT_TIMEOUT_SECS",
            "DB_ACQUIRE_TIMEOUT_SECS",
            "DB_LOOKUP_TIMEOUT_SECS",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_defaults_applied() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/passport");
        std::env::set_var("JWT_SECRET", "test-secret");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_host, "0.0.0.0");
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.jwt_algorithm, "HS256");
        assert_eq!(config.access_token_expire_minutes, 30);
        assert_eq!(config.bcrypt_cost, 12);
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.db_lookup_timeout_secs, 5);

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://localhost/passport");
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::set_var("SERVER_PORT", "9090");
        std::env::set_var("ACCESS_TOKEN_EXPIRE_MINUTES", "5");
        std::env::set_var("BCRYPT_COST", "4");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_port, 9090);
        assert_eq!(config.access_token_expire_minutes, 5);
        assert_eq!(config.bcrypt_cost, 4);

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_missing_required_vars_fail() {
        clear_env();

        let result = Config::from_env();
        assert!(result.is_err(), "config without DATABASE_URL should fail");

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_debug_redacts_secrets() {
        clear_env();
        std::env::set_var("DATABASE_URL", "postgres://user:hunter2@db/passport");
        std::env::set_var("JWT_SECRET", "super-secret-value");

        let config = Config::from_env().unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("[REDACTED]"));

        clear_env();
    }
}
