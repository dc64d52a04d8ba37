use std::env;

use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String, // file / server
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_prefix")]
    pub prefix: Option<String>,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_env() -> String {
    "file".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_prefix() -> Option<String> {
    Some("/api".to_string())
}

fn default_database_url() -> String {
    "sqlite://user_management.db".to_string()
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: default_env(),
            host: default_host(),
            port: default_port(),
            prefix: default_prefix(),
            database_url: default_database_url(),
            log_dir: default_log_dir(),
        }
    }
}

/// `env=file` (the default) loads `.env` before reading the process environment.
pub fn uses_env_file() -> bool {
    env::var("env").unwrap_or("file".to_string()) == "file"
}

pub fn get_config() -> anyhow::Result<Config> {
    if uses_env_file() {
        let _ = dotenvy::dotenv();
    }
    Ok(envy::from_env::<Config>()?)
}
