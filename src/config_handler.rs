use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::log;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default="default_port")]
    pub port: u16,

    #[serde(default="default_api_base_url")]
    pub api_base_url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Send `api_key` as the X-API-Key header on outbound calls.
    #[serde(default="default_false")]
    pub attach_api_key: bool,

    /// Name of the env variable holding the public deployment host.
    #[serde(default="default_deployment_url_var")]
    pub deployment_url_var: String,

    #[serde(default="default_false")]
    pub parallel_resolve: bool,

    #[serde(default)]
    pub request_timeout_s: Option<u64>,
}

fn default_port() -> u16 {
    3000
}

fn default_api_base_url() -> String {
    "https://www.speedrun.com/api/v1".to_string()
}

fn default_deployment_url_var() -> String {
    "VERCEL_URL".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: default_port(),
            api_base_url: default_api_base_url(),
            api_key: None,
            attach_api_key: default_false(),
            deployment_url_var: default_deployment_url_var(),
            parallel_resolve: default_false(),
            request_timeout_s: None,
        }
    }
}

impl Config {
    pub fn from_json(data: &str) -> Result<Config, serde_json::Error> {
        serde_json::from_str(data)
    }

    fn apply_env(&mut self) -> Result<(), anyhow::Error> {
        if let Ok(port) = std::env::var("PORT") {
            self.port = port.parse().with_context(|| format!("Invalid PORT {port}"))?;
        }
        if let Ok(api_base_url) = std::env::var("API_BASE_URL") {
            self.api_base_url = api_base_url;
        }
        if let Ok(api_key) = std::env::var("API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Ok(attach) = std::env::var("ATTACH_API_KEY") {
            self.attach_api_key = matches!(attach.as_str(), "1" | "true");
        }
        Ok(())
    }
}

pub fn get_config() -> Result<Config, anyhow::Error> {
    let mut result = match std::env::var("CONFIG_PATH") {
        Ok(path) => {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("Unable to read config at {path}"))?;
            Config::from_json(&data)
                .with_context(|| format!("Could not parse JSON at {path}!"))?
        },
        Err(_) => Config::default(),
    };
    result.apply_env()?;
    log::info!("[CONFIG] port {} api_base_url {} attach_api_key {} parallel_resolve {}",
        result.port, result.api_base_url, result.attach_api_key, result.parallel_resolve);
    Ok(result)
}
