use std::{collections::HashMap, fs};

use client_core::DEFAULT_BASE_PATH;

#[derive(Debug)]
pub struct Settings {
    pub server_url: String,
    pub api_base_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            api_base_path: DEFAULT_BASE_PATH.into(),
        }
    }
}

/// Defaults, overridden by `client.toml` in the working directory, overridden
/// by environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("client.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("server_url") {
                settings.server_url = v.clone();
            }
            if let Some(v) = file_cfg.get("api_base_path") {
                settings.api_base_path = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("BENEFITS_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("BENEFITS_API_BASE_PATH") {
        settings.api_base_path = v;
    }

    settings
}
