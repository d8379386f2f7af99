use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "browser.toml";
pub const ENV_PREFIX: &str = "PROFILE_BROWSER_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Address the page is served on.
    pub listen_addr: String,
    /// Base URL of the scraping service.
    pub scrape_api_url: String,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:3000".into(),
            scrape_api_url: "http://127.0.0.1:8000".into(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Defaults, then `browser.toml` if present, then `PROFILE_BROWSER_*` variables.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
    }
}
