use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

lazy_static! {
    static ref DEFAULT_BASE_URL: Url = Url::parse("http://mock-os-api:8080").unwrap();
}

pub const BASE_URL_VAR: &str = "ORDNANCE_SURVEY_BASE_URL";
pub const API_KEY_VAR: &str = "ORDNANCE_SURVEY_API_KEY";
pub const TIMEOUT_VAR: &str = "ORDNANCE_SURVEY_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for the Ordnance Survey Places API.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    /// Root of the API, without the `/search/places/v1` part.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Sent as the `key` query value on every request.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> Url {
    DEFAULT_BASE_URL.clone()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup(BASE_URL_VAR).filter(|v| !v.is_empty()) {
            config.base_url =
                Url::parse(&value).map_err(|source| ConfigError::BaseUrl { value, source })?;
        }

        if let Some(key) = lookup(API_KEY_VAR) {
            config.api_key = key;
        }

        if let Some(value) = lookup(TIMEOUT_VAR).filter(|v| !v.is_empty()) {
            config.timeout_secs = value
                .parse()
                .map_err(|_| ConfigError::Timeout(value.clone()))?;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Postcode search endpoint for `postcode`. Whitespace is dropped from
    /// the postcode.
    pub fn postcode_url(&self, postcode: &str) -> Url {
        let postcode: String = postcode.split_whitespace().collect();

        let mut url = self.base_url.clone();
        let path = format!(
            "{}/search/places/v1/postcode",
            url.path().trim_end_matches('/')
        );
        url.set_path(&path);
        url.query_pairs_mut()
            .clear()
            .append_pair("postcode", &postcode)
            .append_pair("key", &self.api_key);
        url
    }

    /// An HTTP client honouring the configured timeout.
    pub fn http_client(&self) -> Result<reqwest::Client, ConfigError> {
        Ok(reqwest::Client::builder().timeout(self.timeout()).build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!("http://mock-os-api:8080/", config.base_url.as_str());
        assert_eq!("", config.api_key);
        assert_eq!(Duration::from_secs(10), config.timeout());
    }

    #[test]
    fn from_vars() {
        let config = Config::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://api.os.uk"),
            (API_KEY_VAR, "fake-key"),
            (TIMEOUT_VAR, "3"),
        ]))
        .unwrap();
        assert_eq!("https://api.os.uk/", config.base_url.as_str());
        assert_eq!("fake-key", config.api_key);
        assert_eq!(3, config.timeout_secs);
    }

    #[test]
    fn invalid_vars() {
        assert!(matches!(
            Config::from_lookup(lookup(&[(BASE_URL_VAR, "not a url")])),
            Err(ConfigError::BaseUrl { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])),
            Err(ConfigError::Timeout(_))
        ));
    }

    #[test]
    fn postcode_url() {
        let config = Config {
            base_url: Url::parse("http://localhost:8080/os/").unwrap(),
            api_key: "fake-api-key".into(),
            ..Config::default()
        };
        assert_eq!(
            "http://localhost:8080/os/search/places/v1/postcode?postcode=B147ET&key=fake-api-key",
            config.postcode_url("B14 7ET").as_str()
        );
        assert_eq!(
            "http://mock-os-api:8080/search/places/v1/postcode?postcode=XXXXXX&key=",
            Config::default().postcode_url("  X XX XX X ").as_str()
        );
    }

    #[test]
    fn deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        assert_eq!(
            Config {
                api_key: "k".into(),
                ..Config::default()
            },
            config
        );
    }
}
