use std::{path::Path, time::Duration};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use decor8ai_api::{ClientConfig, DEFAULT_BASE_URL};

pub const SYSTEM_CONFIG: &str = "/etc/decor8ai/config.toml";
pub const LOCAL_CONFIG: &str = "decor8ai.toml";
pub const ENV_PREFIX: &str = "DECOR8AI_";
/// Read verbatim: figment would parse an all-digit key into a number.
pub const API_KEY_ENV: &str = "DECOR8AI_API_KEY";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Layers defaults, the system and local config files, an optional extra file and
    /// `DECOR8AI_*` environment variables, later sources winning.
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(SYSTEM_CONFIG))
            .merge(Toml::file(LOCAL_CONFIG));
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["api_key"]));
        match std::env::var(API_KEY_ENV) {
            Ok(api_key) => figment.merge(Serialized::default("api_key", api_key)),
            Err(_) => figment,
        }
    }

    pub fn client_config(&self) -> decor8ai_api::Result<ClientConfig> {
        let config = ClientConfig::new(self.api_key.as_str())?.with_base_url(&self.base_url)?;
        Ok(match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use decor8ai_api::ErrorKind;
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config: Config = Config::figment(None).extract()?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn env_overrides_local_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG,
                r#"
                api_key = "from-file"
                base_url = "http://localhost:9000"
                "#,
            )?;
            jail.set_env("DECOR8AI_API_KEY", "from-env");
            jail.set_env("DECOR8AI_TIMEOUT_SECS", "90");

            let config: Config = Config::figment(None).extract()?;
            assert_eq!(config.api_key, "from-env");
            assert_eq!(config.base_url, "http://localhost:9000");
            assert_eq!(config.timeout_secs, Some(90));
            Ok(())
        });
    }

    #[test]
    fn numeric_api_key_stays_a_string() {
        Jail::expect_with(|jail| {
            jail.set_env("DECOR8AI_API_KEY", "0012345678");

            let config: Config = Config::figment(None).extract()?;
            assert_eq!(config.api_key, "0012345678");
            Ok(())
        });
    }

    #[test]
    fn boolean_looking_api_key_stays_a_string() {
        Jail::expect_with(|jail| {
            jail.set_env("DECOR8AI_API_KEY", "true");

            let config: Config = Config::figment(None).extract()?;
            assert_eq!(config.api_key, "true");
            Ok(())
        });
    }

    #[test]
    fn extra_file_overrides_local_file() {
        Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG, r#"api_key = "local""#)?;
            jail.create_file("other.toml", r#"api_key = "other""#)?;

            let config: Config = Config::figment(Some(Path::new("other.toml"))).extract()?;
            assert_eq!(config.api_key, "other");
            Ok(())
        });
    }

    #[test]
    fn missing_key_fails_client_config() {
        let err = Config::default().client_config().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn client_config_carries_settings() {
        let config = Config {
            api_key: "key".to_string(),
            base_url: "http://localhost:9000/".to_string(),
            timeout_secs: Some(30),
        };
        let client = config.client_config().unwrap();
        assert_eq!(client.api_key(), "key");
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.timeout(), Some(Duration::from_secs(30)));
    }
}
