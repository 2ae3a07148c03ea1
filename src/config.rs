use crate::models::DEFAULT_NETWORK;
use serde_derive::Deserialize;
use std::io::Read;
use std::path::Path;

pub const DEFAULT_GATEWAY: &str = "http://localhost:8080";

type Result<T> = std::result::Result<T, failure::Error>;

/// Optional defaults read from a TOML settings file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Settings {
    pub gateway: Option<String>,
    pub network: Option<String>,
}

pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let mut file = std::fs::File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    toml::from_str(&content).map_err(|e| failure::err_msg(e.to_string()))
}

/// Everything the remove command needs, built once from flags and settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveConfig {
    pub name: Option<String>,
    pub gateway: String,
    pub yaml_file: Option<String>,
    pub default_network: String,
}

impl Default for RemoveConfig {
    fn default() -> Self {
        RemoveConfig {
            name: None,
            gateway: DEFAULT_GATEWAY.to_owned(),
            yaml_file: None,
            default_network: DEFAULT_NETWORK.to_owned(),
        }
    }
}

impl RemoveConfig {
    /// Layers settings over the defaults, then explicit flags over both.
    pub fn new(
        settings: &Settings,
        gateway_flag: Option<String>,
        name_flag: Option<String>,
        yaml_file: Option<String>,
    ) -> Self {
        let defaults = RemoveConfig::default();
        RemoveConfig {
            name: name_flag,
            gateway: gateway_flag
                .or_else(|| settings.gateway.clone())
                .unwrap_or(defaults.gateway),
            yaml_file,
            default_network: settings
                .network
                .clone()
                .unwrap_or(defaults.default_network),
        }
    }

    /// The positional function name wins over `--name`.
    pub fn function_name<'a>(&'a self, positional: Option<&'a str>) -> Option<&'a str> {
        positional.or_else(|| self.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_settings_or_flags() {
        let config = RemoveConfig::new(&Settings::default(), None, None, None);
        assert_eq!(config, RemoveConfig::default());
        assert_eq!(config.gateway, "http://localhost:8080");
        assert_eq!(config.default_network, "func_functions");
    }

    #[test]
    fn flags_override_settings() {
        let settings = Settings {
            gateway: Some("http://settings:8080".to_owned()),
            network: Some("net".to_owned()),
        };
        let config = RemoveConfig::new(
            &settings,
            Some("http://flag:8080".to_owned()),
            None,
            Some("stack.yml".to_owned()),
        );
        assert_eq!(config.gateway, "http://flag:8080");
        assert_eq!(config.default_network, "net");
        assert_eq!(config.yaml_file.as_deref(), Some("stack.yml"));
    }

    #[test]
    fn positional_name_wins_over_flag() {
        let config = RemoveConfig::new(&Settings::default(), None, Some("flag".to_owned()), None);
        assert_eq!(config.function_name(Some("arg")), Some("arg"));
        assert_eq!(config.function_name(None), Some("flag"));
        assert_eq!(RemoveConfig::default().function_name(None), None);
    }

    #[test]
    fn loads_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gateway = \"http://gw:8080\"").unwrap();
        writeln!(file, "network = \"my_net\"").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.gateway.as_deref(), Some("http://gw:8080"));
        assert_eq!(settings.network.as_deref(), Some("my_net"));
    }

    #[test]
    fn malformed_settings_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gateway = ").unwrap();
        assert!(load_settings(file.path()).is_err());
    }
}
