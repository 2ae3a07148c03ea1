use indexmap::IndexMap;
use serde_derive::Deserialize;
use std::collections::HashMap;

/// Network used when a stack file does not name one.
pub const DEFAULT_NETWORK: &str = "func_functions";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Provider {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "gateway")]
    pub gateway_url: String,
    #[serde(default)]
    pub network: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FunctionSpec {
    /// Filled in from the key of the `functions` map.
    #[serde(skip)]
    pub name: String,
    #[serde(default, rename = "lang")]
    pub language: String,
    #[serde(default)]
    pub handler: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub fprocess: String,
    #[serde(default)]
    pub environment: HashMap<String, String>,
}

/// A parsed stack file: provider settings plus functions in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceSet {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub functions: IndexMap<String, FunctionSpec>,
}

impl ServiceSet {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Returns a copy whose provider network falls back to `default_network`.
    pub fn with_default_network(&self, default_network: &str) -> ServiceSet {
        let mut services = self.clone();
        if services.provider.network.is_empty() {
            services.provider.network = default_network.to_owned();
        }
        services
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub name: String,
    pub gateway_url: String,
}

impl ResolvedTarget {
    pub fn new(gateway_url: &str, name: &str) -> Self {
        ResolvedTarget {
            name: name.to_owned(),
            gateway_url: gateway_url.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_network_is_applied_to_copy_only() {
        let services = ServiceSet::default();
        let corrected = services.with_default_network(DEFAULT_NETWORK);
        assert_eq!(corrected.provider.network, "func_functions");
        assert_eq!(services.provider.network, "");
    }

    #[test]
    fn explicit_network_is_kept() {
        let mut services = ServiceSet::default();
        services.provider.network = "custom".to_owned();
        let corrected = services.with_default_network(DEFAULT_NETWORK);
        assert_eq!(corrected.provider.network, "custom");
    }
}
