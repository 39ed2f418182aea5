use serde::{Deserialize, Serialize};

/// ENS registry deployment on Ethereum mainnet.
pub const DEFAULT_ENS_REGISTRY: &str = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e";

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Ethereum Name Service over JSON-RPC
    #[default]
    Ens,

    /// Records listed in this configuration file
    Static,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ens => "ens",
            Self::Static => "static",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub kind: ProviderKind,

    /// JSON-RPC endpoint of an Ethereum node; required for `ens`.
    #[serde(default)]
    pub rpc_url: Option<String>,

    #[serde(default = "default_registry_address")]
    pub registry_address: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Text record holding the DNSLink target
    #[serde(default = "default_text_key")]
    pub text_key: String,

    #[serde(default)]
    pub records: Vec<StaticRecord>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            rpc_url: None,
            registry_address: default_registry_address(),
            request_timeout: default_request_timeout(),
            text_key: default_text_key(),
            records: vec![],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StaticRecord {
    pub domain: String,

    pub url: String,
}

fn default_registry_address() -> String {
    DEFAULT_ENS_REGISTRY.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_text_key() -> String {
    "url".to_string()
}
