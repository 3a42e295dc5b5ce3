use {
    ccip_client::{ApprovalConfig, ClientConfig, ConfirmationPolicy},
    ccip_types::Address,
    serde::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub approval: ApprovalConfig,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            approval: ApprovalConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    pub rpc_url: Option<String>,
    pub router: Option<Address>,
    /// Confirmations this chain needs, unless a command asks for a number.
    pub confirmations: Option<u64>,
    /// Confirmations to wait for no matter what a command asks for.
    pub confirmations_override: Option<u64>,
}

impl Config {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            confirmations: ConfirmationPolicy {
                custom: self.network.confirmations_override,
                chain: self.network.confirmations,
            },
            approval: self.approval.clone(),
        }
    }
}

// ----------------------------------- tests -----------------------------------
