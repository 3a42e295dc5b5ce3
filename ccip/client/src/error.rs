use {
    ccip_types::{Address, B256, ChainSelector},
    std::error::Error as StdError,
};

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// A failed call against one of the on-chain contracts the client drives.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{operation} on {contract} {address} failed: {source}")]
    Call {
        contract: &'static str,
        operation: &'static str,
        address: Address,
        #[source]
        source: BoxError,
    },

    #[error("transaction {tx_hash} reverted")]
    Reverted { tx_hash: B256 },
}

impl GatewayError {
    pub fn call<E>(
        contract: &'static str,
        operation: &'static str,
        address: Address,
        source: E,
    ) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Call {
            contract,
            operation,
            address,
            source: source.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CcipError {
    #[error("destination chain {selector} is not supported by the router")]
    UnsupportedDestination { selector: ChainSelector },

    #[error("token {token} is not enabled for CCIP: no pool is registered for it")]
    TokenNotSupported { token: Address },

    #[error("pool {pool} of token {token} does not support destination chain {selector}")]
    ChainNotSupportedForToken {
        token: Address,
        pool: Address,
        selector: ChainSelector,
    },

    #[error("a signing credential is required to approve tokens and send messages")]
    SigningRequired,

    /// The router or on-ramp is misconfigured. Retrying cannot help.
    #[error("critical configuration error: {reason}")]
    CriticalConfiguration { reason: String },

    #[error("invalid client configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("approving {token} failed: {source}")]
    ApprovalFailed {
        token: Address,
        #[source]
        source: GatewayError,
    },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
