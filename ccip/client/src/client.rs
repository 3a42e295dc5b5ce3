use {
    crate::{CcipError, ClientConfig, Credential, EvmGateway, MessageOrchestrator},
    alloy::signers::local::PrivateKeySigner,
    ccip_types::Address,
    tracing::info,
    url::Url,
};

/// A client sending CCIP messages through a router on an EVM chain.
pub type CcipClient = MessageOrchestrator<EvmGateway>;

impl CcipClient {
    /// Connects to the router at `router` over HTTP.
    ///
    /// Without a signer the client is read-only: it can check lanes, quote
    /// fees and read tokens, but not approve or send.
    ///
    /// Fails with [`CcipError::InvalidConfig`] if `config` is unusable.
    pub fn connect(
        rpc_url: Url,
        router: Address,
        signer: Option<PrivateKeySigner>,
        config: ClientConfig,
    ) -> Result<Self, CcipError> {
        config.approval.validate()?;

        let credential = match &signer {
            Some(signer) => Credential::ReadWrite {
                owner: signer.address(),
            },
            None => Credential::ReadOnly,
        };

        info!(%rpc_url, %router, can_sign = credential.can_sign(), "Connecting CCIP client");

        Ok(Self::new(
            EvmGateway::connect_http(rpc_url, router, signer),
            credential,
            config,
        ))
    }
}
