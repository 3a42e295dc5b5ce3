use {
    crate::{
        GatewayError, GatewayResult, PoolGateway, RegistryGateway, RouterGateway, RouterMessage,
        TokenGateway, TxReceipt,
        bindings::{
            IERC20Metadata, IEVM2AnyOnRamp,
            IRouterClient::{self, EVM2AnyMessage, EVMTokenAmount},
            ITokenAdminRegistry, ITokenPool,
        },
    },
    alloy::{
        network::ReceiptResponse,
        providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
        signers::local::PrivateKeySigner,
    },
    async_trait::async_trait,
    ccip_types::{Address, ChainSelector, U256},
    tracing::debug,
    url::Url,
};

/// Gateway to the CCIP contracts of one EVM chain over JSON-RPC.
///
/// Write calls are signed by the provider's wallet, if it has one.
#[derive(Debug, Clone)]
pub struct EvmGateway {
    provider: DynProvider,
    router: Address,
}

impl EvmGateway {
    pub fn new(provider: DynProvider, router: Address) -> Self {
        Self { provider, router }
    }

    /// Connects over HTTP, signing with `signer` if one is given.
    pub fn connect_http(rpc_url: Url, router: Address, signer: Option<PrivateKeySigner>) -> Self {
        let provider = match signer {
            Some(signer) => ProviderBuilder::new()
                .wallet(signer)
                .connect_http(rpc_url)
                .erased(),
            None => ProviderBuilder::new().connect_http(rpc_url).erased(),
        };

        Self::new(provider, router)
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

#[async_trait]
impl RouterGateway for EvmGateway {
    fn router(&self) -> Address {
        self.router
    }

    async fn is_chain_supported(&self, selector: ChainSelector) -> GatewayResult<bool> {
        IRouterClient::new(self.router, &self.provider)
            .isChainSupported(selector.into_inner())
            .call()
            .await
            .map_err(|err| GatewayError::call("router", "isChainSupported", self.router, err))
    }

    async fn get_fee(&self, selector: ChainSelector, message: &RouterMessage) -> GatewayResult<U256> {
        IRouterClient::new(self.router, &self.provider)
            .getFee(selector.into_inner(), into_evm2any(message))
            .call()
            .await
            .map_err(|err| GatewayError::call("router", "getFee", self.router, err))
    }

    async fn active_on_ramp(&self, selector: ChainSelector) -> GatewayResult<Address> {
        IRouterClient::new(self.router, &self.provider)
            .getOnRamp(selector.into_inner())
            .call()
            .await
            .map_err(|err| GatewayError::call("router", "getOnRamp", self.router, err))
    }

    async fn send(
        &self,
        selector: ChainSelector,
        message: &RouterMessage,
        value: U256,
        confirmations: u64,
    ) -> GatewayResult<TxReceipt> {
        let pending = IRouterClient::new(self.router, &self.provider)
            .ccipSend(selector.into_inner(), into_evm2any(message))
            .value(value)
            .send()
            .await
            .map_err(|err| GatewayError::call("router", "ccipSend", self.router, err))?;

        confirm(pending, confirmations, "router", "ccipSend", self.router).await
    }
}

#[async_trait]
impl RegistryGateway for EvmGateway {
    async fn token_admin_registry(&self, on_ramp: Address) -> GatewayResult<Address> {
        let config = IEVM2AnyOnRamp::new(on_ramp, &self.provider)
            .getStaticConfig()
            .call()
            .await
            .map_err(|err| GatewayError::call("on-ramp", "getStaticConfig", on_ramp, err))?;

        Ok(config.tokenAdminRegistry)
    }

    async fn get_pool(&self, registry: Address, token: Address) -> GatewayResult<Address> {
        ITokenAdminRegistry::new(registry, &self.provider)
            .getPool(token)
            .call()
            .await
            .map_err(|err| GatewayError::call("token admin registry", "getPool", registry, err))
    }
}

#[async_trait]
impl PoolGateway for EvmGateway {
    async fn is_supported_chain(
        &self,
        pool: Address,
        selector: ChainSelector,
    ) -> GatewayResult<bool> {
        ITokenPool::new(pool, &self.provider)
            .isSupportedChain(selector.into_inner())
            .call()
            .await
            .map_err(|err| GatewayError::call("token pool", "isSupportedChain", pool, err))
    }
}

#[async_trait]
impl TokenGateway for EvmGateway {
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> GatewayResult<U256> {
        IERC20Metadata::new(token, &self.provider)
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|err| GatewayError::call("token", "allowance", token, err))
    }

    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        confirmations: u64,
    ) -> GatewayResult<TxReceipt> {
        let pending = IERC20Metadata::new(token, &self.provider)
            .approve(spender, amount)
            .send()
            .await
            .map_err(|err| GatewayError::call("token", "approve", token, err))?;

        confirm(pending, confirmations, "token", "approve", token).await
    }

    async fn balance_of(&self, token: Address, owner: Address) -> GatewayResult<U256> {
        IERC20Metadata::new(token, &self.provider)
            .balanceOf(owner)
            .call()
            .await
            .map_err(|err| GatewayError::call("token", "balanceOf", token, err))
    }

    async fn symbol(&self, token: Address) -> GatewayResult<String> {
        IERC20Metadata::new(token, &self.provider)
            .symbol()
            .call()
            .await
            .map_err(|err| GatewayError::call("token", "symbol", token, err))
    }

    async fn decimals(&self, token: Address) -> GatewayResult<u8> {
        IERC20Metadata::new(token, &self.provider)
            .decimals()
            .call()
            .await
            .map_err(|err| GatewayError::call("token", "decimals", token, err))
    }
}

fn into_evm2any(message: &RouterMessage) -> EVM2AnyMessage {
    EVM2AnyMessage {
        receiver: message.receiver.clone(),
        data: message.data.clone(),
        tokenAmounts: message
            .token_amounts
            .iter()
            .map(|token_amount| EVMTokenAmount {
                token: token_amount.token,
                amount: token_amount.amount,
            })
            .collect(),
        feeToken: message.fee_token,
        extraArgs: message.extra_args.clone(),
    }
}

/// Waits for a submitted transaction to reach `confirmations` blocks and
/// fails if it reverted.
async fn confirm(
    pending: PendingTransactionBuilder<alloy::network::Ethereum>,
    confirmations: u64,
    contract: &'static str,
    operation: &'static str,
    address: Address,
) -> GatewayResult<TxReceipt> {
    debug!(
        tx_hash = %pending.tx_hash(),
        confirmations,
        operation,
        "Waiting for transaction"
    );

    // Inclusion itself counts as the first confirmation.
    let receipt = pending
        .with_required_confirmations(confirmations.max(1))
        .get_receipt()
        .await
        .map_err(|err| GatewayError::call(contract, operation, address, err))?;

    if !receipt.status() {
        return Err(GatewayError::Reverted {
            tx_hash: receipt.transaction_hash(),
        });
    }

    Ok(TxReceipt {
        transaction_hash: receipt.transaction_hash(),
        block_number: receipt.block_number(),
        logs: receipt
            .inner
            .logs()
            .iter()
            .map(|log| log.inner.clone())
            .collect(),
    })
}
