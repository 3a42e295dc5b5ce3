use {
    crate::GatewayResult,
    async_trait::async_trait,
    ccip_types::{Address, B256, Bytes, ChainSelector, MessageRequest, TokenAmount, U256},
};

/// A message as the router sees it: omitted data and tokens are filled in
/// as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterMessage {
    pub receiver: Bytes,
    pub data: Bytes,
    pub token_amounts: Vec<TokenAmount>,
    pub fee_token: Address,
    pub extra_args: Bytes,
}

impl From<&MessageRequest> for RouterMessage {
    fn from(request: &MessageRequest) -> Self {
        Self {
            receiver: request.receiver.clone(),
            data: request.data_or_empty(),
            token_amounts: request.tokens().to_vec(),
            fee_token: request.fee_token,
            extra_args: request.extra_args.clone(),
        }
    }
}

/// A log emitted by a confirmed transaction.
pub type ReceiptLog = alloy::primitives::Log;

/// The parts of a confirmed transaction's receipt the client looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    pub logs: Vec<ReceiptLog>,
}

#[async_trait]
pub trait RouterGateway: Send + Sync {
    /// Address of the router, i.e. the spender tokens are approved for.
    fn router(&self) -> Address;

    async fn is_chain_supported(&self, selector: ChainSelector) -> GatewayResult<bool>;

    async fn get_fee(&self, selector: ChainSelector, message: &RouterMessage) -> GatewayResult<U256>;

    /// The on-ramp currently serving the lane to `selector`. Zero if none.
    async fn active_on_ramp(&self, selector: ChainSelector) -> GatewayResult<Address>;

    /// Submits `ccipSend` and waits for `confirmations` blocks.
    async fn send(
        &self,
        selector: ChainSelector,
        message: &RouterMessage,
        value: U256,
        confirmations: u64,
    ) -> GatewayResult<TxReceipt>;
}

#[async_trait]
pub trait RegistryGateway: Send + Sync {
    /// Reads the token admin registry from an on-ramp's static config.
    async fn token_admin_registry(&self, on_ramp: Address) -> GatewayResult<Address>;

    /// The pool administering `token`. Zero if the token is not registered.
    async fn get_pool(&self, registry: Address, token: Address) -> GatewayResult<Address>;
}

#[async_trait]
pub trait PoolGateway: Send + Sync {
    async fn is_supported_chain(&self, pool: Address, selector: ChainSelector)
    -> GatewayResult<bool>;
}

#[async_trait]
pub trait TokenGateway: Send + Sync {
    async fn allowance(&self, token: Address, owner: Address, spender: Address)
    -> GatewayResult<U256>;

    /// Submits `approve` and waits for `confirmations` blocks.
    async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
        confirmations: u64,
    ) -> GatewayResult<TxReceipt>;

    async fn balance_of(&self, token: Address, owner: Address) -> GatewayResult<U256>;

    async fn symbol(&self, token: Address) -> GatewayResult<String>;

    async fn decimals(&self, token: Address) -> GatewayResult<u8>;

    /// Human readable amount such as `1.5 LINK`. For logs and display only.
    async fn format_amount(&self, token: Address, amount: U256) -> GatewayResult<String> {
        let decimals = self.decimals(token).await?;
        let symbol = self.symbol(token).await?;

        Ok(format!("{} {symbol}", ccip_types::format_units(amount, decimals)))
    }
}

/// Everything the orchestrator needs from the chain.
pub trait CcipGateway: RouterGateway + RegistryGateway + PoolGateway + TokenGateway {}

impl<T> CcipGateway for T where T: RouterGateway + RegistryGateway + PoolGateway + TokenGateway {}
