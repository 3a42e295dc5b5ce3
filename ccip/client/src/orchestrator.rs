use {
    crate::{
        ApprovalCoordinator, CcipError, CcipGateway, ClientConfig, Credential, RouterMessage,
        SendOptions, extract_send_result,
    },
    ccip_types::{
        Address, ChainSelector, FeeQuote, FeeRequest, MessageRequest, SendResult, TokenAmount,
        U256,
    },
    tracing::{debug, info, warn},
};

/// Token metadata and balances of one owner, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub token: Address,
    pub symbol: String,
    pub decimals: u8,
    pub balance: U256,
    /// Allowance the owner has granted the router.
    pub allowance: U256,
}

/// Drives a message request to a confirmed send transaction.
///
/// Each send runs these stages in order, stopping at the first failure:
///
/// 1. check the router supports the destination;
/// 2. quote the fee;
/// 3. if tokens are transferred, check each has a pool supporting the
///    destination;
/// 4. approve the router for the transferred tokens and the fee;
/// 5. submit `ccipSend`, attaching the fee as value if paid natively;
/// 6. decode the message ID from the receipt.
///
/// Transactions cannot be rolled back, so a failure after an approval leaves
/// that approval in place.
///
/// Nothing discovered during a send is kept on the orchestrator. Concurrent
/// sends therefore don't interfere with each other's state, but sends
/// sharing one signing account may still race for nonces; serializing them
/// is up to the caller.
pub struct MessageOrchestrator<G> {
    gateway: G,
    credential: Credential,
    config: ClientConfig,
}

impl<G> MessageOrchestrator<G>
where
    G: CcipGateway,
{
    pub fn new(gateway: G, credential: Credential, config: ClientConfig) -> Self {
        Self {
            gateway,
            credential,
            config,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn credential(&self) -> Credential {
        self.credential
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn is_chain_supported(&self, selector: ChainSelector) -> Result<bool, CcipError> {
        Ok(self.gateway.is_chain_supported(selector).await?)
    }

    /// Quotes the fee for a message without sending it.
    pub async fn get_fee(&self, request: &FeeRequest) -> Result<FeeQuote, CcipError> {
        let message = RouterMessage::from(request);

        self.quote(request.destination_chain_selector, &message).await
    }

    pub async fn send(&self, request: MessageRequest) -> Result<SendResult, CcipError> {
        self.send_with_options(request, SendOptions::default()).await
    }

    pub async fn send_with_options(
        &self,
        request: MessageRequest,
        options: SendOptions,
    ) -> Result<SendResult, CcipError> {
        let selector = request.destination_chain_selector;
        let message = RouterMessage::from(&request);

        info!(
            %selector,
            message_type = %request.message_type(),
            tokens = message.token_amounts.len(),
            data_len = message.data.len(),
            fee_token = %message.fee_token,
            "Sending CCIP message"
        );

        if !self.gateway.is_chain_supported(selector).await? {
            return Err(CcipError::UnsupportedDestination { selector });
        }

        let fee = self.quote(selector, &message).await?;

        if !message.token_amounts.is_empty() {
            self.validate_tokens(selector, &message.token_amounts).await?;
        }

        let owner = self.credential.owner()?;

        ApprovalCoordinator::new(&self.gateway, self.gateway.router(), &self.config.approval)
            .with_confirmations(self.config.confirmations, options)
            .ensure_approvals(&message.token_amounts, &fee, owner)
            .await?;

        // An ERC20 fee is pulled by the router through the allowance.
        let value = if fee.is_native() {
            fee.amount
        } else {
            U256::ZERO
        };

        let confirmations = self.config.confirmations.resolve(options.confirmations);

        info!(%selector, %value, confirmations, "Submitting ccipSend");

        let receipt = self
            .gateway
            .send(selector, &message, value, confirmations)
            .await?;

        let on_ramp = self.current_on_ramp(selector).await;
        let result = extract_send_result(&receipt, on_ramp);

        info!(
            tx_hash = %result.transaction_hash,
            message_id = ?result.message_id,
            block_number = ?result.block_number,
            "CCIP message sent"
        );

        Ok(result)
    }

    /// Symbol, decimals, balance and router allowance of `token` for `owner`.
    pub async fn token_info(
        &self,
        token: Address,
        owner: Address,
    ) -> Result<TokenInfo, CcipError> {
        let router = self.gateway.router();

        Ok(TokenInfo {
            token,
            symbol: self.gateway.symbol(token).await?,
            decimals: self.gateway.decimals(token).await?,
            balance: self.gateway.balance_of(token, owner).await?,
            allowance: self.gateway.allowance(token, owner, router).await?,
        })
    }

    async fn quote(
        &self,
        selector: ChainSelector,
        message: &RouterMessage,
    ) -> Result<FeeQuote, CcipError> {
        let amount = self.gateway.get_fee(selector, message).await?;

        debug!(%selector, fee_token = %message.fee_token, %amount, "Fee quoted");

        Ok(FeeQuote {
            token: message.fee_token,
            amount,
        })
    }

    /// Checks every token has a pool, and every pool supports `selector`,
    /// before anything is approved.
    async fn validate_tokens(
        &self,
        selector: ChainSelector,
        token_amounts: &[TokenAmount],
    ) -> Result<(), CcipError> {
        let registry = self.resolve_token_admin_registry(selector).await?;

        for TokenAmount { token, .. } in token_amounts {
            let pool = self.gateway.get_pool(registry, *token).await?;

            if pool == Address::ZERO {
                return Err(CcipError::TokenNotSupported { token: *token });
            }

            if !self.gateway.is_supported_chain(pool, selector).await? {
                return Err(CcipError::ChainNotSupportedForToken {
                    token: *token,
                    pool,
                    selector,
                });
            }

            debug!(%token, %pool, %selector, "Token pool supports destination");
        }

        Ok(())
    }

    /// The on-ramp whose event identifies a sent message. The transaction is
    /// already final here, so a failed lookup only widens the receipt search.
    async fn current_on_ramp(&self, selector: ChainSelector) -> Option<Address> {
        match self.gateway.active_on_ramp(selector).await {
            Ok(on_ramp) => Some(on_ramp).filter(|on_ramp| *on_ramp != Address::ZERO),
            Err(err) => {
                warn!(%selector, %err, "Failed to look up on-ramp after send");
                None
            },
        }
    }

    /// Finds the token admin registry through the on-ramp serving the lane.
    ///
    /// The result is only used by the send that looked it up.
    async fn resolve_token_admin_registry(
        &self,
        selector: ChainSelector,
    ) -> Result<Address, CcipError> {
        let on_ramp = self.gateway.active_on_ramp(selector).await?;

        if on_ramp == Address::ZERO {
            return Err(CcipError::CriticalConfiguration {
                reason: format!("router has no on-ramp for destination chain {selector}"),
            });
        }

        let registry = self.gateway.token_admin_registry(on_ramp).await?;

        if registry == Address::ZERO {
            return Err(CcipError::CriticalConfiguration {
                reason: format!("on-ramp {on_ramp} reports no token admin registry"),
            });
        }

        debug!(%on_ramp, %registry, "Resolved token admin registry");

        Ok(registry)
    }
}
