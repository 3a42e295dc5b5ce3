use {
    crate::{
        ApprovalConfig, CcipError, ConfirmationPolicy, GatewayResult, SendOptions, TokenGateway,
    },
    ccip_types::{Address, FeeQuote, TokenAmount, U256, with_buffer},
    tokio::time::sleep,
    tracing::{debug, error, info, warn},
};

/// Allowance the router needs for one token within a single send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalEntry {
    pub token: Address,
    pub required_amount: U256,
    /// Whether the fee is (also) paid in this token.
    pub is_fee_token: bool,
}

impl ApprovalEntry {
    /// The allowance to approve. Fee tokens are buffered against fee drift
    /// between quoting and executing the send.
    pub fn target(&self, fee_buffer_percent: u64) -> U256 {
        if self.is_fee_token {
            with_buffer(self.required_amount, fee_buffer_percent)
        } else {
            self.required_amount
        }
    }
}

/// The allowances one send needs, one entry per distinct token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalPlan {
    entries: Vec<ApprovalEntry>,
}

impl ApprovalPlan {
    /// Merges the transferred tokens and the fee into one entry per token.
    ///
    /// A token that is both transferred and used to pay the fee needs an
    /// allowance covering both, otherwise the send reverts on-chain. A native
    /// fee needs no allowance.
    pub fn new(transfer_tokens: &[TokenAmount], fee: &FeeQuote) -> Self {
        let mut plan = Self::default();

        for transfer in transfer_tokens {
            plan.add(transfer.token, transfer.amount, false);
        }

        if !fee.is_native() {
            plan.add(fee.token, fee.amount, true);
        }

        plan
    }

    fn add(&mut self, token: Address, amount: U256, is_fee_token: bool) {
        match self.entries.iter_mut().find(|entry| entry.token == token) {
            Some(entry) => {
                entry.required_amount = entry.required_amount.saturating_add(amount);
                entry.is_fee_token |= is_fee_token;
            },
            None => self.entries.push(ApprovalEntry {
                token,
                required_amount: amount,
                is_fee_token,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, token: Address) -> Option<&ApprovalEntry> {
        self.entries.iter().find(|entry| entry.token == token)
    }

    /// Entries in processing order: fee tokens first, then plain transfers.
    /// A send whose fee cannot be pulled is rejected outright.
    pub fn ordered(&self) -> impl Iterator<Item = &ApprovalEntry> {
        let fees = self.entries.iter().filter(|entry| entry.is_fee_token);
        let transfers = self.entries.iter().filter(|entry| !entry.is_fee_token);

        fees.chain(transfers)
    }
}

/// Makes sure the router may pull every token a send needs from the owner.
///
/// Approvals are submitted one at a time, each awaited to confirmation
/// before the next, so a single signing account never races its own nonces.
pub struct ApprovalCoordinator<'a, G> {
    gateway: &'a G,
    spender: Address,
    config: &'a ApprovalConfig,
    confirmations: ConfirmationPolicy,
    options: SendOptions,
}

impl<'a, G> ApprovalCoordinator<'a, G>
where
    G: TokenGateway,
{
    pub fn new(gateway: &'a G, spender: Address, config: &'a ApprovalConfig) -> Self {
        Self {
            gateway,
            spender,
            config,
            confirmations: ConfirmationPolicy::default(),
            options: SendOptions::default(),
        }
    }

    pub fn with_confirmations(mut self, policy: ConfirmationPolicy, options: SendOptions) -> Self {
        self.confirmations = policy;
        self.options = options;
        self
    }

    /// Approves whatever is missing for `transfer_tokens` plus `fee`.
    ///
    /// Fails only if an approval transaction cannot be submitted or reverts.
    /// An allowance that is still short after verification is logged and
    /// tolerated: the node serving reads may lag behind, and the send itself
    /// is the authoritative check.
    pub async fn ensure_approvals(
        &self,
        transfer_tokens: &[TokenAmount],
        fee: &FeeQuote,
        owner: Address,
    ) -> Result<ApprovalPlan, CcipError> {
        let plan = ApprovalPlan::new(transfer_tokens, fee);

        if plan.is_empty() {
            debug!("Nothing to approve");
            return Ok(plan);
        }

        for entry in plan.ordered() {
            self.ensure_approval(entry, owner).await?;
        }

        Ok(plan)
    }

    async fn ensure_approval(
        &self,
        entry: &ApprovalEntry,
        owner: Address,
    ) -> Result<(), CcipError> {
        let target = entry.target(self.config.fee_buffer_percent);
        let allowance = self
            .gateway
            .allowance(entry.token, owner, self.spender)
            .await?;

        if allowance >= target {
            debug!(
                token = %entry.token,
                %allowance,
                %target,
                "Allowance already sufficient"
            );

            return Ok(());
        }

        let confirmations = self.confirmations.resolve(self.options.confirmations);

        info!(
            token = %entry.token,
            %allowance,
            %target,
            is_fee_token = entry.is_fee_token,
            confirmations,
            "Approving router"
        );

        let receipt = self
            .gateway
            .approve(entry.token, self.spender, target, confirmations)
            .await
            .map_err(|source| CcipError::ApprovalFailed {
                token: entry.token,
                source,
            })?;

        info!(
            token = %entry.token,
            tx_hash = %receipt.transaction_hash,
            "Approval confirmed"
        );

        self.verify_allowance(entry.token, owner, target).await;

        Ok(())
    }

    /// Re-reads the allowance after an approval until it reaches `target`,
    /// waiting longer between each read.
    async fn verify_allowance(&self, token: Address, owner: Address, target: U256) {
        let mut backoff = self.config.backoff();

        while let Some(delay) = backoff.next_delay() {
            sleep(delay).await;

            match self.read_allowance(token, owner).await {
                Ok(allowance) if allowance >= target => {
                    debug!(
                        %token,
                        %allowance,
                        attempt = backoff.attempts(),
                        "Allowance verified"
                    );

                    return;
                },
                Ok(allowance) => {
                    warn!(
                        %token,
                        %allowance,
                        %target,
                        attempt = backoff.attempts(),
                        max_attempts = backoff.max_attempts(),
                        "Allowance not visible yet"
                    );
                },
                Err(err) => {
                    warn!(
                        %token,
                        attempt = backoff.attempts(),
                        max_attempts = backoff.max_attempts(),
                        "Failed to read allowance: {err}"
                    );
                },
            }
        }

        error!(
            %token,
            %target,
            "Allowance still short after approval; continuing, the send will revert if it really is"
        );
    }

    async fn read_allowance(&self, token: Address, owner: Address) -> GatewayResult<U256> {
        self.gateway.allowance(token, owner, self.spender).await
    }
}

// ----------------------------------- tests -----------------------------------
