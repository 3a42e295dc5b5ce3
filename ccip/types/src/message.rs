use {
    crate::{TypesError, constants::NATIVE_FEE_TOKEN},
    alloy::primitives::{Address, B256, Bytes, U256},
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
    strum_macros::Display,
};

/// Opaque identifier of a destination chain, as understood by the router.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(transparent)]
pub struct ChainSelector(u64);

impl ChainSelector {
    pub const fn new(selector: u64) -> Self {
        Self(selector)
    }

    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainSelector {
    fn from(selector: u64) -> Self {
        Self(selector)
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainSelector {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// An amount of a token, in the token's smallest unit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    pub token: Address,
    pub amount: U256,
}

impl TokenAmount {
    pub const fn new(token: Address, amount: U256) -> Self {
        Self { token, amount }
    }
}

/// Parses the `{token}:{amount}` form used on the command line.
impl FromStr for TokenAmount {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| TypesError::InvalidTokenAmount {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (token, amount) = s
            .split_once(':')
            .ok_or_else(|| invalid("expecting the format {token}:{amount}"))?;

        let token = Address::from_str(token.trim()).map_err(|err| invalid(&err.to_string()))?;
        let amount = U256::from_str(amount.trim()).map_err(|err| invalid(&err.to_string()))?;

        Ok(Self { token, amount })
    }
}

/// A cross-chain message as submitted by a caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageRequest {
    pub destination_chain_selector: ChainSelector,
    /// Receiver address, already encoded for the destination chain.
    pub receiver: Bytes,
    pub data: Option<Bytes>,
    pub token_amounts: Option<Vec<TokenAmount>>,
    /// `NATIVE_FEE_TOKEN` means the fee is paid in native currency.
    pub fee_token: Address,
    /// Destination execution parameters, passed through to the router.
    pub extra_args: Bytes,
}

/// Fee quotes are read with exactly the same inputs as a send.
pub type FeeRequest = MessageRequest;

impl MessageRequest {
    pub fn new<S, R>(destination_chain_selector: S, receiver: R) -> Self
    where
        S: Into<ChainSelector>,
        R: Into<Bytes>,
    {
        Self {
            destination_chain_selector: destination_chain_selector.into(),
            receiver: receiver.into(),
            data: None,
            token_amounts: None,
            fee_token: NATIVE_FEE_TOKEN,
            extra_args: Bytes::new(),
        }
    }

    pub fn with_data<D>(mut self, data: D) -> Self
    where
        D: Into<Bytes>,
    {
        self.data = Some(data.into());
        self
    }

    pub fn with_token_amounts<I>(mut self, token_amounts: I) -> Self
    where
        I: IntoIterator<Item = TokenAmount>,
    {
        self.token_amounts = Some(token_amounts.into_iter().collect());
        self
    }

    pub fn with_fee_token(mut self, fee_token: Address) -> Self {
        self.fee_token = fee_token;
        self
    }

    pub fn with_extra_args<E>(mut self, extra_args: E) -> Self
    where
        E: Into<Bytes>,
    {
        self.extra_args = extra_args.into();
        self
    }

    /// The payload, with an omitted payload read as empty bytes.
    pub fn data_or_empty(&self) -> Bytes {
        self.data.clone().unwrap_or_default()
    }

    /// The transferred tokens, with omitted tokens read as an empty list.
    pub fn tokens(&self) -> &[TokenAmount] {
        self.token_amounts.as_deref().unwrap_or_default()
    }

    pub fn pays_fee_in_native(&self) -> bool {
        self.fee_token == NATIVE_FEE_TOKEN
    }

    pub fn message_type(&self) -> MessageType {
        let has_data = self.data.as_ref().is_some_and(|data| !data.is_empty());

        match (has_data, self.tokens().is_empty()) {
            (true, false) => MessageType::ProgrammaticTokenTransfer,
            (false, false) => MessageType::TokenTransfer,
            // A message with neither data nor tokens is allowed; whether it
            // makes sense is up to the destination.
            (_, true) => MessageType::ArbitraryMessaging,
        }
    }
}

/// What a message carries, as seen by the receiver.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageType {
    /// Token transfers only, no data payload.
    TokenTransfer,
    /// Data payload only, no token transfers.
    ArbitraryMessaging,
    /// Data payload alongside token transfers, typically instructions for
    /// what to do with the tokens.
    ProgrammaticTokenTransfer,
}

/// The fee the router charges for a message, denominated in `token`.
///
/// Only valid for the exact message it was quoted for. The contract does not
/// lock the quote, so it may drift before the message is sent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    pub token: Address,
    pub amount: U256,
}

impl FeeQuote {
    pub fn is_native(&self) -> bool {
        self.token == NATIVE_FEE_TOKEN
    }
}

/// Outcome of a confirmed send transaction.
///
/// Only `transaction_hash` is guaranteed. The remaining fields come from the
/// router's send event and are absent if it could not be decoded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub transaction_hash: B256,
    pub message_id: Option<B256>,
    pub block_number: Option<u64>,
    pub destination_chain_selector: Option<String>,
    pub sequence_number: Option<String>,
}

impl SendResult {
    /// A result for a transaction whose send event could not be decoded.
    pub fn without_event(transaction_hash: B256, block_number: Option<u64>) -> Self {
        Self {
            transaction_hash,
            message_id: None,
            block_number,
            destination_chain_selector: None,
            sequence_number: None,
        }
    }
}

// ----------------------------------- tests -----------------------------------
