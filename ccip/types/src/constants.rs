use alloy::primitives::{Address, FixedBytes, fixed_bytes};

/// Fee token value meaning "pay the fee in the chain's native currency".
pub const NATIVE_FEE_TOKEN: Address = Address::ZERO;

/// Percentage added on top of a fee-token allowance to absorb quote drift
/// between `getFee` and the moment the send transaction executes.
pub const DEFAULT_FEE_BUFFER_PERCENT: u64 = 20;

/// Confirmations awaited for write calls when nothing else is configured.
pub const DEFAULT_CONFIRMATIONS: u64 = 3;

/// Delay before the first allowance re-read after an approval lands.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 2_000;

/// Factor applied to the delay between consecutive allowance re-reads.
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 1.5;

/// Upper bound of a single delay between allowance re-reads.
pub const DEFAULT_MAX_DELAY_MS: u64 = 10_000;

/// Number of delayed allowance re-reads after an approval transaction.
pub const DEFAULT_VERIFY_ATTEMPTS: u32 = 3;

/// `bytes4(keccak256("CCIP EVMExtraArgsV2"))`
pub const GENERIC_EXTRA_ARGS_V2_TAG: FixedBytes<4> = fixed_bytes!("181dcf10");

/// `bytes4(keccak256("CCIP SVMExtraArgsV1"))`
pub const SVM_EXTRA_ARGS_V1_TAG: FixedBytes<4> = fixed_bytes!("1f3b3aba");

/// The writable bitmap of SVM extra args is a `uint64`.
pub const SVM_MAX_ACCOUNTS: usize = 64;
