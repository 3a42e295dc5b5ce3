use {
    crate::CcipError,
    ccip_types::constants::{
        DEFAULT_BACKOFF_MULTIPLIER, DEFAULT_CONFIRMATIONS, DEFAULT_FEE_BUFFER_PERCENT,
        DEFAULT_MAX_DELAY_MS, DEFAULT_SETTLE_DELAY_MS, DEFAULT_VERIFY_ATTEMPTS,
    },
    serde::{Deserialize, Serialize},
    std::time::Duration,
};

/// Settings fixed when a client is constructed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub confirmations: ConfirmationPolicy,
    pub approval: ApprovalConfig,
}

/// Where the number of confirmations to wait for comes from.
///
/// Resolved every time a transaction is awaited, in order: the custom
/// override, the per-call value, the chain's configured value, and finally
/// [`DEFAULT_CONFIRMATIONS`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConfirmationPolicy {
    pub custom: Option<u64>,
    pub chain: Option<u64>,
}

impl ConfirmationPolicy {
    pub fn resolve(&self, per_call: Option<u64>) -> u64 {
        self.custom
            .or(per_call)
            .or(self.chain)
            .unwrap_or(DEFAULT_CONFIRMATIONS)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ApprovalConfig {
    pub fee_buffer_percent: u64,
    pub settle_delay_ms: u64,
    pub backoff_multiplier: f64,
    pub max_delay_ms: u64,
    /// Number of delayed allowance re-reads after an approval.
    pub max_attempts: u32,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            fee_buffer_percent: DEFAULT_FEE_BUFFER_PERCENT,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            max_attempts: DEFAULT_VERIFY_ATTEMPTS,
        }
    }
}

impl ApprovalConfig {
    /// Rejects settings the verification schedule cannot follow: the delay
    /// between re-reads never shrinks.
    pub fn validate(&self) -> Result<(), CcipError> {
        if !self.backoff_multiplier.is_finite() || self.backoff_multiplier < 1.0 {
            return Err(CcipError::InvalidConfig {
                reason: format!(
                    "approval.backoff_multiplier must be a finite number of at least 1, got {}",
                    self.backoff_multiplier
                ),
            });
        }

        Ok(())
    }

    pub fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::new(
            Duration::from_millis(self.settle_delay_ms),
            Duration::from_millis(self.max_delay_ms),
            self.backoff_multiplier,
            self.max_attempts,
        )
    }
}

/// Per-call settings of a send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendOptions {
    pub confirmations: Option<u64>,
}

/// A bounded sequence of growing delays.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    next: Duration,
    max: Duration,
    factor: f64,
    max_attempts: u32,
    attempts: u32,
}

impl ExponentialBackoff {
    pub fn new(initial: Duration, max: Duration, factor: f64, max_attempts: u32) -> Self {
        Self {
            next: initial.min(max),
            max,
            factor,
            max_attempts,
            attempts: 0,
        }
    }

    /// The delay to wait before the next attempt, or `None` once all
    /// attempts are used up.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.attempts >= self.max_attempts {
            return None;
        }

        let delay = self.next;

        self.attempts += 1;
        // A factor that doesn't yield a valid duration jumps straight to the cap.
        self.next = Duration::try_from_secs_f64(self.next.as_secs_f64() * self.factor)
            .map_or(self.max, |next| next.min(self.max));

        Some(delay)
    }

    /// Number of delays handed out so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

// ----------------------------------- tests -----------------------------------
