use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error("receiver must be 20 (EVM) or 32 (SVM) bytes, got {len}")]
    InvalidReceiverLength { len: usize },

    #[error("too many SVM accounts! max: {max}, got: {count}")]
    TooManySvmAccounts { count: usize, max: usize },

    #[error("invalid token amount `{input}`: {reason}")]
    InvalidTokenAmount { input: String, reason: String },
}
