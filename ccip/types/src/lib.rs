pub mod constants;
mod error;
mod extra_args;
mod message;
mod receiver;
mod units;

pub use {error::*, extra_args::*, message::*, receiver::*, units::*};

// Re-exports
pub use alloy::primitives::{Address, B256, Bytes, U256};
