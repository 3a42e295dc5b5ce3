mod evm;

pub use evm::*;
