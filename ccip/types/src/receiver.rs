use {
    crate::TypesError,
    alloy::{
        primitives::{Address, B256, Bytes},
        sol_types::SolValue,
    },
    std::str::FromStr,
};

/// A message receiver on the destination chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    Evm(Address),
    /// A Solana program or wallet public key.
    Svm(B256),
}

impl Receiver {
    /// Encodes the receiver the way the destination chain's off-ramp decodes
    /// it: ABI-encoded for EVM, raw bytes for SVM.
    pub fn encode(&self) -> Bytes {
        match self {
            Receiver::Evm(address) => address.abi_encode().into(),
            Receiver::Svm(pubkey) => Bytes::copy_from_slice(pubkey.as_slice()),
        }
    }
}

/// Parses a hex string, choosing the chain family by length.
impl FromStr for Receiver {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim().trim_start_matches("0x"))?;

        match bytes.len() {
            20 => Ok(Receiver::Evm(Address::from_slice(&bytes))),
            32 => Ok(Receiver::Svm(B256::from_slice(&bytes))),
            len => Err(TypesError::InvalidReceiverLength { len }),
        }
    }
}

// ----------------------------------- tests -----------------------------------
