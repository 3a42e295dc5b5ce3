use {
    crate::{
        TypesError,
        constants::{GENERIC_EXTRA_ARGS_V2_TAG, SVM_EXTRA_ARGS_V1_TAG, SVM_MAX_ACCOUNTS},
    },
    alloy::{
        primitives::{B256, Bytes, U256},
        sol,
        sol_types::SolValue,
    },
};

sol! {
    struct GenericExtraArgsV2Abi {
        uint256 gasLimit;
        bool allowOutOfOrderExecution;
    }

    struct SvmExtraArgsV1Abi {
        uint32 computeUnits;
        uint64 accountIsWritableBitmap;
        bool allowOutOfOrderExecution;
        bytes32 tokenReceiver;
        bytes32[] accounts;
    }
}

/// Execution parameters for EVM (and EVM-like) destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericExtraArgsV2 {
    /// Gas the receiver's `ccipReceive` may use. Zero for pure token
    /// transfers to an externally owned account.
    pub gas_limit: U256,
    pub allow_out_of_order_execution: bool,
}

/// An account handed to a Solana receiver program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvmAccount {
    pub pubkey: B256,
    pub is_writable: bool,
}

/// Execution parameters for Solana destinations.
///
/// `accounts` are the accounts the receiver program's `ccip_receive`
/// instruction expects, in order. Their writability is packed into a bitmap,
/// so at most 64 accounts are supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvmExtraArgsV1 {
    pub compute_units: u32,
    pub allow_out_of_order_execution: bool,
    /// Owner of the token accounts that receive transferred tokens. Must be
    /// set whenever the message carries tokens.
    pub token_receiver: B256,
    pub accounts: Vec<SvmAccount>,
}

impl SvmExtraArgsV1 {
    pub fn account_is_writable_bitmap(&self) -> Result<u64, TypesError> {
        if self.accounts.len() > SVM_MAX_ACCOUNTS {
            return Err(TypesError::TooManySvmAccounts {
                count: self.accounts.len(),
                max: SVM_MAX_ACCOUNTS,
            });
        }

        Ok(self
            .accounts
            .iter()
            .enumerate()
            .filter(|(_, account)| account.is_writable)
            .fold(0u64, |bitmap, (index, _)| bitmap | (1u64 << index)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtraArgs {
    /// Let the router apply the destination's defaults.
    #[default]
    Empty,
    GenericV2(GenericExtraArgsV2),
    SvmV1(SvmExtraArgsV1),
}

impl ExtraArgs {
    /// Tag-prefixed ABI encoding, as the router expects in `extraArgs`.
    pub fn encode(&self) -> Result<Bytes, TypesError> {
        let encoded = match self {
            ExtraArgs::Empty => return Ok(Bytes::new()),
            ExtraArgs::GenericV2(args) => {
                let abi = GenericExtraArgsV2Abi {
                    gasLimit: args.gas_limit,
                    allowOutOfOrderExecution: args.allow_out_of_order_execution,
                };

                [GENERIC_EXTRA_ARGS_V2_TAG.as_slice(), &abi.abi_encode()].concat()
            },
            ExtraArgs::SvmV1(args) => {
                let abi = SvmExtraArgsV1Abi {
                    computeUnits: args.compute_units,
                    accountIsWritableBitmap: args.account_is_writable_bitmap()?,
                    allowOutOfOrderExecution: args.allow_out_of_order_execution,
                    tokenReceiver: args.token_receiver,
                    accounts: args.accounts.iter().map(|account| account.pubkey).collect(),
                };

                [SVM_EXTRA_ARGS_V1_TAG.as_slice(), &abi.abi_encode()].concat()
            },
        };

        Ok(encoded.into())
    }
}

// ----------------------------------- tests -----------------------------------
