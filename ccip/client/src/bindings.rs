//! ABI of the contracts the client talks to, limited to what it calls.

#![allow(missing_docs)]

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IRouterClient {
        struct EVMTokenAmount {
            address token;
            uint256 amount;
        }

        struct EVM2AnyMessage {
            bytes receiver;
            bytes data;
            EVMTokenAmount[] tokenAmounts;
            address feeToken;
            bytes extraArgs;
        }

        function isChainSupported(uint64 destChainSelector) external view returns (bool supported);

        function getFee(uint64 destinationChainSelector, EVM2AnyMessage memory message) external view returns (uint256 fee);

        function ccipSend(uint64 destinationChainSelector, EVM2AnyMessage calldata message) external payable returns (bytes32);

        function getOnRamp(uint64 destChainSelector) external view returns (address onRampAddress);
    }
}

sol! {
    #[sol(rpc)]
    interface IEVM2AnyOnRamp {
        struct StaticConfig {
            uint64 chainSelector;
            address rmnRemote;
            address nonceManager;
            address tokenAdminRegistry;
        }

        struct RampMessageHeader {
            bytes32 messageId;
            uint64 sourceChainSelector;
            uint64 destChainSelector;
            uint64 sequenceNumber;
            uint64 nonce;
        }

        struct EVM2AnyTokenTransfer {
            address sourcePoolAddress;
            bytes destTokenAddress;
            bytes extraData;
            uint256 amount;
            bytes destExecData;
        }

        struct EVM2AnyRampMessage {
            RampMessageHeader header;
            address sender;
            bytes data;
            bytes receiver;
            bytes extraArgs;
            address feeToken;
            uint256 feeTokenAmount;
            uint256 feeValueJuels;
            EVM2AnyTokenTransfer[] tokenAmounts;
        }

        event CCIPMessageSent(uint64 indexed destChainSelector, uint64 indexed sequenceNumber, EVM2AnyRampMessage message);

        function getStaticConfig() external view returns (StaticConfig memory);
    }
}

sol! {
    #[sol(rpc)]
    interface ITokenAdminRegistry {
        function getPool(address token) external view returns (address);
    }
}

sol! {
    #[sol(rpc)]
    interface ITokenPool {
        function isSupportedChain(uint64 remoteChainSelector) external view returns (bool);
    }
}

sol! {
    #[sol(rpc)]
    interface IERC20Metadata {
        function allowance(address owner, address spender) external view returns (uint256);

        function approve(address spender, uint256 amount) external returns (bool);

        function balanceOf(address account) external view returns (uint256);

        function symbol() external view returns (string);

        function decimals() external view returns (uint8);
    }
}
