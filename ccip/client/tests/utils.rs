#![allow(dead_code)]

use {
    alloy::{primitives::Log, sol_types::SolEvent},
    async_trait::async_trait,
    ccip_client::{
        GatewayError, GatewayResult, PoolGateway, RegistryGateway, RouterGateway, RouterMessage,
        TokenGateway, TxReceipt,
        bindings::IEVM2AnyOnRamp::{CCIPMessageSent, EVM2AnyRampMessage, RampMessageHeader},
    },
    ccip_types::{Address, B256, Bytes, ChainSelector, U256},
    std::{
        collections::{HashMap, HashSet, VecDeque},
        sync::{Mutex, Once},
    },
    tracing_subscriber::{EnvFilter, FmtSubscriber},
};

static TRACING: Once = Once::new();

pub fn setup_tracing_subscriber(level: tracing::Level) {
    TRACING.call_once(|| {
        let filter = EnvFilter::new(level.to_string());

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_test_writer()
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("failed to set global tracing subscriber");
    });
}

pub const ROUTER: Address = Address::repeat_byte(0xaa);
pub const ON_RAMP: Address = Address::repeat_byte(0xbb);
pub const REGISTRY: Address = Address::repeat_byte(0xcc);
pub const OWNER: Address = Address::repeat_byte(0xee);

pub const T1: Address = Address::repeat_byte(0x01);
pub const T2: Address = Address::repeat_byte(0x02);
pub const LINK: Address = Address::repeat_byte(0x0f);
pub const POOL_T1: Address = Address::repeat_byte(0x11);
pub const POOL_T2: Address = Address::repeat_byte(0x12);

pub const DEST: ChainSelector = ChainSelector::new(16015286601757825753);
pub const SEND_TX: B256 = B256::repeat_byte(0x5e);
pub const MESSAGE_ID: B256 = B256::repeat_byte(0x1d);

/// A chain interaction as seen by the mock, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    IsChainSupported(ChainSelector),
    GetFee(ChainSelector),
    ActiveOnRamp(ChainSelector),
    TokenAdminRegistry(Address),
    GetPool(Address),
    IsSupportedChain(Address),
    Allowance(Address),
    Approve {
        token: Address,
        amount: U256,
        confirmations: u64,
    },
    Send {
        selector: ChainSelector,
        value: U256,
        confirmations: u64,
    },
    BalanceOf(Address),
    Symbol(Address),
    Decimals(Address),
}

impl Call {
    pub fn is_approval_related(&self) -> bool {
        matches!(self, Call::Allowance(_) | Call::Approve { .. })
    }
}

#[derive(Debug, Default)]
pub struct ChainState {
    pub supported_chains: HashSet<ChainSelector>,
    pub fee: U256,
    pub on_ramp: Address,
    pub registry: Address,
    /// Token to pool. Unregistered tokens have the zero pool.
    pub pools: HashMap<Address, Address>,
    pub pool_chains: HashSet<(Address, ChainSelector)>,
    pub allowances: HashMap<Address, U256>,
    /// Allowance reads served before falling back to `allowances`. `None`
    /// makes the read fail.
    pub scripted_allowances: HashMap<Address, VecDeque<Option<U256>>>,
    pub failing_approvals: HashSet<Address>,
    pub failing_fee: bool,
    pub reverting_send: bool,
    pub balances: HashMap<Address, U256>,
    pub emit_send_event: bool,
}

/// An in-memory chain with one router lane to [`DEST`], recording every call.
#[derive(Debug)]
pub struct MockChain {
    state: Mutex<ChainState>,
    calls: Mutex<Vec<Call>>,
}

impl MockChain {
    /// A chain whose router supports [`DEST`], with pools for `T1` and `T2`
    /// that both support it, and a fee of 50,000.
    pub fn new() -> Self {
        let state = ChainState {
            supported_chains: HashSet::from([DEST]),
            fee: U256::from(50_000),
            on_ramp: ON_RAMP,
            registry: REGISTRY,
            pools: HashMap::from([(T1, POOL_T1), (T2, POOL_T2)]),
            pool_chains: HashSet::from([(POOL_T1, DEST), (POOL_T2, DEST)]),
            emit_send_event: true,
            ..Default::default()
        };

        Self {
            state: Mutex::new(state),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut ChainState),
    {
        f(&mut self.state.lock().unwrap());
    }

    pub fn script_allowances<I>(&self, token: Address, reads: I)
    where
        I: IntoIterator<Item = Option<U256>>,
    {
        self.update(|state| {
            state
                .scripted_allowances
                .entry(token)
                .or_default()
                .extend(reads)
        });
    }

    pub fn allowance_of(&self, token: Address) -> U256 {
        self.state
            .lock()
            .unwrap()
            .allowances
            .get(&token)
            .copied()
            .unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn approvals(&self) -> Vec<(Address, U256, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Approve {
                    token,
                    amount,
                    confirmations,
                } => Some((token, amount, confirmations)),
                _ => None,
            })
            .collect()
    }

    pub fn sends(&self) -> Vec<(ChainSelector, U256, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Send {
                    selector,
                    value,
                    confirmations,
                } => Some((selector, value, confirmations)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RouterGateway for MockChain {
    fn router(&self) -> Address {
        ROUTER
    }

    async fn is_chain_supported(&self, selector: ChainSelector) -> GatewayResult<bool> {
        self.record(Call::IsChainSupported(selector));

        Ok(self.state.lock().unwrap().supported_chains.contains(&selector))
    }

    async fn get_fee(&self, selector: ChainSelector, _message: &RouterMessage) -> GatewayResult<U256> {
        self.record(Call::GetFee(selector));

        let state = self.state.lock().unwrap();

        if state.failing_fee {
            return Err(GatewayError::call(
                "router",
                "getFee",
                ROUTER,
                "execution reverted: unsupported fee token",
            ));
        }

        Ok(state.fee)
    }

    async fn active_on_ramp(&self, selector: ChainSelector) -> GatewayResult<Address> {
        self.record(Call::ActiveOnRamp(selector));

        Ok(self.state.lock().unwrap().on_ramp)
    }

    async fn send(
        &self,
        selector: ChainSelector,
        _message: &RouterMessage,
        value: U256,
        confirmations: u64,
    ) -> GatewayResult<TxReceipt> {
        self.record(Call::Send {
            selector,
            value,
            confirmations,
        });

        let state = self.state.lock().unwrap();

        if state.reverting_send {
            return Err(GatewayError::Reverted { tx_hash: SEND_TX });
        }

        let logs = if state.emit_send_event {
            vec![message_sent_log(MESSAGE_ID, selector, 1)]
        } else {
            vec![]
        };

        Ok(TxReceipt {
            transaction_hash: SEND_TX,
            block_number: Some(100),
            logs,
        })
    }
}

#[async_trait]
impl RegistryGateway for MockChain {
    async fn token_admin_registry(&self, on_ramp: Address) -> GatewayResult<Address> {
        self.record(Call::TokenAdminRegistry(on_ramp));

        Ok(self.state.lock().unwrap().registry)
    }

    async fn get_pool(&self, _registry: Address, token: Address) -> GatewayResult<Address> {
        self.record(Call::GetPool(token));

        Ok(self
            .state
            .lock()
            .unwrap()
            .pools
            .get(&token)
            .copied()
            .unwrap_or_default())
    }
}

#[async_trait]
impl PoolGateway for MockChain {
    async fn is_supported_chain(
        &self,
        pool: Address,
        selector: ChainSelector,
    ) -> GatewayResult<bool> {
        self.record(Call::IsSupportedChain(pool));

        Ok(self.state.lock().unwrap().pool_chains.contains(&(pool, selector)))
    }
}

#[async_trait]
impl TokenGateway for MockChain {
    async fn allowance(
        &self,
        token: Address,
        _owner: Address,
        _spender: Address,
    ) -> GatewayResult<U256> {
        self.record(Call::Allowance(token));

        let mut state = self.state.lock().unwrap();

        match state
            .scripted_allowances
            .get_mut(&token)
            .and_then(VecDeque::pop_front)
        {
            Some(Some(allowance)) => Ok(allowance),
            Some(None) => Err(GatewayError::call(
                "token",
                "allowance",
                token,
                "connection reset",
            )),
            None => Ok(state.allowances.get(&token).copied().unwrap_or_default()),
        }
    }

    async fn approve(
        &self,
        token: Address,
        _spender: Address,
        amount: U256,
        confirmations: u64,
    ) -> GatewayResult<TxReceipt> {
        self.record(Call::Approve {
            token,
            amount,
            confirmations,
        });

        let mut state = self.state.lock().unwrap();

        if state.failing_approvals.contains(&token) {
            return Err(GatewayError::Reverted {
                tx_hash: B256::repeat_byte(0xde),
            });
        }

        state.allowances.insert(token, amount);

        Ok(TxReceipt {
            transaction_hash: B256::repeat_byte(0xa0),
            block_number: Some(99),
            logs: vec![],
        })
    }

    async fn balance_of(&self, token: Address, _owner: Address) -> GatewayResult<U256> {
        self.record(Call::BalanceOf(token));

        Ok(self
            .state
            .lock()
            .unwrap()
            .balances
            .get(&token)
            .copied()
            .unwrap_or_default())
    }

    async fn symbol(&self, token: Address) -> GatewayResult<String> {
        self.record(Call::Symbol(token));

        Ok(if token == LINK { "LINK" } else { "TKN" }.to_string())
    }

    async fn decimals(&self, token: Address) -> GatewayResult<u8> {
        self.record(Call::Decimals(token));

        Ok(18)
    }
}

/// A `CCIPMessageSent` log as the on-ramp emits it.
pub fn message_sent_log(message_id: B256, selector: ChainSelector, sequence_number: u64) -> Log {
    let event = CCIPMessageSent {
        destChainSelector: selector.into_inner(),
        sequenceNumber: sequence_number,
        message: EVM2AnyRampMessage {
            header: RampMessageHeader {
                messageId: message_id,
                sourceChainSelector: 5009297550715157269,
                destChainSelector: selector.into_inner(),
                sequenceNumber: sequence_number,
                nonce: 1,
            },
            sender: OWNER,
            data: Bytes::new(),
            receiver: Bytes::from(vec![0; 32]),
            extraArgs: Bytes::new(),
            feeToken: Address::ZERO,
            feeTokenAmount: U256::ZERO,
            feeValueJuels: U256::ZERO,
            tokenAmounts: vec![],
        },
    };

    Log {
        address: ON_RAMP,
        data: event.encode_log_data(),
    }
}
