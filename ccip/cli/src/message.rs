use {
    anyhow::{Context, bail},
    ccip_types::{
        Address, B256, Bytes, ChainSelector, ExtraArgs, GenericExtraArgsV2, MessageRequest,
        Receiver, SvmAccount, SvmExtraArgsV1, TokenAmount, U256, constants::NATIVE_FEE_TOKEN,
    },
    clap::Args,
};

/// Arguments describing one message, shared by `fee` and `send`.
#[derive(Args, Debug, Clone)]
pub struct MessageArgs {
    /// Destination chain selector
    #[arg(long)]
    dest: ChainSelector,

    /// Receiver on the destination chain: 20-byte hex for EVM, 32-byte hex for Solana
    #[arg(long)]
    receiver: Receiver,

    /// Payload, as 0x-prefixed hex or UTF-8 text
    #[arg(long, value_parser = parse_data)]
    data: Option<Bytes>,

    /// Token to transfer, as {address}:{amount} in the token's smallest unit. Repeatable.
    #[arg(long = "token")]
    tokens: Vec<TokenAmount>,

    /// Token to pay the fee in, or `native`
    #[arg(long, default_value = "native", value_parser = parse_fee_token)]
    fee_token: Address,

    /// Gas limit (compute units on Solana) for executing the message on the destination
    #[arg(long)]
    gas_limit: Option<u64>,

    /// Let the message execute without waiting for earlier messages from the same sender
    #[arg(long, default_value_t = false)]
    allow_out_of_order: bool,

    /// Account passed to a Solana receiver program, as a 32-byte hex pubkey,
    /// suffixed with `:w` if writable. Repeatable; order is kept.
    #[arg(long = "svm-account", value_parser = parse_svm_account)]
    svm_accounts: Vec<SvmAccount>,
}

impl MessageArgs {
    pub fn into_request(self) -> anyhow::Result<MessageRequest> {
        let extra_args = self.extra_args()?.encode()?;

        let mut request = MessageRequest::new(self.dest, self.receiver.encode())
            .with_fee_token(self.fee_token)
            .with_extra_args(extra_args);

        if let Some(data) = self.data {
            request = request.with_data(data);
        }

        if !self.tokens.is_empty() {
            request = request.with_token_amounts(self.tokens);
        }

        Ok(request)
    }

    fn extra_args(&self) -> anyhow::Result<ExtraArgs> {
        match self.receiver {
            Receiver::Svm(pubkey) => {
                let compute_units = self
                    .gas_limit
                    .map(u32::try_from)
                    .transpose()
                    .context("compute units must fit in 32 bits")?
                    .unwrap_or_default();

                // Tokens are credited to the receiver's own token accounts.
                let token_receiver = if self.tokens.is_empty() {
                    B256::ZERO
                } else {
                    pubkey
                };

                Ok(ExtraArgs::SvmV1(SvmExtraArgsV1 {
                    compute_units,
                    allow_out_of_order_execution: self.allow_out_of_order,
                    token_receiver,
                    accounts: self.svm_accounts.clone(),
                }))
            },
            Receiver::Evm(_) if !self.svm_accounts.is_empty() => {
                bail!("--svm-account only applies to Solana receivers");
            },
            Receiver::Evm(_) if self.gas_limit.is_some() || self.allow_out_of_order => {
                Ok(ExtraArgs::GenericV2(GenericExtraArgsV2 {
                    gas_limit: U256::from(self.gas_limit.unwrap_or_default()),
                    allow_out_of_order_execution: self.allow_out_of_order,
                }))
            },
            Receiver::Evm(_) => Ok(ExtraArgs::Empty),
        }
    }
}

fn parse_data(s: &str) -> anyhow::Result<Bytes> {
    match s.strip_prefix("0x") {
        Some(hex_str) => Ok(hex::decode(hex_str)
            .context("payload starting with 0x must be valid hex")?
            .into()),
        None => Ok(Bytes::copy_from_slice(s.as_bytes())),
    }
}

fn parse_fee_token(s: &str) -> anyhow::Result<Address> {
    if s.eq_ignore_ascii_case("native") {
        return Ok(NATIVE_FEE_TOKEN);
    }

    s.parse().context("fee token must be an address or `native`")
}

fn parse_svm_account(s: &str) -> anyhow::Result<SvmAccount> {
    let (pubkey, is_writable) = match s.strip_suffix(":w") {
        Some(pubkey) => (pubkey, true),
        None => (s, false),
    };

    Ok(SvmAccount {
        pubkey: pubkey
            .parse()
            .context("Solana account must be a 32-byte hex pubkey, optionally suffixed with `:w`")?,
        is_writable,
    })
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        assertor::*,
        ccip_types::{MessageType, constants::GENERIC_EXTRA_ARGS_V2_TAG},
        clap::Parser,
        test_case::test_case,
    };

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        message: MessageArgs,
    }

    const EVM_RECEIVER: &str = "0x1111111111111111111111111111111111111111";
    const SVM_RECEIVER: &str = "0x2222222222222222222222222222222222222222222222222222222222222222";

    fn parse(args: &[&str]) -> MessageRequest {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);

        TestCli::try_parse_from(argv)
            .unwrap()
            .message
            .into_request()
            .unwrap()
    }

    #[test_case("0x68656c6c6f" => b"hello".to_vec(); "hex")]
    #[test_case("hello" => b"hello".to_vec(); "text")]
    #[test_case("0x" => Vec::<u8>::new(); "empty hex")]
    fn parsing_data(input: &str) -> Vec<u8> {
        parse_data(input).unwrap().to_vec()
    }

    #[test]
    fn malformed_hex_data_is_rejected() {
        assert_that!(parse_data("0xzz")).is_err();
    }

    #[test_case("native" => NATIVE_FEE_TOKEN; "native")]
    #[test_case("NATIVE" => NATIVE_FEE_TOKEN; "case insensitive")]
    #[test_case(EVM_RECEIVER => Address::repeat_byte(0x11); "address")]
    fn parsing_fee_token(input: &str) -> Address {
        parse_fee_token(input).unwrap()
    }

    #[test]
    fn token_transfer_to_evm() {
        let request = parse(&[
            "--dest",
            "16015286601757825753",
            "--receiver",
            EVM_RECEIVER,
            "--token",
            "0x3333333333333333333333333333333333333333:1000",
            "--token",
            "0x4444444444444444444444444444444444444444:2000",
        ]);

        assert_that!(request.destination_chain_selector)
            .is_equal_to(ChainSelector::new(16015286601757825753));
        assert_that!(request.receiver.len()).is_equal_to(32);
        assert_that!(request.tokens().len()).is_equal_to(2);
        assert_that!(request.pays_fee_in_native()).is_true();
        assert_that!(request.extra_args.is_empty()).is_true();
        assert_that!(request.message_type()).is_equal_to(MessageType::TokenTransfer);
    }

    #[test]
    fn gas_limit_selects_generic_extra_args() {
        let request = parse(&[
            "--dest",
            "1",
            "--receiver",
            EVM_RECEIVER,
            "--data",
            "hello",
            "--gas-limit",
            "200000",
            "--fee-token",
            "0x779877A7B0D9E8603169DdbD7836e478b4624789",
        ]);

        assert_that!(request.extra_args[..4].to_vec())
            .is_equal_to(GENERIC_EXTRA_ARGS_V2_TAG.to_vec());
        assert_that!(request.pays_fee_in_native()).is_false();
        assert_that!(request.message_type()).is_equal_to(MessageType::ArbitraryMessaging);
    }

    #[test]
    fn svm_receiver_is_raw_and_gets_svm_extra_args() {
        let request = parse(&["--dest", "1", "--receiver", SVM_RECEIVER, "--gas-limit", "5"]);

        assert_that!(request.receiver.to_vec()).is_equal_to(vec![0x22; 32]);
        assert_that!(request.extra_args[..4].to_vec()).is_equal_to(vec![0x1f, 0x3b, 0x3a, 0xba]);
    }

    #[test]
    fn compute_units_must_fit_u32() {
        let cli = TestCli::try_parse_from([
            "test",
            "--dest",
            "1",
            "--receiver",
            SVM_RECEIVER,
            "--gas-limit",
            "4294967296",
        ])
        .unwrap();

        assert_that!(cli.message.into_request()).is_err();
    }

    #[test_case(SVM_RECEIVER => (B256::repeat_byte(0x22), false); "read only")]
    #[test_case(
        "0x3333333333333333333333333333333333333333333333333333333333333333:w"
        => (B256::repeat_byte(0x33), true);
        "writable"
    )]
    fn parsing_svm_account(input: &str) -> (B256, bool) {
        let account = parse_svm_account(input).unwrap();

        (account.pubkey, account.is_writable)
    }

    #[test_case(EVM_RECEIVER; "evm address")]
    #[test_case("0x2222222222222222222222222222222222222222222222222222222222222222:rw"; "unknown suffix")]
    fn malformed_svm_account_is_rejected(input: &str) {
        assert_that!(parse_svm_account(input)).is_err();
    }

    #[test]
    fn svm_accounts_reach_the_extra_args_in_order() {
        let writable = format!("0x{}:w", "33".repeat(32));
        let read_only = format!("0x{}", "44".repeat(32));

        let request = parse(&[
            "--dest",
            "1",
            "--receiver",
            SVM_RECEIVER,
            "--gas-limit",
            "5",
            "--svm-account",
            &writable,
            "--svm-account",
            &read_only,
        ]);

        let expected = ExtraArgs::SvmV1(SvmExtraArgsV1 {
            compute_units: 5,
            allow_out_of_order_execution: false,
            token_receiver: B256::ZERO,
            accounts: vec![
                SvmAccount {
                    pubkey: B256::repeat_byte(0x33),
                    is_writable: true,
                },
                SvmAccount {
                    pubkey: B256::repeat_byte(0x44),
                    is_writable: false,
                },
            ],
        })
        .encode()
        .unwrap();

        assert_that!(request.extra_args).is_equal_to(expected);
    }

    #[test]
    fn svm_accounts_are_rejected_for_evm_receivers() {
        let cli = TestCli::try_parse_from([
            "test",
            "--dest",
            "1",
            "--receiver",
            EVM_RECEIVER,
            "--gas-limit",
            "200000",
            "--svm-account",
            SVM_RECEIVER,
        ])
        .unwrap();

        assert_that!(cli.message.into_request()).is_err();
    }
}
