use {
    crate::output::print_json_pretty,
    ccip_client::CcipClient,
    ccip_types::{Address, format_units},
    clap::Parser,
    serde_json::json,
};

#[derive(Parser)]
pub struct TokenCmd {
    /// Token contract address
    address: Address,

    /// Account to read the balance and allowance of [default: the signing account]
    #[arg(long)]
    owner: Option<Address>,
}

impl TokenCmd {
    pub async fn run(self, client: CcipClient) -> anyhow::Result<()> {
        let owner = match self.owner {
            Some(owner) => owner,
            None => client.credential().owner()?,
        };

        let info = client.token_info(self.address, owner).await?;

        print_json_pretty(json!({
            "token": info.token,
            "symbol": info.symbol,
            "decimals": info.decimals,
            "owner": owner,
            "balance": format_units(info.balance, info.decimals),
            "router_allowance": format_units(info.allowance, info.decimals),
        }))
    }
}
