use {
    ccip_client::CcipClient,
    ccip_types::ChainSelector,
    clap::Parser,
    colored::Colorize,
};

#[derive(Parser)]
pub struct SupportedCmd {
    /// Destination chain selector
    selector: ChainSelector,
}

impl SupportedCmd {
    pub async fn run(self, client: CcipClient) -> anyhow::Result<()> {
        if client.is_chain_supported(self.selector).await? {
            println!("{} chain {} is supported", "✓".green(), self.selector);
        } else {
            println!("{} chain {} is not supported", "✗".red(), self.selector);
        }

        Ok(())
    }
}
