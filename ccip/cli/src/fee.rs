use {
    crate::{message::MessageArgs, output::print_json_pretty},
    ccip_client::{CcipClient, TokenGateway},
    ccip_types::format_units,
    clap::Parser,
    colored::Colorize,
};

#[derive(Parser)]
pub struct FeeCmd {
    #[command(flatten)]
    message: MessageArgs,
}

impl FeeCmd {
    pub async fn run(self, client: CcipClient) -> anyhow::Result<()> {
        let request = self.message.into_request()?;
        let fee = client.get_fee(&request).await?;

        print_json_pretty(fee)?;

        let formatted = if fee.is_native() {
            format!("{} (native)", format_units(fee.amount, 18))
        } else {
            client.gateway().format_amount(fee.token, fee.amount).await?
        };

        println!("{} {formatted}", "fee:".bold());

        Ok(())
    }
}
