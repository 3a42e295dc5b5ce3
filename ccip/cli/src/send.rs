use {
    crate::{message::MessageArgs, output::print_json_pretty},
    ccip_client::{CcipClient, SendOptions},
    clap::Parser,
};

#[derive(Parser)]
pub struct SendCmd {
    #[command(flatten)]
    message: MessageArgs,

    /// Block confirmations to wait for on each transaction [default: network.confirmations, or 3]
    #[arg(long)]
    confirmations: Option<u64>,
}

impl SendCmd {
    pub async fn run(self, client: CcipClient) -> anyhow::Result<()> {
        let request = self.message.into_request()?;
        let options = SendOptions {
            confirmations: self.confirmations,
        };

        let result = client.send_with_options(request, options).await?;

        print_json_pretty(result)
    }
}
