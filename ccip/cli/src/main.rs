mod config;
mod fee;
mod home_directory;
mod message;
mod output;
mod send;
mod supported;
mod token;

use {
    crate::{
        config::Config, fee::FeeCmd, home_directory::HomeDirectory, send::SendCmd,
        supported::SupportedCmd, token::TokenCmd,
    },
    alloy::signers::local::PrivateKeySigner,
    anyhow::Context,
    ccip_client::CcipClient,
    ccip_types::Address,
    clap::Parser,
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
    url::Url,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Directory holding config.toml [default: ~/.ccip]
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Log level [default: log_level from the config file]
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// JSON-RPC endpoint of the source chain [default: network.rpc_url]
    #[arg(long, global = true)]
    rpc_url: Option<Url>,

    /// Router contract on the source chain [default: network.router]
    #[arg(long, global = true)]
    router: Option<Address>,

    /// Hex-encoded private key of the sending account. Without it, only reads are possible.
    #[arg(long, global = true, env = "CCIP_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Check whether the router supports a destination chain
    Supported(SupportedCmd),

    /// Quote the fee of a message
    Fee(FeeCmd),

    /// Approve what is needed and send a message
    Send(SendCmd),

    /// Show a token's metadata, balance and allowance to the router
    Token(TokenCmd),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_dir = HomeDirectory::new_or_default(cli.home.clone())?;

    // A missing config file is fine; defaults and `CCIP_*` variables apply.
    let cfg: Config = parse_config(app_dir.config_file())?;

    let log_level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);

    tracing_subscriber::fmt()
        .with_max_level(log_level.parse::<LevelFilter>()?)
        .init();

    let client = connect(&cli, &cfg)?;

    match cli.command {
        Command::Supported(cmd) => cmd.run(client).await,
        Command::Fee(cmd) => cmd.run(client).await,
        Command::Send(cmd) => cmd.run(client).await,
        Command::Token(cmd) => cmd.run(client).await,
    }
}

fn connect(cli: &Cli, cfg: &Config) -> anyhow::Result<CcipClient> {
    let rpc_url = match &cli.rpc_url {
        Some(rpc_url) => rpc_url.clone(),
        None => cfg
            .network
            .rpc_url
            .as_deref()
            .context("no RPC endpoint: pass --rpc-url or set network.rpc_url")?
            .parse()
            .context("network.rpc_url is not a valid URL")?,
    };

    let router = cli
        .router
        .or(cfg.network.router)
        .context("no router: pass --router or set network.router")?;

    let signer = cli
        .private_key
        .as_deref()
        .map(|key| key.trim_start_matches("0x").parse::<PrivateKeySigner>())
        .transpose()
        .context("invalid private key")?;

    Ok(CcipClient::connect(
        rpc_url,
        router,
        signer,
        cfg.client_config(),
    )?)
}
