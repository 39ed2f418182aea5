use clap::Parser;
use ferrous_dnslink_api::AppState;
use ferrous_dnslink_domain::CliOverrides;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-dnslink")]
#[command(version)]
#[command(about = "Ferrous DNSLink - serves ENS text records as DNSLink TXT answers over HTTP")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Ethereum JSON-RPC endpoint used for ENS lookups
    #[arg(long, env = "FERROUS_DNSLINK_RPC_URL")]
    rpc_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        rpc_url: cli.rpc_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous DNSLink v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_loaded(cli.config.as_deref(), &config);

    let naming = di::NamingServices::new(&config)?;
    info!(
        provider = naming.provider.provider_name(),
        text_key = naming.resolve_dnslink.text_key(),
        "Naming provider initialized"
    );

    let app_state = AppState::new(naming.resolve_dnslink.clone());

    let bind_ip: IpAddr = config.server.bind_address.parse().map_err(|e| {
        anyhow::anyhow!("Invalid bind address {}: {}", config.server.bind_address, e)
    })?;
    let web_addr = SocketAddr::new(bind_ip, config.server.port);

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
