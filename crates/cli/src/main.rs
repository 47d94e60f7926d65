use clap::Parser;
use kvdns_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "kvdns")]
#[command(version)]
#[command(about = "kvdns - authoritative DNS answers served from a key-value store")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Key prefix under which records are stored
    #[arg(short = 'p', long)]
    prefix: Option<String>,

    /// etcd endpoint (repeatable); without one the in-memory store is used
    #[arg(short = 'e', long = "endpoint", value_name = "URL")]
    endpoints: Vec<String>,

    /// JSON file of records to preload into the in-memory store
    #[arg(short = 's', long, value_name = "FILE")]
    seed: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        path_prefix: cli.prefix,
        endpoints: cli.endpoints,
        seed_file: cli.seed,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting kvdns v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config)?;

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let tcp_timeout = std::time::Duration::from_secs(config.server.tcp_timeout_secs);

    tokio::select! {
        result = server::start_dns_server(dns_addr, services.handler, tcp_timeout) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
