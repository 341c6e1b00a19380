use clap::Parser;
use masq_dns_domain::{CliOverrides, ProxySettings};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "masq-dns")]
#[command(version)]
#[command(about = "Masquerading DNS forwarder for a private service-discovery domain")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Address and port to listen on
    #[arg(short = 'l', long, value_name = "ADDR")]
    listen: Option<String>,

    /// Public suffix to be masqueraded
    #[arg(short = 'm', long = "masqued-domain", value_name = "SUFFIX")]
    masqued_domain: Option<String>,

    /// Internal suffix substituted for the masqueraded one
    #[arg(short = 'u', long, value_name = "SUFFIX")]
    upstream_domain: Option<String>,

    /// Internal suffixes resolved by the special upstreams
    #[arg(long, visible_alias = "uds", value_delimiter = ',', num_args = 1..)]
    upstream_domains: Option<Vec<String>>,

    /// Special upstream host:port
    #[arg(long, visible_alias = "uc", value_delimiter = ',', num_args = 1..)]
    upstream_special: Option<Vec<String>>,

    /// Normal resolution upstream host:port
    #[arg(long, visible_alias = "un", value_delimiter = ',', num_args = 1..)]
    upstream_normal: Option<Vec<String>>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        listen: cli.listen,
        masqueraded_domain: cli.masqued_domain,
        upstream_domain: cli.upstream_domain,
        upstream_domains: cli.upstream_domains,
        upstream_special: cli.upstream_special,
        upstream_normal: cli.upstream_normal,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting masq-dns v{}", env!("CARGO_PKG_VERSION"));

    let settings = Arc::new(ProxySettings::from_config(&config)?);
    let dns_services = di::DnsServices::new(settings);

    let listen_addr = config.server.socket_addr()?;
    server::start_dns_server(listen_addr, dns_services.handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
