use anyhow::Result;
use clap::Parser;
use purpleprom_collector::PurpleAirCollector;
use purpleprom_exporter::app;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 7884;

/// Proxy PurpleAir local stats as Prometheus metrics.
#[derive(Debug, Parser)]
#[command(name = "purpleprom", version, about = "Proxy purpleair local stats")]
struct Cli {
    /// Verbose debug output
    #[arg(short, long)]
    debug: bool,

    /// Port to run webserver on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// IP address or hostname for a PurpleAir sensor on the local network
    #[arg(short, long, num_args = 1..)]
    sensors: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.debug {
        "purpleprom=debug"
    } else {
        "purpleprom=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_directive.parse()?))
        .init();

    tracing::info!(port = cli.port, "purpleprom starting");
    if cli.sensors.is_empty() {
        tracing::warn!("No sensors configured; every metric family will be empty");
    }

    let collector = Arc::new(PurpleAirCollector::new(cli.sensors));
    let app = app::build_app(collector);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "purpleair prometheus exporter - listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down ...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_flag_table() {
        let cli = Cli::try_parse_from(["purpleprom"]).expect("bare invocation should parse");
        assert!(!cli.debug);
        assert_eq!(cli.port, 7884);
        assert!(cli.sensors.is_empty());
    }

    #[test]
    fn sensors_flag_takes_multiple_values() {
        let cli = Cli::try_parse_from(["purpleprom", "-s", "10.0.0.5", "10.0.0.6"])
            .expect("multi-value -s should parse");
        assert_eq!(cli.sensors, vec!["10.0.0.5", "10.0.0.6"]);
    }

    #[test]
    fn sensors_flag_can_repeat() {
        let cli = Cli::try_parse_from(["purpleprom", "-s", "10.0.0.5", "-s", "sensor.lan"])
            .expect("repeated -s should parse");
        assert_eq!(cli.sensors, vec!["10.0.0.5", "sensor.lan"]);
    }

    #[test]
    fn port_and_debug_flags_parse() {
        let cli = Cli::try_parse_from(["purpleprom", "-d", "-p", "9000"])
            .expect("-d -p should parse");
        assert!(cli.debug);
        assert_eq!(cli.port, 9000);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(Cli::try_parse_from(["purpleprom", "-p", "metrics"]).is_err());
    }
}
