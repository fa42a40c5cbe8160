use clap::Parser;
use coordination::{create_root_logger_for_stdout, start_registry_server, InMemoryRegistry};
use std::error::Error;
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "coordination-registry")]
#[command(about = "Name service replicas register with and look each other up in")]
struct Cli {
    #[arg(long, default_value = "127.0.0.1:7000")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let logger = create_root_logger_for_stdout("registry".to_string());

    let registry_server = start_registry_server(logger.clone(), cli.listen, InMemoryRegistry::new());

    tokio::signal::ctrl_c().await?;
    slog::info!(logger, "Shutting down");
    registry_server.shutdown();

    Ok(())
}
