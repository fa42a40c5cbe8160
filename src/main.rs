use clap::Parser;
use coordination::{
    create_root_logger_for_stdout, try_create_replica, ChannelSubscriberSink, CoordinationConfig,
    CoordinationOptions, InMemoryScoreBackend, RemoteRegistry,
};
use std::error::Error;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::time::Duration;

#[derive(Parser)]
#[command(name = "coordination-replica")]
#[command(about = "Frontend replica taking part in election, clock sync and the lottery")]
struct Cli {
    /// Address of the registry server
    #[arg(long)]
    registry: SocketAddr,

    /// Address this replica listens on and advertises
    #[arg(long, default_value = "127.0.0.1")]
    ip: Ipv4Addr,

    #[arg(long)]
    port: u16,

    #[arg(long, default_value = "frontend")]
    role: String,

    /// Fixed replica id. Drawn at random when omitted.
    #[arg(long)]
    replica_id: Option<u32>,

    /// Comma separated roles taking part in election and clock sync
    #[arg(long, value_delimiter = ',', default_value = "frontend")]
    coordinating_roles: Vec<String>,

    /// Every K-th admitted request enters the lottery
    #[arg(long)]
    lottery_enter_frequency: Option<u64>,

    /// Seconds between clock sync rounds
    #[arg(long)]
    clock_sync_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let logger = create_root_logger_for_stdout(format!("{}:{}", cli.role, cli.port));

    let registry = RemoteRegistry::connect(cli.registry, Duration::from_secs(5)).await?;

    let (sink, mut pushes) = ChannelSubscriberSink::new();
    let config = CoordinationConfig {
        replica_id: cli.replica_id,
        role: cli.role,
        coordinating_roles: cli.coordinating_roles,
        ip_addr: cli.ip,
        port: cli.port,
        info_logger: logger.clone(),
        options: CoordinationOptions {
            clock_sync_period: cli.clock_sync_secs.map(Duration::from_secs),
            lottery_enter_frequency: cli.lottery_enter_frequency,
            ..CoordinationOptions::default()
        },
    };
    let coordination = try_create_replica(
        config,
        Arc::new(registry),
        Arc::new(InMemoryScoreBackend::new()),
        Arc::new(sink),
    )
    .await?;

    // No push transport to tablets in this binary. Pushes are only logged.
    let push_logger = logger.clone();
    tokio::spawn(async move {
        while let Some((subscriber, update)) = pushes.recv().await {
            slog::info!(push_logger, "Push for {}@{}: {:?}", subscriber.client_id, subscriber.client_host, update);
        }
    });

    let replica = coordination.replica.clone();
    let election_logger = logger.clone();
    tokio::spawn(async move {
        match replica.start_election().await {
            Ok(()) => slog::info!(election_logger, "Startup election done: {:?}", replica.coordinator_name()),
            Err(e) => slog::error!(election_logger, "Startup election failed: {}", e),
        }
    });

    tokio::signal::ctrl_c().await?;
    slog::info!(logger, "Shutting down");
    coordination.shutdown();

    Ok(())
}
