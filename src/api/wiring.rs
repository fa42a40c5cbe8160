use crate::api::options::CoordinationOptionsValidated;
use crate::api::{CoordinationOptions, FrontendService, ScoreBackend, SubscriberSink};
use crate::discovery::{Discovery, DiscoveryError, InMemoryRegistry};
use crate::replica::{
    GrpcPeerNetwork, RealClock, Replica, ReplicaConfig, ReplicaHandle, ReplicaId, ReplicaIdentity,
};
use crate::server::{self, FrontendRpcServer, RegistryRpcServer, RpcServer, RpcServerShutdownHandle};
use std::convert::TryFrom;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

pub struct CoordinationConfig {
    /// Assigned replica id. A random one is drawn when None.
    pub replica_id: Option<u32>,
    pub role: String,
    /// Roles taking part in election and clock sync. The replica's own role is always included.
    pub coordinating_roles: Vec<String>,
    pub ip_addr: Ipv4Addr,
    pub port: u16,
    pub info_logger: slog::Logger,
    pub options: CoordinationOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum ReplicaCreationError {
    #[error("Illegal options for configuring replica: {0}")]
    IllegalOptions(String),
    #[error("Replica id {0} is out of range")]
    InvalidReplicaId(u32),
    #[error("Failed to register with the registry")]
    Registration(#[from] DiscoveryError),
}

/// CoordinationReplica owns everything one replica process runs. Dropping it stops the RPC
/// server, and with it the replica.
pub struct CoordinationReplica {
    pub replica: ReplicaHandle,
    pub frontend: FrontendService,
    server_shutdown_handle: RpcServerShutdownHandle,
}

impl CoordinationReplica {
    pub fn shutdown(self) {
        self.server_shutdown_handle.shutdown();
    }
}

/// Registers the replica and starts serving peer and client RPCs on one port. No election is
/// run: call `replica.start_election()` once the process is ready.
pub async fn try_create_replica(
    config: CoordinationConfig,
    discovery: Arc<dyn Discovery>,
    backend: Arc<dyn ScoreBackend>,
    sink: Arc<dyn SubscriberSink>,
) -> Result<CoordinationReplica, ReplicaCreationError> {
    let options = CoordinationOptionsValidated::try_from(config.options)
        .map_err(|e| ReplicaCreationError::IllegalOptions(e.to_string()))?;

    let replica_id = match config.replica_id {
        Some(id) => ReplicaId::new(id).ok_or(ReplicaCreationError::InvalidReplicaId(id))?,
        None => ReplicaId::random(),
    };
    let identity = ReplicaIdentity::new(replica_id, config.role, config.ip_addr, config.port);
    let root_logger = config
        .info_logger
        .new(slog::o!("Replica" => identity.name()));

    let mut coordinating_roles = config.coordinating_roles;
    if !coordinating_roles.iter().any(|role| role == identity.role()) {
        coordinating_roles.push(identity.role().to_string());
    }

    discovery.register(identity.server_detail()).await?;
    slog::info!(root_logger, "Registered as {} at {}", identity.name(), identity.socket_addr());

    let network = GrpcPeerNetwork::new(
        root_logger.clone(),
        options.peer_rpc_timeout,
        options.election_rpc_timeout,
    );
    let socket_addr = identity.socket_addr();
    let replica = ReplicaHandle::new(Replica::new(ReplicaConfig {
        logger: root_logger.clone(),
        identity,
        coordinating_roles,
        discovery,
        network: Arc::new(network),
        wall_clock: Arc::new(RealClock),
        clock_sync_period: options.clock_sync_period,
        lottery_enter_frequency: options.lottery_enter_frequency,
    }));

    let frontend = FrontendService::new(root_logger.clone(), replica.clone(), backend, sink);

    let (server_shutdown_handle, server_shutdown_signal) = server::shutdown_signal();
    let replica_server = RpcServer::new(root_logger.clone(), replica.downgrade());
    let frontend_server = FrontendRpcServer::new(root_logger, frontend.clone());
    tokio::spawn(replica_server.run(frontend_server, socket_addr, server_shutdown_signal));

    Ok(CoordinationReplica {
        replica,
        frontend,
        server_shutdown_handle,
    })
}

/// RegistryServer keeps a registry served until it is dropped or shut down.
pub struct RegistryServer {
    server_shutdown_handle: RpcServerShutdownHandle,
}

impl RegistryServer {
    pub fn shutdown(self) {
        self.server_shutdown_handle.shutdown();
    }
}

pub fn start_registry_server(
    logger: slog::Logger,
    socket_addr: SocketAddr,
    registry: InMemoryRegistry,
) -> RegistryServer {
    let (server_shutdown_handle, server_shutdown_signal) = server::shutdown_signal();
    let registry_server = RegistryRpcServer::new(logger, registry);
    tokio::spawn(registry_server.run(socket_addr, server_shutdown_signal));

    RegistryServer { server_shutdown_handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ChannelSubscriberSink, InMemoryScoreBackend};
    use crate::replica::test_logger;
    use tokio::time::Duration;

    async fn create_replicas(port_base: u16, replica_ids: &[u32]) -> Vec<CoordinationReplica> {
        let registry: Arc<dyn Discovery> = Arc::new(InMemoryRegistry::new());
        let mut replicas = Vec::with_capacity(replica_ids.len());
        for (i, replica_id) in replica_ids.iter().enumerate() {
            let config = CoordinationConfig {
                replica_id: Some(*replica_id),
                role: "frontend".to_string(),
                coordinating_roles: vec!["frontend".to_string()],
                ip_addr: Ipv4Addr::LOCALHOST,
                port: port_base + i as u16,
                info_logger: test_logger(),
                options: CoordinationOptions::default(),
            };
            let (sink, _pushes) = ChannelSubscriberSink::new();
            let replica = try_create_replica(
                config,
                registry.clone(),
                Arc::new(InMemoryScoreBackend::new()),
                Arc::new(sink),
            )
            .await
            .unwrap();
            replicas.push(replica);
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        replicas
    }

    #[tokio::test]
    async fn coordinator_pushes_berkeley_offsets_over_grpc() {
        let replicas = create_replicas(5700, &[1, 2, 3]).await;
        replicas[0]
            .replica
            .downgrade()
            .upgrade()
            .unwrap()
            .handle_set_clock_offset(200_000);

        for replica in replicas.iter() {
            tokio::time::timeout(Duration::from_secs(10), replica.replica.start_election())
                .await
                .expect("Election should settle")
                .unwrap();
        }
        // One round: the default period keeps a second one out of the window.
        tokio::time::sleep(Duration::from_millis(500)).await;

        // The polled average sits halfway between the skewed and the unskewed follower.
        assert!((replicas[0].replica.clock_offset_ms() + 100_000).abs() < 1_000);
        assert!((replicas[1].replica.clock_offset_ms() - 100_000).abs() < 1_000);
        assert_eq!(replicas[2].replica.clock_offset_ms(), 0);
    }
}
