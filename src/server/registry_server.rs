use crate::discovery::{Discovery, DiscoveryError, InMemoryRegistry, ServerDetail};
use crate::grpc::grpc_registry_server::{GrpcRegistry, GrpcRegistryServer};
use crate::grpc::{ProtoAck, ProtoLookupAllResult, ProtoLookupReq, ProtoServerDetail};
use crate::server::RpcServerShutdownSignal;
use std::convert::TryFrom;
use std::net::SocketAddr;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

/// RegistryRpcServer exposes an in-memory registry to replicas in other processes.
pub struct RegistryRpcServer {
    logger: slog::Logger,
    registry: InMemoryRegistry,
}

impl RegistryRpcServer {
    pub fn new(logger: slog::Logger, registry: InMemoryRegistry) -> Self {
        RegistryRpcServer { logger, registry }
    }

    pub async fn run(self, socket_addr: SocketAddr, shutdown_signal: RpcServerShutdownSignal) {
        let logger = self.logger.clone();
        slog::info!(logger, "Registry listening on '{:?}'", socket_addr);

        let result = Server::builder()
            .add_service(GrpcRegistryServer::new(self))
            .serve_with_shutdown(socket_addr, shutdown_signal)
            .await;

        slog::info!(logger, "Registry run() has exited: {:?}", result);
    }

    fn convert_discovery_error(e: DiscoveryError) -> Status {
        match e {
            DiscoveryError::NotFound(_) => Status::not_found(e.to_string()),
            DiscoveryError::Unavailable(_) => Status::unavailable(e.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl GrpcRegistry for RegistryRpcServer {
    async fn register(&self, request: Request<ProtoServerDetail>) -> Result<Response<ProtoAck>, Status> {
        let detail = ServerDetail::try_from(request.into_inner()).map_err(Status::invalid_argument)?;
        slog::info!(self.logger, "Registering {} at {}", detail.server_name(), detail.socket_addr());

        self.registry
            .register(detail)
            .await
            .map_err(Self::convert_discovery_error)?;

        Ok(Response::new(ProtoAck {}))
    }

    async fn lookup(&self, request: Request<ProtoLookupReq>) -> Result<Response<ProtoServerDetail>, Status> {
        let rpc_request = request.into_inner();
        let detail = self
            .registry
            .find_one(&rpc_request.role)
            .await
            .map_err(Self::convert_discovery_error)?;

        Ok(Response::new(ProtoServerDetail::from(detail)))
    }

    async fn lookup_all(&self, request: Request<ProtoLookupReq>) -> Result<Response<ProtoLookupAllResult>, Status> {
        let rpc_request = request.into_inner();
        let servers = self
            .registry
            .find_all(&rpc_request.role)
            .await
            .map_err(Self::convert_discovery_error)?;

        Ok(Response::new(ProtoLookupAllResult {
            servers: servers.into_iter().map(ProtoServerDetail::from).collect(),
        }))
    }
}
