use crate::discovery::DiscoveryError;
use crate::grpc::grpc_frontend_server::GrpcFrontendServer;
use crate::grpc::grpc_replica_server::{GrpcReplica, GrpcReplicaServer};
use crate::grpc::{
    ProtoAck, ProtoAddParticipantReq, ProtoConductLotteryReq, ProtoDrawResult, ProtoFreezeLotteryReq,
    ProtoGetLoadStatisticsReq, ProtoGetLoadStatisticsResult, ProtoGetRequestCountReq, ProtoGetRequestCountResult,
    ProtoGetTimeReq, ProtoGetTimeResult, ProtoNotifyAliveReq, ProtoNotifyTimeStampReq, ProtoNotifyTimeStampResult,
    ProtoNotifyVictoryReq, ProtoSetClockOffsetReq, ProtoSetLotteryEnterFrequencyReq, ProtoStartElectionReq,
};
use crate::replica::{
    draw_outcome_from_proto, draw_outcome_to_proto, AdminError, ElectionError, Replica, ReplicaId, WeakReplicaHandle,
};
use crate::server::{FrontendRpcServer, RpcServerShutdownSignal};
use std::net::SocketAddr;
use std::num::NonZeroU64;
use std::sync::Arc;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

/// RpcServer is the type that implements the replica-to-replica gRPC interface.
pub struct RpcServer {
    logger: slog::Logger,
    local_replica: WeakReplicaHandle,
}

impl RpcServer {
    pub(crate) fn new(logger: slog::Logger, local_replica: WeakReplicaHandle) -> Self {
        RpcServer { logger, local_replica }
    }

    /// Serves the peer interface and the client interface on the same socket until shutdown.
    pub async fn run(
        self,
        frontend_server: FrontendRpcServer,
        socket_addr: SocketAddr,
        shutdown_signal: RpcServerShutdownSignal,
    ) {
        let logger = self.logger.clone();
        slog::info!(logger, "Listening on '{:?}'", socket_addr);

        // TODO:2 if server port is unavailable, signal back to caller.
        let result = Server::builder()
            .add_service(GrpcReplicaServer::new(self))
            .add_service(GrpcFrontendServer::new(frontend_server))
            .serve_with_shutdown(socket_addr, shutdown_signal)
            .await;

        slog::info!(logger, "Server run() has exited: {:?}", result);
    }

    fn local_replica(&self) -> Result<Arc<Replica>, Status> {
        self.local_replica
            .upgrade()
            .map_err(|e| Status::unavailable(e.to_string()))
    }

    fn convert_enter_frequency_input(
        rpc_request: &ProtoSetLotteryEnterFrequencyReq,
    ) -> Result<(Option<ReplicaId>, NonZeroU64), Status> {
        let frequency = NonZeroU64::new(rpc_request.frequency)
            .ok_or_else(|| Status::invalid_argument("Lottery enter frequency must be positive"))?;

        Ok((ReplicaId::from_wire_caller(rpc_request.caller_id), frequency))
    }

    fn convert_election_error(e: ElectionError) -> Status {
        match e {
            ElectionError::Discovery(e) => Self::convert_discovery_error(e),
        }
    }

    fn convert_admin_error(e: AdminError) -> Status {
        match e {
            AdminError::ZeroEnterFrequency => Status::invalid_argument(e.to_string()),
            AdminError::Discovery(e) => Self::convert_discovery_error(e),
        }
    }

    fn convert_discovery_error(e: DiscoveryError) -> Status {
        Status::unavailable(e.to_string())
    }
}

#[async_trait::async_trait]
impl GrpcReplica for RpcServer {
    async fn start_election(&self, request: Request<ProtoStartElectionReq>) -> Result<Response<ProtoAck>, Status> {
        let rpc_request = request.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let caller = ReplicaId::from_wire_caller(rpc_request.caller_id);
        let replica = self.local_replica()?;
        // Runs detached so a caller that gives up can't cancel this replica's own election.
        let election = tokio::spawn(async move { replica.handle_start_election(caller).await });
        election
            .await
            .map_err(|e| Status::internal(format!("Election task failed: {:?}", e)))?
            .map_err(Self::convert_election_error)?;

        Ok(Response::new(ProtoAck {}))
    }

    async fn notify_alive(&self, request: Request<ProtoNotifyAliveReq>) -> Result<Response<ProtoAck>, Status> {
        let rpc_request = request.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let sender = ReplicaId::new(rpc_request.sender_id)
            .ok_or_else(|| Status::invalid_argument("Sender id is out of range"))?;
        self.local_replica()?.handle_notify_alive(sender);

        Ok(Response::new(ProtoAck {}))
    }

    async fn notify_victory(&self, request: Request<ProtoNotifyVictoryReq>) -> Result<Response<ProtoAck>, Status> {
        let rpc_request = request.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        self.local_replica()?.handle_notify_victory(rpc_request.leader_name);

        Ok(Response::new(ProtoAck {}))
    }

    async fn get_time(&self, _: Request<ProtoGetTimeReq>) -> Result<Response<ProtoGetTimeResult>, Status> {
        let time_ms = self.local_replica()?.handle_get_time();
        Ok(Response::new(ProtoGetTimeResult { time_ms }))
    }

    async fn set_clock_offset(&self, request: Request<ProtoSetClockOffsetReq>) -> Result<Response<ProtoAck>, Status> {
        let rpc_request = request.into_inner();
        self.local_replica()?.handle_set_clock_offset(rpc_request.offset_ms);
        Ok(Response::new(ProtoAck {}))
    }

    async fn notify_time_stamp(
        &self,
        request: Request<ProtoNotifyTimeStampReq>,
    ) -> Result<Response<ProtoNotifyTimeStampResult>, Status> {
        let rpc_request = request.into_inner();
        let merged_clock = self.local_replica()?.handle_notify_time_stamp(rpc_request.clock);
        Ok(Response::new(ProtoNotifyTimeStampResult { merged_clock }))
    }

    async fn add_participant(&self, request: Request<ProtoAddParticipantReq>) -> Result<Response<ProtoAck>, Status> {
        let rpc_request = request.into_inner();
        self.local_replica()?.handle_add_participant(rpc_request.client_id);
        Ok(Response::new(ProtoAck {}))
    }

    async fn set_lottery_enter_frequency(
        &self,
        request: Request<ProtoSetLotteryEnterFrequencyReq>,
    ) -> Result<Response<ProtoAck>, Status> {
        let rpc_request = request.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);

        let (caller, frequency) = Self::convert_enter_frequency_input(&rpc_request)?;
        self.local_replica()?
            .handle_set_lottery_enter_frequency(caller, frequency)
            .await
            .map_err(Self::convert_admin_error)?;

        Ok(Response::new(ProtoAck {}))
    }

    async fn freeze_lottery(&self, _: Request<ProtoFreezeLotteryReq>) -> Result<Response<ProtoAck>, Status> {
        self.local_replica()?.handle_freeze_lottery();
        Ok(Response::new(ProtoAck {}))
    }

    async fn conduct_lottery(&self, _: Request<ProtoConductLotteryReq>) -> Result<Response<ProtoDrawResult>, Status> {
        let outcome = self
            .local_replica()?
            .handle_conduct_lottery()
            .await
            .map_err(Self::convert_discovery_error)?;

        Ok(Response::new(draw_outcome_to_proto(&outcome)))
    }

    async fn announce_winner(&self, request: Request<ProtoDrawResult>) -> Result<Response<ProtoAck>, Status> {
        let announced = draw_outcome_from_proto(request.into_inner());
        self.local_replica()?.handle_announce_winner(announced);
        Ok(Response::new(ProtoAck {}))
    }

    async fn get_load_statistics(
        &self,
        _: Request<ProtoGetLoadStatisticsReq>,
    ) -> Result<Response<ProtoGetLoadStatisticsResult>, Status> {
        let loads = self
            .local_replica()?
            .handle_get_load_statistics()
            .await
            .map_err(Self::convert_discovery_error)?;

        Ok(Response::new(ProtoGetLoadStatisticsResult { loads }))
    }

    async fn get_request_count(
        &self,
        _: Request<ProtoGetRequestCountReq>,
    ) -> Result<Response<ProtoGetRequestCountResult>, Status> {
        let request_count = self.local_replica()?.handle_get_request_count();
        Ok(Response::new(ProtoGetRequestCountResult { request_count }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_caller_is_an_admin_call() {
        let rpc_request = ProtoSetLotteryEnterFrequencyReq {
            caller_id: -1,
            frequency: 5,
        };
        let (caller, frequency) = RpcServer::convert_enter_frequency_input(&rpc_request).unwrap();
        assert_eq!(caller, None);
        assert_eq!(frequency.get(), 5);
    }

    #[test]
    fn zero_frequency_is_invalid() {
        let rpc_request = ProtoSetLotteryEnterFrequencyReq {
            caller_id: 3,
            frequency: 0,
        };
        let status = RpcServer::convert_enter_frequency_input(&rpc_request).unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }
}
