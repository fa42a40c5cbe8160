use crate::discovery::ServerDetail;
use crate::grpc::grpc_replica_client::GrpcReplicaClient;
use crate::grpc::{
    ProtoAddParticipantReq, ProtoDrawResult, ProtoFreezeLotteryReq, ProtoGetRequestCountReq, ProtoGetTimeReq,
    ProtoNotifyAliveReq, ProtoNotifyTimeStampReq, ProtoNotifyVictoryReq, ProtoSetClockOffsetReq,
    ProtoSetLotteryEnterFrequencyReq, ProtoStartElectionReq,
};
use crate::replica::peer_network::{PeerCallError, PeerNetwork};
use crate::replica::{DrawOutcome, ReplicaId};
use std::fmt::Debug;
use std::future::Future;
use std::num::NonZeroU64;
use tokio::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tonic::{Response, Status};

/// GrpcPeerNetwork opens a fresh connection per call. Peers come and go through the registry
/// and there are only a handful of calls per client request.
pub(crate) struct GrpcPeerNetwork {
    logger: slog::Logger,
    rpc_timeout: Duration,
    election_rpc_timeout: Duration,
}

impl GrpcPeerNetwork {
    pub(crate) fn new(logger: slog::Logger, rpc_timeout: Duration, election_rpc_timeout: Duration) -> Self {
        GrpcPeerNetwork {
            logger,
            rpc_timeout,
            election_rpc_timeout,
        }
    }

    async fn connect(&self, peer: &ServerDetail) -> Result<GrpcReplicaClient<Channel>, PeerCallError> {
        let connect_error = |message: String| PeerCallError::Connect {
            peer: peer.server_name(),
            message,
        };

        let url = format!("http://{}", peer.socket_addr());
        // No per-request timeout on the endpoint. Each call is bounded in `call()`, and election
        // challenges get a longer bound than everything else.
        let endpoint = Endpoint::from_shared(url).map_err(|e| connect_error(format!("{:?}", e)))?;

        match tokio::time::timeout(self.rpc_timeout, endpoint.connect()).await {
            Ok(Ok(connection)) => Ok(GrpcReplicaClient::new(connection)),
            Ok(Err(e)) => Err(connect_error(format!("{:?}", e))),
            Err(_) => Err(connect_error("connect timed out".into())),
        }
    }

    async fn call<Req, Rep, F>(
        &self,
        rpc: &'static str,
        peer: &ServerDetail,
        rpc_timeout: Duration,
        rpc_request: Req,
        rpc_future: F,
    ) -> Result<Rep, PeerCallError>
    where
        Req: Debug,
        Rep: Debug,
        F: Future<Output = Result<Response<Rep>, Status>>,
    {
        let logger = self.logger.new(slog::o!("Peer" => peer.server_name(), "Rpc" => rpc));
        slog::debug!(logger, "ClientWire - {:?}", rpc_request);
        let rpc_reply = tokio::time::timeout(rpc_timeout, rpc_future).await;
        slog::debug!(logger, "ClientWire - {:?}", rpc_reply);

        match rpc_reply {
            Ok(Ok(response)) => Ok(response.into_inner()),
            Ok(Err(status)) => Err(PeerCallError::Rpc {
                rpc,
                peer: peer.server_name(),
                message: format!("{:?}: {}", status.code(), status.message()),
            }),
            Err(_timeout) => Err(PeerCallError::Timeout {
                rpc,
                peer: peer.server_name(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl PeerNetwork for GrpcPeerNetwork {
    async fn start_election(&self, peer: &ServerDetail, caller: ReplicaId) -> Result<(), PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoStartElectionReq {
            caller_id: ReplicaId::into_wire_caller(Some(caller)),
        };
        self.call(
            "StartElection",
            peer,
            self.election_rpc_timeout,
            rpc_request.clone(),
            client.start_election(rpc_request),
        )
        .await?;
        Ok(())
    }

    async fn notify_alive(&self, peer: &ServerDetail, sender: ReplicaId) -> Result<(), PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoNotifyAliveReq {
            sender_id: sender.as_u32(),
        };
        self.call(
            "NotifyAlive",
            peer,
            self.rpc_timeout,
            rpc_request.clone(),
            client.notify_alive(rpc_request),
        )
        .await?;
        Ok(())
    }

    async fn notify_victory(&self, peer: &ServerDetail, leader_name: &str) -> Result<(), PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoNotifyVictoryReq {
            leader_name: leader_name.to_string(),
        };
        self.call(
            "NotifyVictory",
            peer,
            self.rpc_timeout,
            rpc_request.clone(),
            client.notify_victory(rpc_request),
        )
        .await?;
        Ok(())
    }

    async fn get_time(&self, peer: &ServerDetail) -> Result<i64, PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoGetTimeReq {};
        let reply = self
            .call(
                "GetTime",
                peer,
                self.rpc_timeout,
                rpc_request.clone(),
                client.get_time(rpc_request),
            )
            .await?;
        Ok(reply.time_ms)
    }

    async fn set_clock_offset(&self, peer: &ServerDetail, offset_ms: i64) -> Result<(), PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoSetClockOffsetReq { offset_ms };
        self.call(
            "SetClockOffset",
            peer,
            self.rpc_timeout,
            rpc_request.clone(),
            client.set_clock_offset(rpc_request),
        )
        .await?;
        Ok(())
    }

    async fn notify_time_stamp(&self, peer: &ServerDetail, clock: u64) -> Result<u64, PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoNotifyTimeStampReq { clock };
        let reply = self
            .call(
                "NotifyTimeStamp",
                peer,
                self.rpc_timeout,
                rpc_request.clone(),
                client.notify_time_stamp(rpc_request),
            )
            .await?;
        Ok(reply.merged_clock)
    }

    async fn add_participant(&self, peer: &ServerDetail, client_id: &str) -> Result<(), PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoAddParticipantReq {
            client_id: client_id.to_string(),
        };
        self.call(
            "AddParticipant",
            peer,
            self.rpc_timeout,
            rpc_request.clone(),
            client.add_participant(rpc_request),
        )
        .await?;
        Ok(())
    }

    async fn set_lottery_enter_frequency(
        &self,
        peer: &ServerDetail,
        caller: ReplicaId,
        frequency: NonZeroU64,
    ) -> Result<(), PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoSetLotteryEnterFrequencyReq {
            caller_id: ReplicaId::into_wire_caller(Some(caller)),
            frequency: frequency.get(),
        };
        self.call(
            "SetLotteryEnterFrequency",
            peer,
            self.rpc_timeout,
            rpc_request.clone(),
            client.set_lottery_enter_frequency(rpc_request),
        )
        .await?;
        Ok(())
    }

    async fn freeze_lottery(&self, peer: &ServerDetail) -> Result<(), PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoFreezeLotteryReq {};
        self.call(
            "FreezeLottery",
            peer,
            self.rpc_timeout,
            rpc_request.clone(),
            client.freeze_lottery(rpc_request),
        )
        .await?;
        Ok(())
    }

    async fn announce_winner(&self, peer: &ServerDetail, outcome: &DrawOutcome) -> Result<(), PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = draw_outcome_to_proto(outcome);
        self.call(
            "AnnounceWinner",
            peer,
            self.rpc_timeout,
            rpc_request.clone(),
            client.announce_winner(rpc_request),
        )
        .await?;
        Ok(())
    }

    async fn get_request_count(&self, peer: &ServerDetail) -> Result<u64, PeerCallError> {
        let mut client = self.connect(peer).await?;
        let rpc_request = ProtoGetRequestCountReq {};
        let reply = self
            .call(
                "GetRequestCount",
                peer,
                self.rpc_timeout,
                rpc_request.clone(),
                client.get_request_count(rpc_request),
            )
            .await?;
        Ok(reply.request_count)
    }
}

pub(crate) fn draw_outcome_to_proto(outcome: &DrawOutcome) -> ProtoDrawResult {
    match outcome {
        DrawOutcome::Winner(winner_id) => ProtoDrawResult {
            has_winner: true,
            winner_id: winner_id.clone(),
        },
        DrawOutcome::NoWinner => ProtoDrawResult {
            has_winner: false,
            winner_id: String::new(),
        },
    }
}

pub(crate) fn draw_outcome_from_proto(rpc_draw: ProtoDrawResult) -> DrawOutcome {
    if rpc_draw.has_winner {
        DrawOutcome::Winner(rpc_draw.winner_id)
    } else {
        DrawOutcome::NoWinner
    }
}
