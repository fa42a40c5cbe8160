mod grpc;
#[cfg(test)]
mod in_process;

pub(crate) use grpc::draw_outcome_from_proto;
pub(crate) use grpc::draw_outcome_to_proto;
pub(crate) use grpc::GrpcPeerNetwork;
#[cfg(test)]
pub(crate) use in_process::InProcessNetwork;

use crate::discovery::ServerDetail;
use crate::replica::{DrawOutcome, ReplicaId};
use std::num::NonZeroU64;

#[derive(Debug, thiserror::Error)]
pub(crate) enum PeerCallError {
    #[error("Failed to connect to {peer}: {message}")]
    Connect { peer: String, message: String },
    #[error("{rpc} to {peer} failed: {message}")]
    Rpc {
        rpc: &'static str,
        peer: String,
        message: String,
    },
    #[error("Timed out calling {rpc} on {peer}")]
    Timeout { rpc: &'static str, peer: String },
}

/// PeerNetwork is every outbound call one replica makes to another. A failed call never
/// poisons anything: callers log it and leave that peer out of whatever they were computing.
#[async_trait::async_trait]
pub(crate) trait PeerNetwork: Send + Sync + 'static {
    /// Returns only once the peer has finished its whole sub-election, including its victory
    /// broadcast.
    async fn start_election(&self, peer: &ServerDetail, caller: ReplicaId) -> Result<(), PeerCallError>;

    async fn notify_alive(&self, peer: &ServerDetail, sender: ReplicaId) -> Result<(), PeerCallError>;

    async fn notify_victory(&self, peer: &ServerDetail, leader_name: &str) -> Result<(), PeerCallError>;

    /// Peer's wall clock plus its current offset, in epoch milliseconds.
    async fn get_time(&self, peer: &ServerDetail) -> Result<i64, PeerCallError>;

    async fn set_clock_offset(&self, peer: &ServerDetail, offset_ms: i64) -> Result<(), PeerCallError>;

    /// Returns the peer's clock after it merged `clock`.
    async fn notify_time_stamp(&self, peer: &ServerDetail, clock: u64) -> Result<u64, PeerCallError>;

    async fn add_participant(&self, peer: &ServerDetail, client_id: &str) -> Result<(), PeerCallError>;

    async fn set_lottery_enter_frequency(
        &self,
        peer: &ServerDetail,
        caller: ReplicaId,
        frequency: NonZeroU64,
    ) -> Result<(), PeerCallError>;

    async fn freeze_lottery(&self, peer: &ServerDetail) -> Result<(), PeerCallError>;

    async fn announce_winner(&self, peer: &ServerDetail, outcome: &DrawOutcome) -> Result<(), PeerCallError>;

    async fn get_request_count(&self, peer: &ServerDetail) -> Result<u64, PeerCallError>;
}
