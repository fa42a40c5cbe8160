mod admission;
mod clock_sync;
mod election;
mod identity;
mod logical_clock;
mod lottery;
mod peer_network;
mod replica;
mod replica_api;
#[cfg(test)]
mod test_utils;

pub use clock_sync::RealClock;
pub use clock_sync::WallClock;
pub use election::ElectionRole;
pub use election::ElectionStateChangeListener;
pub use identity::ReplicaId;
pub use identity::ReplicaIdentity;
pub use lottery::DrawOutcome;
pub use replica::ReplicaHandle;
pub use replica_api::AdminError;
pub use replica_api::AdmissionOutcome;
pub use replica_api::ElectionError;

pub(crate) use peer_network::draw_outcome_from_proto;
pub(crate) use peer_network::draw_outcome_to_proto;
pub(crate) use peer_network::GrpcPeerNetwork;
pub(crate) use replica::Replica;
pub(crate) use replica::ReplicaConfig;
pub(crate) use replica::WeakReplicaHandle;
#[cfg(test)]
pub(crate) use test_utils::{test_logger, TestCluster};
