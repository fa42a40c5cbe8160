use crate::discovery::ServerDetail;
use crate::replica::peer_network::{PeerCallError, PeerNetwork};
use crate::replica::replica::{Replica, WeakReplicaHandle};
use crate::replica::{DrawOutcome, ReplicaHandle, ReplicaId};
use std::collections::{HashMap, HashSet};
use std::num::NonZeroU64;
use std::sync::{Arc, Mutex};

type PeerKey = (String, ReplicaId);

/// InProcessNetwork delivers peer calls by direct method call on replicas living in the same
/// process, so cluster behavior can be tested without sockets.
#[derive(Default)]
pub(crate) struct InProcessNetwork {
    replicas: Mutex<HashMap<PeerKey, WeakReplicaHandle>>,
    disconnected: Mutex<HashSet<PeerKey>>,
}

impl InProcessNetwork {
    pub(crate) fn add(&self, replica: &Arc<Replica>) {
        let handle = ReplicaHandle::new(replica.clone()).downgrade();
        self.replicas
            .lock()
            .expect("InProcessNetwork.replicas mutex guard poison")
            .insert(Self::key_of(replica), handle);
    }

    /// Every call to `replica` fails from now on, as if its process had crashed.
    pub(crate) fn disconnect(&self, replica: &Arc<Replica>) {
        self.disconnected
            .lock()
            .expect("InProcessNetwork.disconnected mutex guard poison")
            .insert(Self::key_of(replica));
    }

    fn key_of(replica: &Arc<Replica>) -> PeerKey {
        let identity = replica.identity();
        (identity.role().to_string(), identity.replica_id())
    }

    fn connect(&self, peer: &ServerDetail) -> Result<Arc<Replica>, PeerCallError> {
        let key = (peer.role.clone(), peer.replica_id);
        let unreachable = |message: &str| PeerCallError::Connect {
            peer: peer.server_name(),
            message: message.to_string(),
        };

        if self
            .disconnected
            .lock()
            .expect("InProcessNetwork.disconnected mutex guard poison")
            .contains(&key)
        {
            return Err(unreachable("disconnected"));
        }

        let handle = self
            .replicas
            .lock()
            .expect("InProcessNetwork.replicas mutex guard poison")
            .get(&key)
            .cloned()
            .ok_or_else(|| unreachable("unknown peer"))?;

        handle.upgrade().map_err(|e| unreachable(&e.to_string()))
    }
}

#[async_trait::async_trait]
impl PeerNetwork for InProcessNetwork {
    async fn start_election(&self, peer: &ServerDetail, caller: ReplicaId) -> Result<(), PeerCallError> {
        let replica = self.connect(peer)?;
        replica
            .handle_start_election(Some(caller))
            .await
            .map_err(|e| PeerCallError::Rpc {
                rpc: "StartElection",
                peer: peer.server_name(),
                message: e.to_string(),
            })
    }

    async fn notify_alive(&self, peer: &ServerDetail, sender: ReplicaId) -> Result<(), PeerCallError> {
        self.connect(peer)?.handle_notify_alive(sender);
        Ok(())
    }

    async fn notify_victory(&self, peer: &ServerDetail, leader_name: &str) -> Result<(), PeerCallError> {
        self.connect(peer)?.handle_notify_victory(leader_name.to_string());
        Ok(())
    }

    async fn get_time(&self, peer: &ServerDetail) -> Result<i64, PeerCallError> {
        Ok(self.connect(peer)?.handle_get_time())
    }

    async fn set_clock_offset(&self, peer: &ServerDetail, offset_ms: i64) -> Result<(), PeerCallError> {
        self.connect(peer)?.handle_set_clock_offset(offset_ms);
        Ok(())
    }

    async fn notify_time_stamp(&self, peer: &ServerDetail, clock: u64) -> Result<u64, PeerCallError> {
        Ok(self.connect(peer)?.handle_notify_time_stamp(clock))
    }

    async fn add_participant(&self, peer: &ServerDetail, client_id: &str) -> Result<(), PeerCallError> {
        self.connect(peer)?.handle_add_participant(client_id.to_string());
        Ok(())
    }

    async fn set_lottery_enter_frequency(
        &self,
        peer: &ServerDetail,
        caller: ReplicaId,
        frequency: NonZeroU64,
    ) -> Result<(), PeerCallError> {
        let replica = self.connect(peer)?;
        replica
            .handle_set_lottery_enter_frequency(Some(caller), frequency)
            .await
            .map_err(|e| PeerCallError::Rpc {
                rpc: "SetLotteryEnterFrequency",
                peer: peer.server_name(),
                message: e.to_string(),
            })
    }

    async fn freeze_lottery(&self, peer: &ServerDetail) -> Result<(), PeerCallError> {
        self.connect(peer)?.handle_freeze_lottery();
        Ok(())
    }

    async fn announce_winner(&self, peer: &ServerDetail, outcome: &DrawOutcome) -> Result<(), PeerCallError> {
        self.connect(peer)?.handle_announce_winner(outcome.clone());
        Ok(())
    }

    async fn get_request_count(&self, peer: &ServerDetail) -> Result<u64, PeerCallError> {
        Ok(self.connect(peer)?.handle_get_request_count())
    }
}
