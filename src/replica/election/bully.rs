use crate::discovery::ServerDetail;
use crate::replica::replica::Replica;
use crate::replica::{ElectionError, ReplicaId};
use std::sync::Arc;

impl Replica {
    /// Runs one round of the Bully election on this replica.
    ///
    /// `caller` is the lower replica whose challenge started this round, or None when the round
    /// was started locally. The caller gets an "alive" acknowledgment, every higher peer gets a
    /// challenge of its own, and if none of those challenges went through this replica declares
    /// victory. Otherwise it waits, without timeout, for the "alive" from above.
    pub(crate) async fn handle_start_election(self: &Arc<Self>, caller: Option<ReplicaId>) -> Result<(), ElectionError> {
        let my_id = self.identity.replica_id();
        let peers = self.coordinating_peers().await?;
        slog::info!(
            self.logger,
            "Starting election. Caller: {:?}, peers: {:?}",
            caller,
            peers.iter().map(ServerDetail::server_name).collect::<Vec<_>>()
        );

        if peers.iter().any(|peer| peer.replica_id > my_id) {
            self.election_state().transition_to_awaiting_response();
        }

        let mut higher_peer_responded = false;
        for peer in peers.iter() {
            if Some(peer.replica_id) == caller {
                if let Err(e) = self.network.notify_alive(peer, my_id).await {
                    slog::warn!(self.logger, "Failed to acknowledge caller: {}", e);
                }
            } else if peer.replica_id > my_id {
                match self.network.start_election(peer, my_id).await {
                    Ok(()) => higher_peer_responded = true,
                    Err(e) => slog::warn!(self.logger, "Higher peer didn't take the election: {}", e),
                }
            }
        }

        if higher_peer_responded {
            slog::info!(self.logger, "A higher replica took over. Waiting for its acknowledgment.");
            self.alive_signal.wait().await;
            slog::info!(self.logger, "Election settled: {:?}", *self.election_state());
        } else {
            // An "alive" may have come in before its sender's challenge failed.
            self.alive_signal.reset();
            self.declare_victory(&peers).await;
        }

        Ok(())
    }

    async fn declare_victory(self: &Arc<Self>, peers: &[ServerDetail]) {
        let my_name = self.identity.name();
        slog::info!(self.logger, "Won the election. Announcing {} as coordinator.", my_name);

        self.handle_notify_victory(my_name.clone());
        self.start_clock_synchronizer();

        for peer in peers.iter() {
            if let Err(e) = self.network.notify_victory(peer, &my_name).await {
                slog::warn!(self.logger, "Failed to announce victory: {}", e);
            }
        }
    }

    pub(crate) fn handle_notify_alive(&self, sender: ReplicaId) {
        slog::debug!(self.logger, "Alive from {:?}", sender);
        self.alive_signal.signal();
    }

    pub(crate) fn handle_notify_victory(&self, leader_name: String) {
        let mut election_state = self.election_state();
        election_state.record_victory(leader_name);
        slog::info!(self.logger, "New coordinator recorded: {:?}", *election_state);
    }
}

#[cfg(test)]
mod tests {
    use crate::replica::test_utils::TestCluster;
    use crate::replica::ElectionRole;
    use tokio::time::Duration;

    async fn run_startup_elections(cluster: &TestCluster) {
        for replica in cluster.replicas.iter() {
            tokio::time::timeout(Duration::from_secs(5), replica.handle_start_election(None))
                .await
                .expect("Election should settle")
                .expect("Discovery should not fail");
        }
    }

    fn leaders(cluster: &TestCluster) -> Vec<String> {
        cluster
            .replicas
            .iter()
            .filter(|replica| replica.election_state().role() == ElectionRole::Leader)
            .map(|replica| replica.identity().name())
            .collect()
    }

    #[tokio::test]
    async fn single_replica_elects_itself() {
        let cluster = TestCluster::builder().replica_ids(&[4]).build().await;

        run_startup_elections(&cluster).await;

        assert_eq!(leaders(&cluster), vec!["frontend4".to_string()]);
        assert!(cluster.replicas[0].is_coordinator());
    }

    #[tokio::test]
    async fn highest_id_wins_regardless_of_start_order() {
        let cluster = TestCluster::builder().replica_ids(&[17, 3, 250, 42]).build().await;

        run_startup_elections(&cluster).await;

        assert_eq!(leaders(&cluster), vec!["frontend250".to_string()]);
        for replica in cluster.replicas.iter() {
            let election_state = replica.election_state();
            assert_eq!(election_state.coordinator_name(), Some("frontend250"));
            if replica.identity().replica_id().as_u32() != 250 {
                assert_eq!(election_state.role(), ElectionRole::Follower);
            }
        }
    }

    #[tokio::test]
    async fn lowest_replica_alone_triggers_the_whole_election() {
        let cluster = TestCluster::builder().replica_ids(&[1, 2, 3]).build().await;

        tokio::time::timeout(Duration::from_secs(5), cluster.replicas[0].handle_start_election(None))
            .await
            .expect("Election should settle")
            .unwrap();

        assert_eq!(leaders(&cluster), vec!["frontend3".to_string()]);
        assert_eq!(cluster.replicas[0].election_state().role(), ElectionRole::Follower);
        assert_eq!(cluster.replicas[1].election_state().role(), ElectionRole::Follower);
    }

    #[tokio::test]
    async fn unreachable_highest_replica_is_skipped() {
        let cluster = TestCluster::builder().replica_ids(&[5, 9, 30]).build().await;
        cluster.network.disconnect(&cluster.replicas[2]);

        for replica in cluster.replicas[..2].iter() {
            replica.handle_start_election(None).await.unwrap();
        }

        assert_eq!(leaders(&cluster), vec!["frontend9".to_string()]);
        assert_eq!(cluster.replicas[0].election_state().coordinator_name(), Some("frontend9"));
    }

    #[tokio::test]
    async fn victory_without_wait_clears_stale_alive() {
        let cluster = TestCluster::builder().replica_ids(&[1, 2]).build().await;
        let lower = &cluster.replicas[0];

        // "alive" from 2 landed, then its challenge failed.
        lower.handle_notify_alive(cluster.replicas[1].identity().replica_id());
        cluster.network.disconnect(&cluster.replicas[1]);
        lower.handle_start_election(None).await.unwrap();

        assert_eq!(lower.election_state().role(), ElectionRole::Leader);
        tokio::time::timeout(Duration::from_millis(20), lower.alive_signal.wait())
            .await
            .expect_err("Stale alive should have been cleared");
    }

    #[tokio::test]
    async fn election_spans_coordinating_roles() {
        let cluster = TestCluster::builder()
            .replica_ids(&[10, 20])
            .extra_role_replica("feed", 15)
            .build()
            .await;

        run_startup_elections(&cluster).await;

        assert_eq!(leaders(&cluster), vec!["frontend20".to_string()]);
        assert_eq!(cluster.replicas[2].identity().role(), "feed");
        assert_eq!(cluster.replicas[2].election_state().role(), ElectionRole::Follower);
    }

    #[tokio::test]
    async fn winner_starts_clock_synchronizer_once() {
        let cluster = TestCluster::builder().replica_ids(&[1, 2]).build().await;

        run_startup_elections(&cluster).await;
        cluster.replicas[1].handle_start_election(None).await.unwrap();

        assert!(cluster.replicas[1].clock_synchronizer_running());
        assert!(!cluster.replicas[0].clock_synchronizer_running());
    }
}
