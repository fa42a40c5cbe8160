use crate::discovery::{DiscoveryError, ServerDetail};
use crate::replica::replica::Replica;
use crate::replica::{AdminError, AdmissionOutcome, DrawOutcome, ReplicaId};
use std::num::NonZeroU64;
use std::sync::atomic::Ordering;

impl Replica {
    /// Orders one client request against every other replica of this role.
    ///
    /// Local admissions are serialized. Each one ticks the local clock, sends it to every peer
    /// and merges the largest clock they send back. The merged value is the request's sequence
    /// number, and a sequence number on a multiple of the enter frequency makes the client a
    /// lottery participant on every replica.
    pub(crate) async fn admit_request(&self, client_id: &str) -> AdmissionOutcome {
        self.request_count.fetch_add(1, Ordering::AcqRel);
        let _admission_guard = self.admission_lock.lock().await;

        let local_clock = self.logical_clock().tick();
        let peers = self.same_role_peers_or_none().await;

        let mut replies = Vec::with_capacity(peers.len());
        for peer in peers.iter().cloned() {
            let network = self.network.clone();
            replies.push(tokio::spawn(async move {
                let reply = network.notify_time_stamp(&peer, local_clock).await;
                (peer, reply)
            }));
        }

        let mut max_peer_clock = 0;
        for reply in replies {
            match reply.await {
                Ok((_, Ok(peer_clock))) => max_peer_clock = max_peer_clock.max(peer_clock),
                Ok((peer, Err(e))) => slog::warn!(
                    self.logger,
                    "Leaving {} out of the time stamp merge: {}",
                    peer.server_name(),
                    e
                ),
                Err(e) => slog::error!(self.logger, "Time stamp task failed: {:?}", e),
            }
        }

        let sequence_number = self.logical_clock().merge(max_peer_clock);

        let entered_lottery = {
            let mut lottery = self.lottery();
            if lottery.admits(sequence_number) {
                lottery.add_participant(client_id.to_string());
                true
            } else {
                false
            }
        };

        if entered_lottery {
            slog::info!(
                self.logger,
                "Client {} entered the lottery at sequence number {}",
                client_id,
                sequence_number
            );
            self.broadcast_participant(client_id, peers);
        }

        AdmissionOutcome {
            sequence_number,
            entered_lottery,
        }
    }

    /// Fire-and-forget: admission doesn't wait for peers to record the participant.
    fn broadcast_participant(&self, client_id: &str, peers: Vec<ServerDetail>) {
        let logger = self.logger.clone();
        let network = self.network.clone();
        let client_id = client_id.to_string();

        tokio::spawn(async move {
            for peer in peers.iter() {
                if let Err(e) = network.add_participant(peer, &client_id).await {
                    slog::warn!(logger, "Failed to replicate participant {}: {}", client_id, e);
                }
            }
        });
    }

    async fn same_role_peers_or_none(&self) -> Vec<ServerDetail> {
        match self.same_role_peers().await {
            Ok(peers) => peers,
            Err(e) => {
                slog::warn!(self.logger, "Admitting without peers: {}", e);
                Vec::new()
            }
        }
    }

    pub(crate) fn handle_notify_time_stamp(&self, clock: u64) -> u64 {
        self.logical_clock().merge(clock)
    }

    pub(crate) fn handle_add_participant(&self, client_id: String) {
        if !self.lottery().add_participant(client_id) {
            slog::debug!(self.logger, "Ignoring participant: draw already latched");
        }
    }

    /// `caller` is None for an administrative call, which is re-broadcast to every same-role
    /// peer carrying this replica's id. A call from a peer is only applied locally.
    pub(crate) async fn handle_set_lottery_enter_frequency(
        &self,
        caller: Option<ReplicaId>,
        frequency: NonZeroU64,
    ) -> Result<(), AdminError> {
        slog::info!(
            self.logger,
            "Lottery enter frequency set to {} by {:?}",
            frequency,
            caller
        );
        self.lottery().set_enter_frequency(frequency);

        if caller.is_some() {
            return Ok(());
        }

        let my_id = self.identity.replica_id();
        for peer in self.same_role_peers().await?.iter() {
            if let Err(e) = self.network.set_lottery_enter_frequency(peer, my_id, frequency).await {
                slog::warn!(self.logger, "Failed to propagate enter frequency: {}", e);
            }
        }

        Ok(())
    }

    pub(crate) fn handle_freeze_lottery(&self) {
        slog::info!(self.logger, "Freezing lottery");
        self.lottery().freeze();
    }

    /// Freezes every replica of this role, draws locally, then hands the outcome to the peers.
    pub(crate) async fn handle_conduct_lottery(&self) -> Result<DrawOutcome, DiscoveryError> {
        let peers = self.same_role_peers().await?;

        self.handle_freeze_lottery();
        for peer in peers.iter() {
            if let Err(e) = self.network.freeze_lottery(peer).await {
                slog::warn!(self.logger, "Failed to freeze peer lottery: {}", e);
            }
        }

        let outcome = self.lottery().conduct_draw(&mut rand::thread_rng());
        slog::info!(self.logger, "Lottery drawn: {:?}", outcome);

        for peer in peers.iter() {
            if let Err(e) = self.network.announce_winner(peer, &outcome).await {
                slog::warn!(self.logger, "Failed to announce lottery outcome: {}", e);
            }
        }

        Ok(outcome)
    }

    /// Latches an outcome drawn elsewhere, unless one is already latched here.
    pub(crate) fn handle_announce_winner(&self, announced: DrawOutcome) -> DrawOutcome {
        let latched = self.lottery().latch_announced(announced);
        slog::info!(self.logger, "Lottery outcome latched: {:?}", latched);
        latched
    }
}

#[cfg(test)]
mod tests {
    use crate::replica::test_utils::TestCluster;
    use crate::replica::DrawOutcome;
    use std::num::NonZeroU64;
    use tokio::time::Duration;

    async fn settle() {
        // Participant broadcast is fire-and-forget.
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn single_replica_admits_every_kth_request() {
        let cluster = TestCluster::builder()
            .replica_ids(&[1])
            .enter_frequency(5)
            .build()
            .await;
        let replica = &cluster.replicas[0];

        let mut admitted = Vec::new();
        for request in 1..=15 {
            let outcome = replica.admit_request(&format!("client-{}", request)).await;
            assert_eq!(outcome.sequence_number, request);
            if outcome.entered_lottery {
                admitted.push(outcome.sequence_number);
            }
        }

        assert_eq!(admitted, vec![5, 10, 15]);
        assert_eq!(
            replica.lottery_participants(),
            vec!["client-10".to_string(), "client-15".into(), "client-5".into()]
        );
    }

    #[tokio::test]
    async fn sequence_numbers_grow_across_replicas() {
        let cluster = TestCluster::builder().replica_ids(&[1, 2, 3]).build().await;

        let mut last = 0;
        for round in 0..9 {
            let replica = &cluster.replicas[round % 3];
            let outcome = replica.admit_request("client").await;
            assert!(outcome.sequence_number > last);
            last = outcome.sequence_number;
        }

        // Every replica merged every admission's clock.
        for replica in cluster.replicas.iter() {
            assert_eq!(replica.logical_clock().as_u64(), last);
        }
    }

    #[tokio::test]
    async fn round_robin_admission_replicates_participants() {
        let cluster = TestCluster::builder()
            .replica_ids(&[1, 2, 3])
            .enter_frequency(3)
            .build()
            .await;

        let mut entered = Vec::new();
        for request in 0..6 {
            let client_id = format!("client-{}", request);
            let outcome = cluster.replicas[request % 3].admit_request(&client_id).await;
            if outcome.entered_lottery {
                entered.push(client_id);
            }
        }
        settle().await;

        assert!(!entered.is_empty());
        entered.sort();
        for replica in cluster.replicas.iter() {
            assert_eq!(replica.lottery_participants(), entered);
        }
    }

    #[tokio::test]
    async fn five_round_robin_requests_admit_exactly_one_client() {
        let cluster = TestCluster::builder()
            .replica_ids(&[1, 2, 3])
            .enter_frequency(5)
            .build()
            .await;

        let mut entered = Vec::new();
        for request in 0..5 {
            let client_id = format!("client-{}", request);
            if cluster.replicas[request % 3].admit_request(&client_id).await.entered_lottery {
                entered.push(client_id);
            }
        }
        settle().await;

        assert_eq!(entered, vec!["client-4".to_string()]);
        for replica in cluster.replicas.iter() {
            assert_eq!(replica.lottery_participants(), entered);
        }
    }

    #[tokio::test]
    async fn announced_outcome_without_freeze_closes_admission() {
        let cluster = TestCluster::builder()
            .replica_ids(&[1, 2])
            .enter_frequency(1)
            .build()
            .await;
        let replica = &cluster.replicas[1];

        // Only the announcement got through, the freeze didn't.
        replica.handle_announce_winner(DrawOutcome::Winner("client-a".into()));
        let outcome = replica.admit_request("late-client").await;
        settle().await;

        assert!(!replica.lottery().is_frozen());
        assert!(!outcome.entered_lottery);
        for replica in cluster.replicas.iter() {
            assert!(replica.lottery_participants().is_empty());
        }
    }

    #[tokio::test]
    async fn unreachable_peer_does_not_block_admission() {
        let cluster = TestCluster::builder().replica_ids(&[1, 2]).build().await;
        cluster.network.disconnect(&cluster.replicas[1]);

        let outcome = tokio::time::timeout(Duration::from_secs(1), cluster.replicas[0].admit_request("client"))
            .await
            .expect("Admission should not hang on an unreachable peer");

        assert_eq!(outcome.sequence_number, 1);
        assert_eq!(cluster.replicas[0].handle_get_request_count(), 1);
    }

    #[tokio::test]
    async fn concurrent_admissions_on_one_replica_get_distinct_numbers() {
        let cluster = TestCluster::builder().replica_ids(&[1, 2]).build().await;
        let replica = cluster.replicas[0].clone();

        let mut tasks = Vec::new();
        for i in 0..10 {
            let replica = replica.clone();
            tasks.push(tokio::spawn(async move { replica.admit_request(&format!("c{}", i)).await }));
        }

        let mut numbers = Vec::new();
        for task in tasks {
            numbers.push(task.await.unwrap().sequence_number);
        }
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), 10);
    }

    #[tokio::test]
    async fn frozen_lottery_admits_nobody() {
        let cluster = TestCluster::builder()
            .replica_ids(&[1])
            .enter_frequency(1)
            .build()
            .await;
        let replica = &cluster.replicas[0];

        replica.handle_freeze_lottery();
        let outcome = replica.admit_request("late-client").await;

        assert!(!outcome.entered_lottery);
        assert!(replica.lottery_participants().is_empty());
    }

    #[tokio::test]
    async fn admin_frequency_change_reaches_same_role_peers_only() {
        let cluster = TestCluster::builder()
            .replica_ids(&[1, 2])
            .extra_role_replica("feed", 3)
            .build()
            .await;

        cluster.replicas[0]
            .handle_set_lottery_enter_frequency(None, NonZeroU64::new(7).unwrap())
            .await
            .unwrap();

        assert_eq!(cluster.replicas[0].lottery().enter_frequency().get(), 7);
        assert_eq!(cluster.replicas[1].lottery().enter_frequency().get(), 7);
        assert_eq!(cluster.replicas[2].lottery().enter_frequency().get(), 100);
    }

    #[tokio::test]
    async fn peer_frequency_change_is_not_rebroadcast() {
        let cluster = TestCluster::builder().replica_ids(&[1, 2]).build().await;
        let caller = cluster.replicas[1].identity().replica_id();

        cluster.replicas[0]
            .handle_set_lottery_enter_frequency(Some(caller), NonZeroU64::new(7).unwrap())
            .await
            .unwrap();

        assert_eq!(cluster.replicas[0].lottery().enter_frequency().get(), 7);
        assert_eq!(cluster.replicas[1].lottery().enter_frequency().get(), 100);
    }

    #[tokio::test]
    async fn conducted_lottery_is_shared_and_final() {
        let cluster = TestCluster::builder()
            .replica_ids(&[1, 2])
            .enter_frequency(1)
            .build()
            .await;

        cluster.replicas[0].admit_request("alice").await;
        cluster.replicas[1].admit_request("bob").await;
        settle().await;

        let outcome = cluster.replicas[0].handle_conduct_lottery().await.unwrap();
        let winner = outcome.winner().map(String::from).expect("Two participants");
        assert!(winner == "alice" || winner == "bob");

        for replica in cluster.replicas.iter() {
            assert!(replica.lottery().is_frozen());
            assert_eq!(replica.lottery().draw_result(), Some(&outcome));
        }

        // Late admissions and later draws change nothing.
        cluster.replicas[1].admit_request("carol").await;
        settle().await;
        assert_eq!(cluster.replicas[1].handle_conduct_lottery().await.unwrap(), outcome);
        assert!(!cluster.replicas[0].lottery_participants().contains(&"carol".to_string()));
    }

    #[tokio::test]
    async fn empty_lottery_draws_no_winner() {
        let cluster = TestCluster::builder().replica_ids(&[1]).build().await;

        let outcome = cluster.replicas[0].handle_conduct_lottery().await.unwrap();

        assert_eq!(outcome, DrawOutcome::NoWinner);
    }

    #[tokio::test]
    async fn announced_outcome_does_not_replace_a_local_draw() {
        let cluster = TestCluster::builder().replica_ids(&[1]).build().await;
        let replica = &cluster.replicas[0];

        let local = replica.handle_conduct_lottery().await.unwrap();
        let latched = replica.handle_announce_winner(DrawOutcome::Winner("someone-else".into()));

        assert_eq!(latched, local);
    }

    #[tokio::test]
    async fn load_statistics_cover_the_role() {
        let cluster = TestCluster::builder().replica_ids(&[1, 2]).build().await;

        assert_eq!(cluster.replicas[0].handle_get_load_statistics().await.unwrap(), vec![0.0, 0.0]);

        for _ in 0..3 {
            cluster.replicas[0].admit_request("client").await;
        }
        cluster.replicas[1].admit_request("client").await;

        let loads = cluster.replicas[1].handle_get_load_statistics().await.unwrap();
        assert_eq!(loads, vec![0.75, 0.25]);
    }
}
