use crate::discovery::{Discovery, InMemoryRegistry};
use crate::replica::clock_sync::{mocked_clock, MockClockController};
use crate::replica::peer_network::InProcessNetwork;
use crate::replica::replica::{Replica, ReplicaConfig};
use crate::replica::{ReplicaId, ReplicaIdentity};
use std::net::Ipv4Addr;
use std::num::NonZeroU64;
use std::sync::Arc;
use tokio::time::Duration;

const MAIN_ROLE: &str = "frontend";

/// TestCluster is a set of replicas wired through an in-process network and a shared
/// registry. Replicas of the main role come first in `replicas`, in the order given, followed
/// by replicas of any extra roles.
pub(crate) struct TestCluster {
    pub(crate) network: Arc<InProcessNetwork>,
    pub(crate) replicas: Vec<Arc<Replica>>,
    pub(crate) clock_controllers: Vec<MockClockController>,
}

impl TestCluster {
    pub(crate) fn builder() -> TestClusterBuilder {
        TestClusterBuilder {
            replica_ids: Vec::new(),
            extra_role_replicas: Vec::new(),
            clock_starts: Vec::new(),
            enter_frequency: 100,
        }
    }
}

pub(crate) struct TestClusterBuilder {
    replica_ids: Vec<u32>,
    extra_role_replicas: Vec<(String, u32)>,
    clock_starts: Vec<i64>,
    enter_frequency: u64,
}

impl TestClusterBuilder {
    pub(crate) fn replica_ids(mut self, ids: &[u32]) -> Self {
        self.replica_ids = ids.to_vec();
        self
    }

    pub(crate) fn extra_role_replica(mut self, role: &str, id: u32) -> Self {
        self.extra_role_replicas.push((role.to_string(), id));
        self
    }

    /// Starting wall clock per replica, by position. Missing entries start at 0.
    pub(crate) fn clock_starts(mut self, starts: &[i64]) -> Self {
        self.clock_starts = starts.to_vec();
        self
    }

    pub(crate) fn enter_frequency(mut self, enter_frequency: u64) -> Self {
        self.enter_frequency = enter_frequency;
        self
    }

    pub(crate) async fn build(self) -> TestCluster {
        let registry = InMemoryRegistry::new();
        let network = Arc::new(InProcessNetwork::default());

        let mut coordinating_roles = vec![MAIN_ROLE.to_string()];
        for (role, _) in self.extra_role_replicas.iter() {
            if !coordinating_roles.contains(role) {
                coordinating_roles.push(role.clone());
            }
        }

        let members = self
            .replica_ids
            .iter()
            .map(|id| (MAIN_ROLE.to_string(), *id))
            .chain(self.extra_role_replicas.into_iter());

        let mut replicas = Vec::new();
        let mut clock_controllers = Vec::new();
        for (position, (role, id)) in members.enumerate() {
            let replica_id = ReplicaId::new(id).unwrap();
            let identity = ReplicaIdentity::new(replica_id, role, Ipv4Addr::LOCALHOST, 9000 + position as u16);
            let (clock, controller) = mocked_clock(self.clock_starts.get(position).copied().unwrap_or(0));

            let replica = Replica::new(ReplicaConfig {
                logger: test_logger(),
                identity: identity.clone(),
                coordinating_roles: coordinating_roles.clone(),
                discovery: Arc::new(registry.clone()),
                network: network.clone(),
                wall_clock: Arc::new(clock),
                clock_sync_period: Duration::from_secs(30),
                lottery_enter_frequency: NonZeroU64::new(self.enter_frequency).unwrap(),
            });

            registry.register(identity.server_detail()).await.unwrap();
            network.add(&replica);
            replicas.push(replica);
            clock_controllers.push(controller);
        }

        TestCluster {
            network,
            replicas,
            clock_controllers,
        }
    }
}

pub(crate) fn test_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, slog::o!())
}
