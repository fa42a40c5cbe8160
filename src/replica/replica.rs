use crate::discovery::{Discovery, DiscoveryError, ServerDetail};
use crate::replica::clock_sync::WallClock;
use crate::replica::election::{AliveSignal, ElectionState};
use crate::replica::logical_clock::LamportClock;
use crate::replica::lottery::Lottery;
use crate::replica::peer_network::PeerNetwork;
use crate::replica::replica_api::ReplicaExited;
use crate::replica::{
    AdminError, AdmissionOutcome, DrawOutcome, ElectionError, ElectionRole, ElectionStateChangeListener,
    ReplicaIdentity,
};
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use tokio::time::Duration;

pub(crate) struct ReplicaConfig {
    pub(crate) logger: slog::Logger,
    pub(crate) identity: ReplicaIdentity,
    /// Roles taking part in election and clock sync. Always contains the replica's own role.
    pub(crate) coordinating_roles: Vec<String>,
    pub(crate) discovery: Arc<dyn Discovery>,
    pub(crate) network: Arc<dyn PeerNetwork>,
    pub(crate) wall_clock: Arc<dyn WallClock>,
    pub(crate) clock_sync_period: Duration,
    pub(crate) lottery_enter_frequency: NonZeroU64,
}

/// Replica is one process's coordination state. Every piece has its own lock so that inbound
/// peer calls never wait on a local admission in flight: the admission critical section holds
/// `admission_lock` across its peer calls, while the handlers those peers call back into only
/// ever take `logical_clock` or `lottery` briefly.
pub(crate) struct Replica {
    pub(super) logger: slog::Logger,
    pub(super) identity: ReplicaIdentity,
    pub(super) coordinating_roles: Vec<String>,
    pub(super) discovery: Arc<dyn Discovery>,
    pub(super) network: Arc<dyn PeerNetwork>,
    pub(super) wall_clock: Arc<dyn WallClock>,

    // Election
    election_state: Mutex<ElectionState>,
    election_listener: ElectionStateChangeListener,
    pub(super) alive_signal: AliveSignal,

    // Clock sync
    pub(super) clock_sync_period: Duration,
    pub(super) clock_synchronizer_started: AtomicBool,
    clock_offset_ms: AtomicI64,

    // Admission and lottery
    logical_clock: Mutex<LamportClock>,
    pub(super) admission_lock: tokio::sync::Mutex<()>,
    lottery: Mutex<Lottery>,
    pub(super) request_count: AtomicU64,
}

impl Replica {
    pub(crate) fn new(config: ReplicaConfig) -> Arc<Self> {
        let (election_state, election_listener) = ElectionState::new_idle(config.identity.name());

        Arc::new(Replica {
            logger: config.logger,
            identity: config.identity,
            coordinating_roles: config.coordinating_roles,
            discovery: config.discovery,
            network: config.network,
            wall_clock: config.wall_clock,
            election_state: Mutex::new(election_state),
            election_listener,
            alive_signal: AliveSignal::new(),
            clock_sync_period: config.clock_sync_period,
            clock_synchronizer_started: AtomicBool::new(false),
            clock_offset_ms: AtomicI64::new(0),
            logical_clock: Mutex::new(LamportClock::new(0)),
            admission_lock: tokio::sync::Mutex::new(()),
            lottery: Mutex::new(Lottery::new(config.lottery_enter_frequency)),
            request_count: AtomicU64::new(0),
        })
    }

    pub(super) fn election_state(&self) -> MutexGuard<'_, ElectionState> {
        self.election_state
            .lock()
            .expect("Replica.election_state mutex guard poison")
    }

    pub(super) fn logical_clock(&self) -> MutexGuard<'_, LamportClock> {
        self.logical_clock
            .lock()
            .expect("Replica.logical_clock mutex guard poison")
    }

    pub(super) fn lottery(&self) -> MutexGuard<'_, Lottery> {
        self.lottery.lock().expect("Replica.lottery mutex guard poison")
    }

    pub(crate) fn identity(&self) -> &ReplicaIdentity {
        &self.identity
    }

    pub(super) fn is_me(&self, server: &ServerDetail) -> bool {
        server.replica_id == self.identity.replica_id() && server.role == self.identity.role()
    }

    /// Every replica of every coordinating role, except this one.
    pub(super) async fn coordinating_peers(&self) -> Result<Vec<ServerDetail>, DiscoveryError> {
        let mut peers = Vec::new();
        for role in self.coordinating_roles.iter() {
            let servers = self.discovery.find_all(role).await?;
            peers.extend(servers.into_iter().filter(|server| !self.is_me(server)));
        }

        Ok(peers)
    }

    /// Every replica of this replica's own role, except this one.
    pub(super) async fn same_role_peers(&self) -> Result<Vec<ServerDetail>, DiscoveryError> {
        let servers = self.discovery.find_all(self.identity.role()).await?;
        Ok(servers.into_iter().filter(|server| !self.is_me(server)).collect())
    }

    pub(crate) fn is_coordinator(&self) -> bool {
        self.election_state().is_coordinator()
    }

    /// Sorted snapshot of this replica's copy of the participant set.
    pub(crate) fn lottery_participants(&self) -> Vec<String> {
        let mut participants: Vec<String> = self.lottery().participants().iter().cloned().collect();
        participants.sort();
        participants
    }

    // ------- Clock offset -------

    pub(crate) fn handle_get_time(&self) -> i64 {
        self.wall_clock.now_millis() + self.clock_offset_ms.load(Ordering::Acquire)
    }

    pub(crate) fn handle_set_clock_offset(&self, offset_ms: i64) {
        slog::info!(self.logger, "Adopting clock offset {} ms", offset_ms);
        self.clock_offset_ms.store(offset_ms, Ordering::Release);
    }

    pub(crate) fn clock_offset_ms(&self) -> i64 {
        self.clock_offset_ms.load(Ordering::Acquire)
    }

    // ------- Diagnostics -------

    pub(crate) fn handle_get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::Acquire)
    }

    /// Share of all admitted requests handled by each replica of this role, this one included,
    /// in registry order. Replicas that can't be reached are left out. All zeros while nobody
    /// has handled a request yet.
    pub(crate) async fn handle_get_load_statistics(&self) -> Result<Vec<f64>, DiscoveryError> {
        let replicas = self.discovery.find_all(self.identity.role()).await?;

        let mut counts = Vec::with_capacity(replicas.len());
        for replica in replicas.iter() {
            if self.is_me(replica) {
                counts.push(self.handle_get_request_count());
                continue;
            }

            match self.network.get_request_count(replica).await {
                Ok(count) => counts.push(count),
                Err(e) => slog::warn!(self.logger, "Leaving {} out of load statistics: {}", replica.server_name(), e),
            }
        }

        let total: u64 = counts.iter().sum();
        if total == 0 {
            return Ok(vec![0.0; counts.len()]);
        }

        Ok(counts
            .into_iter()
            .map(|count| count as f64 / total as f64)
            .collect())
    }
}

/// ReplicaHandle is the owning reference to a running replica. The replica lives as long as any
/// handle does.
#[derive(Clone)]
pub struct ReplicaHandle {
    replica: Arc<Replica>,
}

impl ReplicaHandle {
    pub(crate) fn new(replica: Arc<Replica>) -> Self {
        ReplicaHandle { replica }
    }

    pub(crate) fn downgrade(&self) -> WeakReplicaHandle {
        WeakReplicaHandle {
            replica: Arc::downgrade(&self.replica),
        }
    }

    pub fn identity(&self) -> &ReplicaIdentity {
        self.replica.identity()
    }

    /// Runs the startup election as its initiator. Returns once this replica has either won and
    /// broadcast its victory, or heard "alive" from a higher replica.
    pub async fn start_election(&self) -> Result<(), ElectionError> {
        self.replica.handle_start_election(None).await
    }

    pub fn election_role(&self) -> ElectionRole {
        self.replica.election_state().role()
    }

    pub fn coordinator_name(&self) -> Option<String> {
        self.replica.election_state().coordinator_name().map(String::from)
    }

    pub fn is_coordinator(&self) -> bool {
        self.replica.is_coordinator()
    }

    pub fn election_listener(&self) -> ElectionStateChangeListener {
        self.replica.election_listener.clone()
    }

    /// Wall clock plus the offset last pushed by the coordinator, in epoch milliseconds.
    pub fn time_ms(&self) -> i64 {
        self.replica.handle_get_time()
    }

    pub fn clock_offset_ms(&self) -> i64 {
        self.replica.clock_offset_ms()
    }

    pub fn logical_time(&self) -> u64 {
        self.replica.logical_clock().as_u64()
    }

    pub async fn admit_request(&self, client_id: &str) -> AdmissionOutcome {
        self.replica.admit_request(client_id).await
    }

    /// Administrative change of the admission frequency, applied here and re-broadcast to every
    /// replica of this role.
    pub async fn set_lottery_enter_frequency(&self, frequency: u64) -> Result<(), AdminError> {
        let frequency = NonZeroU64::new(frequency).ok_or(AdminError::ZeroEnterFrequency)?;
        self.replica.handle_set_lottery_enter_frequency(None, frequency).await
    }

    pub fn lottery_enter_frequency(&self) -> u64 {
        self.replica.lottery().enter_frequency().get()
    }

    /// Sorted snapshot of this replica's copy of the participant set.
    pub fn lottery_participants(&self) -> Vec<String> {
        self.replica.lottery_participants()
    }

    pub fn is_lottery_frozen(&self) -> bool {
        self.replica.lottery().is_frozen()
    }

    /// Freezes every replica, draws here, then announces the outcome. Repeat calls return the
    /// first outcome.
    pub async fn conduct_lottery(&self) -> Result<DrawOutcome, AdminError> {
        Ok(self.replica.handle_conduct_lottery().await?)
    }

    pub fn lottery_winner(&self) -> Option<DrawOutcome> {
        self.replica.lottery().draw_result().cloned()
    }

    pub fn request_count(&self) -> u64 {
        self.replica.handle_get_request_count()
    }

    pub async fn load_statistics(&self) -> Result<Vec<f64>, AdminError> {
        Ok(self.replica.handle_get_load_statistics().await?)
    }
}

/// WeakReplicaHandle is what servers and background tasks hold, so they never keep a replica
/// alive on their own.
#[derive(Clone)]
pub(crate) struct WeakReplicaHandle {
    replica: Weak<Replica>,
}

impl WeakReplicaHandle {
    pub(crate) fn upgrade(&self) -> Result<Arc<Replica>, ReplicaExited> {
        self.replica.upgrade().ok_or(ReplicaExited)
    }
}
