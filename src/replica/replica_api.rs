use crate::discovery::DiscoveryError;

/// Result of admitting one client request through the ordered-admission path.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AdmissionOutcome {
    /// Lamport clock value after merging every reachable peer's reply.
    pub sequence_number: u64,
    /// Whether the sequence number made the client a lottery participant.
    pub entered_lottery: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ElectionError {
    #[error("Failed to look up election participants")]
    Discovery(#[from] DiscoveryError),
}

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Lottery enter frequency must be positive")]
    ZeroEnterFrequency,
    #[error("Failed to look up peer replicas")]
    Discovery(#[from] DiscoveryError),
}

#[derive(Debug, thiserror::Error)]
#[error("Replica has exited")]
pub(crate) struct ReplicaExited;
