use std::convert::TryFrom;
use std::num::NonZeroU64;
use tokio::time::Duration;

#[derive(Clone, Default)]
pub struct CoordinationOptions {
    /// How often the coordinator runs a Berkeley round.
    pub clock_sync_period: Option<Duration>,
    /// Bound on every peer call except election challenges.
    pub peer_rpc_timeout: Option<Duration>,
    /// Bound on an election challenge, which only returns once the whole sub-election above
    /// the callee has settled.
    pub election_rpc_timeout: Option<Duration>,
    /// Every K-th sequence number enters the lottery.
    pub lottery_enter_frequency: Option<u64>,
}

pub(super) struct CoordinationOptionsValidated {
    pub clock_sync_period: Duration,
    pub peer_rpc_timeout: Duration,
    pub election_rpc_timeout: Duration,
    pub lottery_enter_frequency: NonZeroU64,
}

impl CoordinationOptionsValidated {
    fn validate(&self) -> Result<(), &'static str> {
        if self.clock_sync_period == Duration::from_millis(0) {
            return Err("Clock sync period must be positive");
        }
        if self.peer_rpc_timeout == Duration::from_millis(0) {
            return Err("Peer RPC timeout must be positive");
        }
        if self.election_rpc_timeout < self.peer_rpc_timeout {
            return Err("Election RPC timeout must be at least the peer RPC timeout");
        }

        Ok(())
    }
}

impl TryFrom<CoordinationOptions> for CoordinationOptionsValidated {
    type Error = &'static str;

    fn try_from(options: CoordinationOptions) -> Result<Self, Self::Error> {
        let lottery_enter_frequency = NonZeroU64::new(options.lottery_enter_frequency.unwrap_or(100))
            .ok_or("Lottery enter frequency must be positive")?;

        let values = CoordinationOptionsValidated {
            clock_sync_period: options.clock_sync_period.unwrap_or(Duration::from_secs(30)),
            peer_rpc_timeout: options.peer_rpc_timeout.unwrap_or(Duration::from_secs(2)),
            election_rpc_timeout: options.election_rpc_timeout.unwrap_or(Duration::from_secs(10)),
            lottery_enter_frequency,
        };

        values.validate()?;
        Ok(values)
    }
}
