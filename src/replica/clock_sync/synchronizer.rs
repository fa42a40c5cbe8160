use crate::discovery::ServerDetail;
use crate::replica::clock_sync::berkeley::{self, TimeSample};
use crate::replica::clock_sync::WallClock;
use crate::replica::replica::Replica;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Weak};
use tokio::time::Duration;

impl Replica {
    /// Spawns the Berkeley loop the first time this replica wins an election. Later wins are
    /// no-ops: the running loop already re-checks coordinatorship every cycle.
    pub(crate) fn start_clock_synchronizer(self: &Arc<Self>) {
        if self.clock_synchronizer_started.swap(true, Ordering::AcqRel) {
            return;
        }

        slog::info!(self.logger, "Starting clock synchronizer every {:?}", self.clock_sync_period);
        let task = ClockSynchronizerTask {
            logger: self.logger.clone(),
            replica: Arc::downgrade(self),
            wall_clock: self.wall_clock.clone(),
            period: self.clock_sync_period,
        };
        tokio::spawn(task.run());
    }

    #[cfg(test)]
    pub(crate) fn clock_synchronizer_running(&self) -> bool {
        self.clock_synchronizer_started.load(Ordering::Acquire)
    }

    /// One Berkeley round: poll every coordinating peer's time, average the answers corrected
    /// for half their round trip, then push each answering peer the offset that brings it to
    /// the average. Peers that fail to answer are left out of the average and get no offset.
    pub(crate) async fn run_clock_sync_cycle(&self) {
        let peers = match self.coordinating_peers().await {
            Ok(peers) => peers,
            Err(e) => {
                slog::warn!(self.logger, "Skipping clock sync cycle: {}", e);
                return;
            }
        };

        let mut polled: Vec<(ServerDetail, TimeSample)> = Vec::with_capacity(peers.len());
        for peer in peers.into_iter() {
            let poll_start = self.wall_clock.now_millis();
            match self.network.get_time(&peer).await {
                Ok(peer_time_ms) => {
                    let round_trip_ms = self.wall_clock.now_millis() - poll_start;
                    polled.push((
                        peer,
                        TimeSample {
                            peer_time_ms,
                            round_trip_ms,
                        },
                    ));
                }
                Err(e) => slog::warn!(self.logger, "Leaving peer out of clock sync: {}", e),
            }
        }

        let samples: Vec<TimeSample> = polled.iter().map(|(_, sample)| *sample).collect();
        let offsets = match berkeley::offsets(&samples) {
            Some(offsets) => offsets,
            None => {
                slog::debug!(self.logger, "No peer answered the time poll");
                return;
            }
        };

        for ((peer, _), offset_ms) in polled.iter().zip(offsets) {
            match self.network.set_clock_offset(peer, offset_ms).await {
                Ok(()) => slog::debug!(self.logger, "Pushed offset {} ms to {}", offset_ms, peer.server_name()),
                Err(e) => slog::warn!(self.logger, "Failed to push clock offset: {}", e),
            }
        }
    }
}

struct ClockSynchronizerTask {
    logger: slog::Logger,
    replica: Weak<Replica>,
    wall_clock: Arc<dyn WallClock>,
    period: Duration,
}

impl ClockSynchronizerTask {
    async fn run(self) {
        loop {
            match self.replica.upgrade() {
                Some(replica) => {
                    if replica.is_coordinator() {
                        replica.run_clock_sync_cycle().await;
                    }
                }
                None => {
                    slog::info!(self.logger, "Replica is gone. Exiting clock synchronizer.");
                    return;
                }
            }

            self.wall_clock.sleep(self.period).await;
        }
    }
}
