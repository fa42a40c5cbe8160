/// One peer's answer to a time poll.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct TimeSample {
    /// Peer's wall clock plus its current offset, as reported.
    pub(crate) peer_time_ms: i64,
    pub(crate) round_trip_ms: i64,
}

/// Average of the reported times, each pushed forward by half its round trip to account for
/// transmission delay. None if nobody answered.
pub(crate) fn corrected_average(samples: &[TimeSample]) -> Option<i64> {
    if samples.is_empty() {
        return None;
    }

    let sum: i64 = samples
        .iter()
        .map(|sample| sample.peer_time_ms + sample.round_trip_ms / 2)
        .sum();

    Some(sum / samples.len() as i64)
}

/// Offset each peer must adopt so its clock reads the corrected average. Same order as
/// `samples`.
pub(crate) fn offsets(samples: &[TimeSample]) -> Option<Vec<i64>> {
    let average = corrected_average(samples)?;

    Some(samples.iter().map(|sample| average - sample.peer_time_ms).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(peer_time_ms: i64, round_trip_ms: i64) -> TimeSample {
        TimeSample {
            peer_time_ms,
            round_trip_ms,
        }
    }

    #[test]
    fn no_samples_no_average() {
        assert_eq!(corrected_average(&[]), None);
        assert_eq!(offsets(&[]), None);
    }

    #[test]
    fn average_without_delay() {
        let samples = vec![sample(1_000, 0), sample(3_000, 0)];
        assert_eq!(corrected_average(&samples), Some(2_000));
        assert_eq!(offsets(&samples), Some(vec![1_000, -1_000]));
    }

    #[test]
    fn half_round_trip_is_added() {
        // (1000 + 50) + (2000 + 150) = 3200 / 2
        let samples = vec![sample(1_000, 100), sample(2_000, 300)];
        assert_eq!(corrected_average(&samples), Some(1_600));
        assert_eq!(offsets(&samples), Some(vec![600, -400]));
    }

    #[test]
    fn odd_round_trip_truncates() {
        assert_eq!(corrected_average(&[sample(1_000, 3)]), Some(1_001));
    }

    #[test]
    fn single_peer_converges_on_itself() {
        assert_eq!(offsets(&[sample(5_000, 0)]), Some(vec![0]));
    }
}
