use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::num::NonZeroU64;

/// Result of a lottery draw.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawOutcome {
    Winner(String),
    NoWinner,
}

impl DrawOutcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            DrawOutcome::Winner(id) => Some(id),
            DrawOutcome::NoWinner => None,
        }
    }
}

/// Lottery is this replica's copy of the replicated participant set, plus the admission
/// frequency and the latched draw result.
///
/// The participant set only grows, and only until a draw is latched. Once latched, the
/// outcome never changes.
pub(crate) struct Lottery {
    participants: HashSet<String>,
    enter_frequency: NonZeroU64,
    frozen: bool,
    draw: Option<DrawOutcome>,
}

impl Lottery {
    pub(crate) fn new(enter_frequency: NonZeroU64) -> Self {
        Lottery {
            participants: HashSet::new(),
            enter_frequency,
            frozen: false,
            draw: None,
        }
    }

    /// Returns true if the id was not present before.
    pub(crate) fn add_participant(&mut self, participant_id: String) -> bool {
        if self.draw.is_some() {
            return false;
        }
        self.participants.insert(participant_id)
    }

    /// Whether a request with this admission sequence number enters the lottery here. Nothing
    /// enters once frozen or once a draw is latched, even if the freeze never reached us.
    pub(crate) fn admits(&self, sequence_number: u64) -> bool {
        !self.frozen && self.draw.is_none() && sequence_number % self.enter_frequency.get() == 0
    }

    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
    }

    pub(crate) fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub(crate) fn enter_frequency(&self) -> NonZeroU64 {
        self.enter_frequency
    }

    pub(crate) fn set_enter_frequency(&mut self, enter_frequency: NonZeroU64) {
        self.enter_frequency = enter_frequency;
    }

    pub(crate) fn participants(&self) -> &HashSet<String> {
        &self.participants
    }

    pub(crate) fn draw_result(&self) -> Option<&DrawOutcome> {
        self.draw.as_ref()
    }

    /// First call picks uniformly at random from the current participants and latches the
    /// outcome. Every later call returns the latched outcome without drawing again.
    pub(crate) fn conduct_draw<R: Rng>(&mut self, rng: &mut R) -> DrawOutcome {
        if let Some(latched) = &self.draw {
            return latched.clone();
        }

        let mut snapshot: Vec<&String> = self.participants.iter().collect();
        // HashSet order is arbitrary; sort so the draw only depends on the rng.
        snapshot.sort();
        let outcome = match snapshot.choose(rng) {
            Some(winner) => DrawOutcome::Winner((*winner).clone()),
            None => DrawOutcome::NoWinner,
        };

        self.draw.replace(outcome.clone());
        outcome
    }

    /// Latch an outcome drawn by another replica, unless we already latched our own.
    /// Returns whatever outcome is latched afterwards.
    pub(crate) fn latch_announced(&mut self, announced: DrawOutcome) -> DrawOutcome {
        self.draw.get_or_insert(announced).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lottery(k: u64) -> Lottery {
        Lottery::new(NonZeroU64::new(k).unwrap())
    }

    #[test]
    fn add_participant_is_idempotent() {
        let mut lottery = lottery(5);
        assert!(lottery.add_participant("tablet-1".into()));
        assert!(!lottery.add_participant("tablet-1".into()));
        assert_eq!(lottery.participants().len(), 1);
    }

    #[test]
    fn draw_is_latched() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut lottery = lottery(5);
        for i in 0..10 {
            lottery.add_participant(format!("tablet-{}", i));
        }

        let first = lottery.conduct_draw(&mut rng);
        assert!(first.winner().is_some());
        for _ in 0..20 {
            assert_eq!(lottery.conduct_draw(&mut rng), first);
        }
    }

    #[test]
    fn draw_on_empty_set_has_no_winner() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut lottery = lottery(5);
        assert_eq!(lottery.conduct_draw(&mut rng), DrawOutcome::NoWinner);
        assert_eq!(lottery.conduct_draw(&mut rng), DrawOutcome::NoWinner);
    }

    #[test]
    fn draw_picks_an_actual_participant() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut lottery = lottery(5);
        lottery.add_participant("a".into());
        lottery.add_participant("b".into());

        match lottery.conduct_draw(&mut rng) {
            DrawOutcome::Winner(id) => assert!(id == "a" || id == "b"),
            DrawOutcome::NoWinner => panic!("Expected a winner"),
        }
    }

    #[test]
    fn participant_set_closes_after_draw() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut lottery = lottery(5);
        lottery.add_participant("a".into());
        lottery.conduct_draw(&mut rng);

        assert!(!lottery.add_participant("late".into()));
        assert_eq!(lottery.participants().len(), 1);
    }

    #[test]
    fn admission_multiples_and_freeze() {
        let mut lottery = lottery(5);
        let admitted: Vec<u64> = (1..=15).filter(|seq| lottery.admits(*seq)).collect();
        assert_eq!(admitted, vec![5, 10, 15]);

        lottery.freeze();
        assert!(lottery.is_frozen());
        assert!(!lottery.admits(20));
    }

    #[test]
    fn latched_outcome_admits_nobody_without_freeze() {
        let mut lottery = lottery(5);
        lottery.latch_announced(DrawOutcome::Winner("theirs".into()));

        assert!(!lottery.is_frozen());
        assert!(!lottery.admits(5));
    }

    #[test]
    fn frequency_change_applies_to_next_admission() {
        let mut lottery = lottery(100);
        assert!(!lottery.admits(5));
        lottery.set_enter_frequency(NonZeroU64::new(5).unwrap());
        assert!(lottery.admits(5));
        assert_eq!(lottery.enter_frequency().get(), 5);
    }

    #[test]
    fn announced_outcome_does_not_override_local_draw() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut lottery = lottery(5);
        lottery.add_participant("mine".into());
        let local = lottery.conduct_draw(&mut rng);

        let latched = lottery.latch_announced(DrawOutcome::Winner("theirs".into()));
        assert_eq!(latched, local);

        let mut fresh = self::lottery(5);
        let latched = fresh.latch_announced(DrawOutcome::Winner("theirs".into()));
        assert_eq!(latched, DrawOutcome::Winner("theirs".into()));
        assert_eq!(fresh.conduct_draw(&mut rng), latched);
    }
}
