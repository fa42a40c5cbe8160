use crate::replica::election::state_change_listener::{self, ElectionStateChangeNotifier};
use crate::replica::ElectionStateChangeListener;
use std::fmt;

/// Where this replica stands in the Bully election.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ElectionRole {
    /// No election has run yet.
    Idle,
    /// A higher replica answered our challenge; waiting for its "alive" acknowledgment and
    /// the victory broadcast.
    AwaitingResponse,
    Leader,
    Follower,
}

/// ElectionState holds the local role and the last announced coordinator. It has no terminal
/// state: a replica keeps whatever it last won or lost until another election runs.
pub(crate) struct ElectionState {
    my_name: String,
    role: ElectionRole,
    coordinator_name: Option<String>,
    state_change_notifier: ElectionStateChangeNotifier,
}

impl ElectionState {
    pub(crate) fn new_idle(my_name: String) -> (Self, ElectionStateChangeListener) {
        let (notifier, listener) = state_change_listener::new(ElectionRole::Idle);

        let election_state = ElectionState {
            my_name,
            role: ElectionRole::Idle,
            coordinator_name: None,
            state_change_notifier: notifier,
        };

        (election_state, listener)
    }

    pub(crate) fn role(&self) -> ElectionRole {
        self.role
    }

    pub(crate) fn coordinator_name(&self) -> Option<&str> {
        self.coordinator_name.as_deref()
    }

    /// A replica is the coordinator iff the last victory announced its own name.
    pub(crate) fn is_coordinator(&self) -> bool {
        self.coordinator_name.as_deref() == Some(self.my_name.as_str())
    }

    pub(crate) fn transition_to_awaiting_response(&mut self) {
        self.role = ElectionRole::AwaitingResponse;
        self.notify_new_state();
    }

    pub(crate) fn record_victory(&mut self, leader_name: String) {
        self.role = if leader_name == self.my_name {
            ElectionRole::Leader
        } else {
            ElectionRole::Follower
        };
        self.coordinator_name.replace(leader_name);
        self.notify_new_state();
    }

    fn notify_new_state(&self) {
        self.state_change_notifier.notify_new_state(self.role);
    }
}

impl fmt::Debug for ElectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coordinator_name {
            Some(coordinator) => write!(f, "{:?}(Coordinator={})", self.role, coordinator),
            None => write!(f, "{:?}(Coordinator=None)", self.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_without_coordinator() {
        let (state, _listener) = ElectionState::new_idle("frontend7".into());
        assert_eq!(state.role(), ElectionRole::Idle);
        assert_eq!(state.coordinator_name(), None);
        assert!(!state.is_coordinator());
    }

    #[test]
    fn victory_decides_role_by_name() {
        let (mut state, _listener) = ElectionState::new_idle("frontend7".into());

        state.transition_to_awaiting_response();
        assert_eq!(state.role(), ElectionRole::AwaitingResponse);

        state.record_victory("frontend9".into());
        assert_eq!(state.role(), ElectionRole::Follower);
        assert_eq!(state.coordinator_name(), Some("frontend9"));
        assert!(!state.is_coordinator());

        state.record_victory("frontend7".into());
        assert_eq!(state.role(), ElectionRole::Leader);
        assert!(state.is_coordinator());
    }

    #[tokio::test]
    async fn listener_observes_transitions() {
        let (mut state, mut listener) = ElectionState::new_idle("frontend7".into());

        state.record_victory("frontend9".into());
        assert_eq!(listener.next().await, Some(ElectionRole::Follower));

        drop(state);
        assert_eq!(listener.next().await, None);
    }
}
