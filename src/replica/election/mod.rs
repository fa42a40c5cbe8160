mod alive_signal;
mod bully;
mod election_state;
mod state_change_listener;

pub(crate) use alive_signal::AliveSignal;
pub use election_state::ElectionRole;
pub(crate) use election_state::ElectionState;
pub use state_change_listener::ElectionStateChangeListener;
