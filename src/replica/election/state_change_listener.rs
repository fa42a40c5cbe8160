use crate::replica::ElectionRole;
use tokio::sync::watch;

pub(super) fn new(initial_state: ElectionRole) -> (ElectionStateChangeNotifier, ElectionStateChangeListener) {
    let (snd, rcv) = watch::channel(initial_state);

    (ElectionStateChangeNotifier { snd }, ElectionStateChangeListener { rcv })
}

pub(super) struct ElectionStateChangeNotifier {
    snd: watch::Sender<ElectionRole>,
}

impl ElectionStateChangeNotifier {
    pub(super) fn notify_new_state(&self, new_state: ElectionRole) {
        let _ = self.snd.send(new_state);
    }
}

/// ElectionStateChangeListener follows this replica's election role. It doesn't queue
/// intermediate roles: several changes between two `next()` calls collapse into the latest.
#[derive(Clone)]
pub struct ElectionStateChangeListener {
    rcv: watch::Receiver<ElectionRole>,
}

impl ElectionStateChangeListener {
    pub fn current(&self) -> ElectionRole {
        *self.rcv.borrow()
    }

    /// Waits for the next role change. None once the replica is gone.
    pub async fn next(&mut self) -> Option<ElectionRole> {
        match self.rcv.changed().await {
            Ok(_) => Some(*self.rcv.borrow()),
            Err(_) => None,
        }
    }
}
