use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Score store is unavailable: {0}")]
    Unavailable(String),
}

/// ScoreBackend is where the frontend reads and writes event data. Payloads are opaque to the
/// coordination layer.
#[async_trait::async_trait]
pub trait ScoreBackend: Send + Sync + 'static {
    async fn results(&self, event_name: &str) -> Result<Option<Bytes>, BackendError>;

    async fn current_scores(&self, event_name: &str) -> Result<Option<Bytes>, BackendError>;

    async fn medal_tally(&self, team_name: &str) -> Result<Option<Bytes>, BackendError>;

    async fn store_results(&self, event_name: &str, payload: Bytes) -> Result<(), BackendError>;

    async fn store_current_scores(&self, event_name: &str, payload: Bytes) -> Result<(), BackendError>;
}

#[derive(Default)]
pub struct InMemoryScoreBackend {
    results: Mutex<HashMap<String, Bytes>>,
    current_scores: Mutex<HashMap<String, Bytes>>,
    medal_tallies: Mutex<HashMap<String, Bytes>>,
}

impl InMemoryScoreBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_medal_tally(&self, team_name: &str, payload: Bytes) {
        self.medal_tallies
            .lock()
            .expect("InMemoryScoreBackend.medal_tallies mutex guard poison")
            .insert(team_name.to_string(), payload);
    }

    fn read(table: &Mutex<HashMap<String, Bytes>>, key: &str) -> Option<Bytes> {
        table
            .lock()
            .expect("InMemoryScoreBackend mutex guard poison")
            .get(key)
            .cloned()
    }

    fn write(table: &Mutex<HashMap<String, Bytes>>, key: &str, payload: Bytes) {
        table
            .lock()
            .expect("InMemoryScoreBackend mutex guard poison")
            .insert(key.to_string(), payload);
    }
}

#[async_trait::async_trait]
impl ScoreBackend for InMemoryScoreBackend {
    async fn results(&self, event_name: &str) -> Result<Option<Bytes>, BackendError> {
        Ok(Self::read(&self.results, event_name))
    }

    async fn current_scores(&self, event_name: &str) -> Result<Option<Bytes>, BackendError> {
        Ok(Self::read(&self.current_scores, event_name))
    }

    async fn medal_tally(&self, team_name: &str) -> Result<Option<Bytes>, BackendError> {
        Ok(Self::read(&self.medal_tallies, team_name))
    }

    async fn store_results(&self, event_name: &str, payload: Bytes) -> Result<(), BackendError> {
        Self::write(&self.results, event_name, payload);
        Ok(())
    }

    async fn store_current_scores(&self, event_name: &str, payload: Bytes) -> Result<(), BackendError> {
        Self::write(&self.current_scores, event_name, payload);
        Ok(())
    }
}
