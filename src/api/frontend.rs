use crate::api::backend::{BackendError, ScoreBackend};
use crate::api::subscriptions::{PushUpdate, Subscriber, SubscriberSink, Subscriptions};
use crate::replica::{DrawOutcome, ReplicaHandle};
use bytes::Bytes;
use std::sync::Arc;
use tokio::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("Backend failure")]
    Backend(#[from] BackendError),
}

/// FrontendService is the client-facing side of a frontend replica. Every client call goes
/// through ordered admission before it is answered. Feed updates don't: they come from the
/// data source, not from a client.
#[derive(Clone)]
pub struct FrontendService {
    logger: slog::Logger,
    replica: ReplicaHandle,
    backend: Arc<dyn ScoreBackend>,
    subscriptions: Arc<Subscriptions>,
    sink: Arc<dyn SubscriberSink>,
}

impl FrontendService {
    pub fn new(
        logger: slog::Logger,
        replica: ReplicaHandle,
        backend: Arc<dyn ScoreBackend>,
        sink: Arc<dyn SubscriberSink>,
    ) -> Self {
        FrontendService {
            logger,
            replica,
            backend,
            subscriptions: Arc::new(Subscriptions::new()),
            sink,
        }
    }

    pub fn replica(&self) -> &ReplicaHandle {
        &self.replica
    }

    pub async fn get_results(&self, client_id: &str, event_name: &str) -> Result<Option<Bytes>, FrontendError> {
        self.replica.admit_request(client_id).await;
        Ok(self.backend.results(event_name).await?)
    }

    pub async fn get_current_scores(&self, client_id: &str, event_name: &str) -> Result<Option<Bytes>, FrontendError> {
        self.replica.admit_request(client_id).await;
        Ok(self.backend.current_scores(event_name).await?)
    }

    pub async fn get_medal_tally(&self, client_id: &str, team_name: &str) -> Result<Option<Bytes>, FrontendError> {
        self.replica.admit_request(client_id).await;
        Ok(self.backend.medal_tally(team_name).await?)
    }

    /// Subscribing to an event that already has results pushes them straight away instead of
    /// recording a subscription.
    pub async fn register_subscription(
        &self,
        client_id: &str,
        client_host: &str,
        event_name: &str,
    ) -> Result<(), FrontendError> {
        self.replica.admit_request(client_id).await;

        let subscriber = Subscriber {
            client_id: client_id.to_string(),
            client_host: client_host.to_string(),
        };

        match self.backend.results(event_name).await? {
            Some(payload) => {
                slog::info!(self.logger, "{} subscribed to finished event {}", client_id, event_name);
                let update = PushUpdate::Results {
                    event_name: event_name.to_string(),
                    payload,
                };
                self.push_in_background(vec![subscriber], update);
            }
            None => self.subscriptions.subscribe(event_name, subscriber),
        }

        Ok(())
    }

    pub async fn get_lottery_winner(&self, client_id: &str) -> Option<DrawOutcome> {
        self.replica.admit_request(client_id).await;
        self.replica.lottery_winner()
    }

    pub async fn update_current_scores(&self, event_name: &str, payload: Bytes) -> Result<(), FrontendError> {
        self.backend.store_current_scores(event_name, payload.clone()).await?;

        let subscribers = self.subscriptions.subscribers(event_name);
        let update = PushUpdate::CurrentScores {
            event_name: event_name.to_string(),
            payload,
        };
        self.push_in_background(subscribers, update);
        Ok(())
    }

    /// Results are final: subscribers get them once and their subscription ends.
    pub async fn update_results(&self, event_name: &str, payload: Bytes) -> Result<(), FrontendError> {
        self.backend.store_results(event_name, payload.clone()).await?;

        let subscribers = self.subscriptions.close(event_name);
        let update = PushUpdate::Results {
            event_name: event_name.to_string(),
            payload,
        };
        self.push_in_background(subscribers, update);
        Ok(())
    }

    fn push_in_background(&self, subscribers: Vec<Subscriber>, update: PushUpdate) {
        if subscribers.is_empty() {
            return;
        }

        let logger = self.logger.clone();
        let sink = self.sink.clone();
        tokio::spawn(async move {
            let start = Instant::now();
            let mut delivered = 0;
            for subscriber in subscribers.iter() {
                match sink.push(subscriber, &update).await {
                    Ok(()) => delivered += 1,
                    Err(e) => slog::warn!(logger, "{}", e),
                }
            }

            slog::debug!(
                logger,
                "Pushed to {}/{} subscribers in {:?}",
                delivered,
                subscribers.len(),
                start.elapsed()
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::backend::InMemoryScoreBackend;
    use crate::api::subscriptions::ChannelSubscriberSink;
    use crate::replica::{test_logger, TestCluster};
    use tokio::sync::mpsc;
    use tokio::time::Duration;

    struct Fixture {
        _cluster: TestCluster,
        frontend: FrontendService,
        backend: Arc<InMemoryScoreBackend>,
        pushes: mpsc::UnboundedReceiver<(Subscriber, PushUpdate)>,
    }

    async fn fixture(enter_frequency: u64) -> Fixture {
        let cluster = TestCluster::builder()
            .replica_ids(&[1])
            .enter_frequency(enter_frequency)
            .build()
            .await;
        let backend = Arc::new(InMemoryScoreBackend::new());
        let (sink, pushes) = ChannelSubscriberSink::new();
        let frontend = FrontendService::new(
            test_logger(),
            ReplicaHandle::new(cluster.replicas[0].clone()),
            backend.clone(),
            Arc::new(sink),
        );

        Fixture {
            _cluster: cluster,
            frontend,
            backend,
            pushes,
        }
    }

    async fn next_push(pushes: &mut mpsc::UnboundedReceiver<(Subscriber, PushUpdate)>) -> (Subscriber, PushUpdate) {
        tokio::time::timeout(Duration::from_secs(1), pushes.recv())
            .await
            .expect("Expected a push")
            .expect("Sink channel closed")
    }

    #[tokio::test]
    async fn every_client_call_is_admitted() {
        let f = fixture(100).await;
        f.backend.set_medal_tally("Gaul", Bytes::from_static(b"gold:3"));

        assert_eq!(f.frontend.get_results("t1", "curling").await.unwrap(), None);
        assert_eq!(f.frontend.get_current_scores("t1", "curling").await.unwrap(), None);
        assert_eq!(
            f.frontend.get_medal_tally("t1", "Gaul").await.unwrap(),
            Some(Bytes::from_static(b"gold:3"))
        );
        f.frontend.register_subscription("t1", "10.0.0.1", "curling").await.unwrap();
        assert_eq!(f.frontend.get_lottery_winner("t1").await, None);

        assert_eq!(f.frontend.replica().request_count(), 5);
        assert_eq!(f.frontend.replica().logical_time(), 5);
    }

    #[tokio::test]
    async fn feed_updates_are_not_admitted() {
        let f = fixture(100).await;

        f.frontend
            .update_current_scores("curling", Bytes::from_static(b"1-0"))
            .await
            .unwrap();

        assert_eq!(f.frontend.replica().request_count(), 0);
        assert_eq!(
            f.frontend.get_current_scores("t1", "curling").await.unwrap(),
            Some(Bytes::from_static(b"1-0"))
        );
    }

    #[tokio::test]
    async fn scores_are_pushed_until_results_arrive() {
        let mut f = fixture(100).await;
        f.frontend.register_subscription("t1", "10.0.0.1", "curling").await.unwrap();

        f.frontend
            .update_current_scores("curling", Bytes::from_static(b"1-0"))
            .await
            .unwrap();
        let (subscriber, update) = next_push(&mut f.pushes).await;
        assert_eq!(subscriber.client_id, "t1");
        assert_eq!(
            update,
            PushUpdate::CurrentScores {
                event_name: "curling".into(),
                payload: Bytes::from_static(b"1-0"),
            }
        );

        f.frontend
            .update_results("curling", Bytes::from_static(b"final 3-2"))
            .await
            .unwrap();
        let (_, update) = next_push(&mut f.pushes).await;
        assert!(matches!(update, PushUpdate::Results { .. }));

        // Subscription ended with the results.
        f.frontend
            .update_current_scores("curling", Bytes::from_static(b"stale"))
            .await
            .unwrap();
        tokio::time::timeout(Duration::from_millis(50), f.pushes.recv())
            .await
            .expect_err("Expected no push after results");
    }

    #[tokio::test]
    async fn subscribing_to_finished_event_pushes_results() {
        let mut f = fixture(100).await;
        f.frontend
            .update_results("luge", Bytes::from_static(b"final"))
            .await
            .unwrap();

        f.frontend.register_subscription("t2", "10.0.0.2", "luge").await.unwrap();

        let (subscriber, update) = next_push(&mut f.pushes).await;
        assert_eq!(subscriber.client_host, "10.0.0.2");
        assert_eq!(
            update,
            PushUpdate::Results {
                event_name: "luge".into(),
                payload: Bytes::from_static(b"final"),
            }
        );
    }

    #[tokio::test]
    async fn lottery_winner_after_draw() {
        let f = fixture(1).await;
        f.frontend.get_results("t1", "curling").await.unwrap();

        let outcome = f.frontend.replica().conduct_lottery().await.unwrap();

        assert_eq!(outcome, DrawOutcome::Winner("t1".into()));
        assert_eq!(f.frontend.get_lottery_winner("t9").await, Some(outcome));
    }
}
