use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::mpsc;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Subscriber {
    pub client_id: String,
    pub client_host: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PushUpdate {
    CurrentScores { event_name: String, payload: Bytes },
    Results { event_name: String, payload: Bytes },
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to push to {client_id}: {message}")]
pub struct PushError {
    pub client_id: String,
    pub message: String,
}

/// SubscriberSink delivers pushed updates to subscribed clients.
#[async_trait::async_trait]
pub trait SubscriberSink: Send + Sync + 'static {
    async fn push(&self, subscriber: &Subscriber, update: &PushUpdate) -> Result<(), PushError>;
}

/// ChannelSubscriberSink hands every push to a channel, for embedders that own the transport
/// to clients.
pub struct ChannelSubscriberSink {
    sender: mpsc::UnboundedSender<(Subscriber, PushUpdate)>,
}

impl ChannelSubscriberSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(Subscriber, PushUpdate)>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (ChannelSubscriberSink { sender }, receiver)
    }
}

#[async_trait::async_trait]
impl SubscriberSink for ChannelSubscriberSink {
    async fn push(&self, subscriber: &Subscriber, update: &PushUpdate) -> Result<(), PushError> {
        self.sender
            .send((subscriber.clone(), update.clone()))
            .map_err(|_| PushError {
                client_id: subscriber.client_id.clone(),
                message: "receiver dropped".into(),
            })
    }
}

/// Subscriptions maps event name to the clients following it. Clients subscribe in
/// registration order and are pushed to in that order.
#[derive(Default)]
pub(super) struct Subscriptions {
    by_event: Mutex<HashMap<String, Vec<Subscriber>>>,
}

impl Subscriptions {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Re-subscribing a client to the same event updates its host.
    pub(super) fn subscribe(&self, event_name: &str, subscriber: Subscriber) {
        let mut by_event = self.by_event.lock().expect("Subscriptions mutex guard poison");
        let subscribers = by_event.entry(event_name.to_string()).or_insert_with(Vec::new);

        match subscribers
            .iter_mut()
            .find(|existing| existing.client_id == subscriber.client_id)
        {
            Some(existing) => existing.client_host = subscriber.client_host,
            None => subscribers.push(subscriber),
        }
    }

    pub(super) fn subscribers(&self, event_name: &str) -> Vec<Subscriber> {
        self.by_event
            .lock()
            .expect("Subscriptions mutex guard poison")
            .get(event_name)
            .cloned()
            .unwrap_or_default()
    }

    /// Ends the subscription for `event_name`, returning whoever was subscribed.
    pub(super) fn close(&self, event_name: &str) -> Vec<Subscriber> {
        self.by_event
            .lock()
            .expect("Subscriptions mutex guard poison")
            .remove(event_name)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber(client_id: &str, client_host: &str) -> Subscriber {
        Subscriber {
            client_id: client_id.into(),
            client_host: client_host.into(),
        }
    }

    #[test]
    fn subscribe_keeps_one_entry_per_client() {
        let subscriptions = Subscriptions::new();
        subscriptions.subscribe("curling", subscriber("t1", "10.0.0.1"));
        subscriptions.subscribe("curling", subscriber("t2", "10.0.0.2"));
        subscriptions.subscribe("curling", subscriber("t1", "10.0.0.9"));

        assert_eq!(
            subscriptions.subscribers("curling"),
            vec![subscriber("t1", "10.0.0.9"), subscriber("t2", "10.0.0.2")]
        );
        assert!(subscriptions.subscribers("luge").is_empty());
    }

    #[test]
    fn close_ends_the_subscription() {
        let subscriptions = Subscriptions::new();
        subscriptions.subscribe("curling", subscriber("t1", "10.0.0.1"));

        assert_eq!(subscriptions.close("curling"), vec![subscriber("t1", "10.0.0.1")]);
        assert!(subscriptions.subscribers("curling").is_empty());
        assert!(subscriptions.close("curling").is_empty());
    }

    #[tokio::test]
    async fn channel_sink_forwards_pushes() {
        let (sink, mut receiver) = ChannelSubscriberSink::new();
        let update = PushUpdate::CurrentScores {
            event_name: "curling".into(),
            payload: Bytes::from_static(b"3-2"),
        };

        sink.push(&subscriber("t1", "10.0.0.1"), &update).await.unwrap();
        assert_eq!(receiver.recv().await, Some((subscriber("t1", "10.0.0.1"), update.clone())));

        drop(receiver);
        assert!(sink.push(&subscriber("t1", "10.0.0.1"), &update).await.is_err());
    }
}
