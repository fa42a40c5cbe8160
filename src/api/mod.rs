mod backend;
mod frontend;
mod logging;
mod options;
mod subscriptions;
mod wiring;

pub use backend::BackendError;
pub use backend::InMemoryScoreBackend;
pub use backend::ScoreBackend;
pub use frontend::FrontendError;
pub use frontend::FrontendService;
pub use logging::create_root_logger_for_stdout;
pub use options::CoordinationOptions;
pub use subscriptions::ChannelSubscriberSink;
pub use subscriptions::PushError;
pub use subscriptions::PushUpdate;
pub use subscriptions::Subscriber;
pub use subscriptions::SubscriberSink;
pub use wiring::start_registry_server;
pub use wiring::try_create_replica;
pub use wiring::CoordinationConfig;
pub use wiring::CoordinationReplica;
pub use wiring::RegistryServer;
pub use wiring::ReplicaCreationError;
