mod api;
mod discovery;
mod replica;
mod server;
mod grpc {
    include!("../generated/coordination.rs");
}

pub use api::create_root_logger_for_stdout;
pub use api::start_registry_server;
pub use api::try_create_replica;
pub use api::BackendError;
pub use api::ChannelSubscriberSink;
pub use api::CoordinationConfig;
pub use api::CoordinationOptions;
pub use api::CoordinationReplica;
pub use api::FrontendError;
pub use api::FrontendService;
pub use api::InMemoryScoreBackend;
pub use api::PushError;
pub use api::PushUpdate;
pub use api::RegistryServer;
pub use api::ReplicaCreationError;
pub use api::ScoreBackend;
pub use api::Subscriber;
pub use api::SubscriberSink;
pub use discovery::Discovery;
pub use discovery::DiscoveryError;
pub use discovery::InMemoryRegistry;
pub use discovery::RemoteRegistry;
pub use discovery::ServerDetail;
pub use replica::AdminError;
pub use replica::AdmissionOutcome;
pub use replica::DrawOutcome;
pub use replica::ElectionError;
pub use replica::ElectionRole;
pub use replica::ElectionStateChangeListener;
pub use replica::RealClock;
pub use replica::ReplicaHandle;
pub use replica::ReplicaId;
pub use replica::ReplicaIdentity;
pub use replica::WallClock;

// `crate::{root_mod}` holds no code. Just `mod` and `pub use` statements.
// No `mod` statement is `pub`. Exports go through individual `pub use` statements.
