//! Process discovery. The replica core only ever registers itself and looks peers up by role.
mod registry;
mod remote;

pub use registry::InMemoryRegistry;
pub use remote::RemoteRegistry;

use crate::replica::ReplicaId;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// ServerDetail describes one registered server process.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ServerDetail {
    pub role: String,
    pub replica_id: ReplicaId,
    pub ip_addr: Ipv4Addr,
    pub port: u16,
}

impl ServerDetail {
    pub fn server_name(&self) -> String {
        format!("{}{}", self.role, self.replica_id)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip_addr, self.port))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Registry is unreachable: {0}")]
    Unavailable(String),
    #[error("No server registered for role '{0}'")]
    NotFound(String),
}

/// Discovery is the register/lookup contract of the name-service registry.
///
/// There is no deregistration and no lease expiry. Entries for crashed processes stay for the
/// lifetime of the registry.
#[async_trait::async_trait]
pub trait Discovery: Send + Sync + 'static {
    async fn register(&self, detail: ServerDetail) -> Result<(), DiscoveryError>;

    /// One server of `role`, chosen uniformly at random among current matches.
    async fn find_one(&self, role: &str) -> Result<ServerDetail, DiscoveryError>;

    /// Every server of `role`, in registration order.
    async fn find_all(&self, role: &str) -> Result<Vec<ServerDetail>, DiscoveryError>;
}
