use crate::discovery::{Discovery, DiscoveryError, ServerDetail};
use crate::grpc::grpc_registry_client::GrpcRegistryClient;
use crate::grpc::{ProtoLookupReq, ProtoServerDetail};
use crate::replica::ReplicaId;
use std::convert::TryFrom;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Status};

/// RemoteRegistry talks to a registry server over gRPC.
#[derive(Clone)]
pub struct RemoteRegistry {
    inner: GrpcRegistryClient<Channel>,
    rpc_timeout: Duration,
}

impl RemoteRegistry {
    /// Failing to reach the registry here is fatal for a replica.
    pub async fn connect(registry_addr: SocketAddr, rpc_timeout: Duration) -> Result<Self, DiscoveryError> {
        let url = format!("http://{}", registry_addr);
        let endpoint = Endpoint::from_shared(url.clone())
            .map_err(|e| DiscoveryError::Unavailable(format!("Invalid registry uri {}: {}", url, e)))?
            .timeout(rpc_timeout);

        let connection = tokio::time::timeout(rpc_timeout, endpoint.connect())
            .await
            .map_err(|_| DiscoveryError::Unavailable(format!("Timed out connecting to {}", url)))?
            .map_err(|e| DiscoveryError::Unavailable(format!("Failed to connect to {}: {}", url, e)))?;

        Ok(RemoteRegistry {
            inner: GrpcRegistryClient::new(connection),
            rpc_timeout,
        })
    }
}

#[async_trait::async_trait]
impl Discovery for RemoteRegistry {
    async fn register(&self, detail: ServerDetail) -> Result<(), DiscoveryError> {
        let mut client = self.inner.clone();
        tokio::time::timeout(self.rpc_timeout, client.register(ProtoServerDetail::from(detail)))
            .await
            .map_err(|_| DiscoveryError::Unavailable("Timed out calling Register".into()))?
            .map_err(|status| convert_status("", status))?;
        Ok(())
    }

    async fn find_one(&self, role: &str) -> Result<ServerDetail, DiscoveryError> {
        let mut client = self.inner.clone();
        let request = ProtoLookupReq { role: role.to_string() };
        let reply = tokio::time::timeout(self.rpc_timeout, client.lookup(request))
            .await
            .map_err(|_| DiscoveryError::Unavailable("Timed out calling Lookup".into()))?
            .map_err(|status| convert_status(role, status))?;

        ServerDetail::try_from(reply.into_inner())
            .map_err(|e| DiscoveryError::Unavailable(format!("Malformed Lookup reply: {}", e)))
    }

    async fn find_all(&self, role: &str) -> Result<Vec<ServerDetail>, DiscoveryError> {
        let mut client = self.inner.clone();
        let request = ProtoLookupReq { role: role.to_string() };
        let reply = tokio::time::timeout(self.rpc_timeout, client.lookup_all(request))
            .await
            .map_err(|_| DiscoveryError::Unavailable("Timed out calling LookupAll".into()))?
            .map_err(|status| convert_status(role, status))?;

        reply
            .into_inner()
            .servers
            .into_iter()
            .map(|proto| {
                ServerDetail::try_from(proto)
                    .map_err(|e| DiscoveryError::Unavailable(format!("Malformed LookupAll reply: {}", e)))
            })
            .collect()
    }
}

fn convert_status(role: &str, status: Status) -> DiscoveryError {
    match status.code() {
        Code::NotFound => DiscoveryError::NotFound(role.to_string()),
        _ => DiscoveryError::Unavailable(format!("{:?}", status)),
    }
}

// ------- Conversions --------

impl From<ServerDetail> for ProtoServerDetail {
    fn from(detail: ServerDetail) -> Self {
        ProtoServerDetail {
            role: detail.role,
            replica_id: detail.replica_id.as_u32(),
            ip_addr: detail.ip_addr.to_string(),
            port: detail.port as u32,
        }
    }
}

impl TryFrom<ProtoServerDetail> for ServerDetail {
    type Error = String;

    fn try_from(proto: ProtoServerDetail) -> Result<Self, Self::Error> {
        let replica_id =
            ReplicaId::new(proto.replica_id).ok_or_else(|| format!("Replica id {} out of range", proto.replica_id))?;
        let ip_addr = proto
            .ip_addr
            .parse::<Ipv4Addr>()
            .map_err(|e| format!("Bad ip '{}': {}", proto.ip_addr, e))?;
        let port = u16::try_from(proto.port).map_err(|_| format!("Port {} out of range", proto.port))?;

        Ok(ServerDetail {
            role: proto.role,
            replica_id,
            ip_addr,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proto_conversion_rejects_bad_fields() {
        let good = ProtoServerDetail {
            role: "frontend".into(),
            replica_id: 12,
            ip_addr: "10.0.0.7".into(),
            port: 4100,
        };
        let detail = ServerDetail::try_from(good.clone()).unwrap();
        assert_eq!(detail.server_name(), "frontend12");
        assert_eq!(detail.port, 4100);

        let bad_port = ProtoServerDetail {
            port: 70_000,
            ..good.clone()
        };
        assert!(ServerDetail::try_from(bad_port).is_err());

        let bad_ip = ProtoServerDetail {
            ip_addr: "not-an-ip".into(),
            ..good.clone()
        };
        assert!(ServerDetail::try_from(bad_ip).is_err());

        let bad_id = ProtoServerDetail {
            replica_id: u32::MAX,
            ..good
        };
        assert!(ServerDetail::try_from(bad_id).is_err());
    }
}
