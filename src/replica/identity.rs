use crate::discovery::ServerDetail;
use rand::Rng;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Largest id a replica may carry. Ids are non-negative 31-bit integers so that the wire can
/// use any negative value as the "no caller" sentinel.
const MAX_REPLICA_ID: u32 = i32::MAX as u32;

/// ReplicaId is the numeric identity used for Bully election tie-breaking. Higher wins.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ReplicaId(u32);

impl ReplicaId {
    /// Returns None if `id` does not fit in 31 bits.
    pub fn new(id: u32) -> Option<Self> {
        if id <= MAX_REPLICA_ID {
            Some(ReplicaId(id))
        } else {
            None
        }
    }

    /// Draws an id independently at random. Two replicas drawing the same id is possible
    /// (birthday bound: roughly n^2 / 2^32 for n replicas, ~2e-9 for a 3-node cluster) and is
    /// not detected. Use an externally assigned id when that matters.
    pub fn random() -> Self {
        ReplicaId(rand::thread_rng().gen_range(0..=MAX_REPLICA_ID))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Decodes a wire caller id, where any negative value is the local-initiator sentinel.
    pub(crate) fn from_wire_caller(caller_id: i64) -> Option<Self> {
        if caller_id < 0 || caller_id > MAX_REPLICA_ID as i64 {
            None
        } else {
            Some(ReplicaId(caller_id as u32))
        }
    }

    pub(crate) fn into_wire_caller(caller: Option<ReplicaId>) -> i64 {
        match caller {
            Some(id) => id.0 as i64,
            None => -1,
        }
    }
}

impl fmt::Debug for ReplicaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ReplicaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ReplicaIdentity is fixed at process start and never mutated afterwards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplicaIdentity {
    replica_id: ReplicaId,
    role: String,
    ip_addr: Ipv4Addr,
    port: u16,
}

impl ReplicaIdentity {
    pub fn new(replica_id: ReplicaId, role: impl Into<String>, ip_addr: Ipv4Addr, port: u16) -> Self {
        ReplicaIdentity {
            replica_id,
            role: role.into(),
            ip_addr,
            port,
        }
    }

    pub fn replica_id(&self) -> ReplicaId {
        self.replica_id
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Display name is role followed by id, e.g. "frontend1234".
    pub fn name(&self) -> String {
        format!("{}{}", self.role, self.replica_id)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.ip_addr, self.port))
    }

    pub fn server_detail(&self) -> ServerDetail {
        ServerDetail {
            role: self.role.clone(),
            replica_id: self.replica_id,
            ip_addr: self.ip_addr,
            port: self.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_role_then_id() {
        let identity = ReplicaIdentity::new(ReplicaId::new(42).unwrap(), "frontend", Ipv4Addr::LOCALHOST, 9000);
        assert_eq!(identity.name(), "frontend42");
        assert_eq!(identity.server_detail().server_name(), identity.name());
    }

    #[test]
    fn wire_caller_sentinel() {
        assert_eq!(ReplicaId::from_wire_caller(-1), None);
        assert_eq!(ReplicaId::from_wire_caller(7), ReplicaId::new(7));
        assert_eq!(ReplicaId::from_wire_caller(i64::from(u32::MAX)), None);
        assert_eq!(ReplicaId::into_wire_caller(None), -1);
        assert_eq!(ReplicaId::into_wire_caller(ReplicaId::new(7)), 7);
    }

    #[test]
    fn ids_out_of_range_are_rejected() {
        assert!(ReplicaId::new(u32::MAX).is_none());
        assert!(ReplicaId::random().as_u32() <= MAX_REPLICA_ID);
    }
}
