use crate::discovery::{Discovery, DiscoveryError, ServerDetail};
use rand::seq::SliceRandom;
use std::sync::{Arc, Mutex};

/// InMemoryRegistry is the registry's store. The registry server wraps one, and tests or
/// single-process deployments can hand one directly to every replica.
#[derive(Clone, Default)]
pub struct InMemoryRegistry {
    servers: Arc<Mutex<Vec<ServerDetail>>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching(&self, role: &str) -> Vec<ServerDetail> {
        self.servers
            .lock()
            .expect("InMemoryRegistry mutex guard poison")
            .iter()
            .filter(|server| server.role == role)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl Discovery for InMemoryRegistry {
    async fn register(&self, detail: ServerDetail) -> Result<(), DiscoveryError> {
        self.servers
            .lock()
            .expect("InMemoryRegistry mutex guard poison")
            .push(detail);
        Ok(())
    }

    async fn find_one(&self, role: &str) -> Result<ServerDetail, DiscoveryError> {
        self.matching(role)
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| DiscoveryError::NotFound(role.to_string()))
    }

    async fn find_all(&self, role: &str) -> Result<Vec<ServerDetail>, DiscoveryError> {
        Ok(self.matching(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replica::ReplicaId;
    use std::collections::HashSet;
    use std::net::Ipv4Addr;

    fn detail(role: &str, id: u32) -> ServerDetail {
        ServerDetail {
            role: role.into(),
            replica_id: ReplicaId::new(id).unwrap(),
            ip_addr: Ipv4Addr::LOCALHOST,
            port: 5000 + id as u16,
        }
    }

    #[tokio::test]
    async fn find_all_filters_by_role_in_registration_order() {
        let registry = InMemoryRegistry::new();
        registry.register(detail("frontend", 3)).await.unwrap();
        registry.register(detail("backend", 1)).await.unwrap();
        registry.register(detail("frontend", 2)).await.unwrap();

        let frontends = registry.find_all("frontend").await.unwrap();
        assert_eq!(frontends, vec![detail("frontend", 3), detail("frontend", 2)]);
        assert!(registry.find_all("feed").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_one_without_match_is_not_found() {
        let registry = InMemoryRegistry::new();
        registry.register(detail("backend", 1)).await.unwrap();

        match registry.find_one("frontend").await {
            Err(DiscoveryError::NotFound(role)) => assert_eq!(role, "frontend"),
            other => panic!("Unexpected lookup result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn find_one_eventually_returns_every_match() {
        let registry = InMemoryRegistry::new();
        for id in 1..=3 {
            registry.register(detail("frontend", id)).await.unwrap();
        }

        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(registry.find_one("frontend").await.unwrap().replica_id);
        }
        assert_eq!(seen.len(), 3);
    }

    #[tokio::test]
    async fn stale_entries_are_kept() {
        let registry = InMemoryRegistry::new();
        registry.register(detail("frontend", 1)).await.unwrap();
        registry.register(detail("frontend", 1)).await.unwrap();

        assert_eq!(registry.find_all("frontend").await.unwrap().len(), 2);
    }
}
