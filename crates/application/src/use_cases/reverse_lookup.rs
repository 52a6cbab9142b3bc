use crate::ports::ReverseResolver;
use dnsdump_domain::DomainError;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const REVERSE_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves an IP address to its hostnames under a fixed deadline.
pub struct ReverseLookupUseCase {
    resolver: Arc<dyn ReverseResolver>,
    timeout: Duration,
}

impl ReverseLookupUseCase {
    pub fn new(resolver: Arc<dyn ReverseResolver>) -> Self {
        Self {
            resolver,
            timeout: REVERSE_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn execute(&self, ip: &str) -> Result<Vec<String>, DomainError> {
        let addr: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(ip.to_string()))?;

        debug!(ip = %addr, timeout_ms = self.timeout.as_millis() as u64, "Reverse lookup");

        let names = tokio::time::timeout(self.timeout, self.resolver.lookup_addr(addr))
            .await
            .map_err(|_| DomainError::QueryTimeout)??;

        if names.is_empty() {
            return Err(DomainError::HostNotFound(addr.to_string()));
        }

        debug!(ip = %addr, names = names.len(), "Reverse lookup complete");
        Ok(names)
    }
}
