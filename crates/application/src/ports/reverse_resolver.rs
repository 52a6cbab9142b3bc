use async_trait::async_trait;
use dnsdump_domain::DomainError;
use std::net::IpAddr;

#[async_trait]
pub trait ReverseResolver: Send + Sync {
    /// All names registered for `ip`, fully qualified.
    async fn lookup_addr(&self, ip: IpAddr) -> Result<Vec<String>, DomainError>;
}
