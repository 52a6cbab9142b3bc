use async_trait::async_trait;
use dnsdump_domain::{DomainError, ResolverConfig};

#[async_trait]
pub trait ResolverConfigSource: Send + Sync {
    async fn load(&self) -> Result<ResolverConfig, DomainError>;
}
