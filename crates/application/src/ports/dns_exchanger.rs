use async_trait::async_trait;
use dnsdump_domain::{DomainError, ExchangeResponse, RecordType, ServerAddr};

/// Sends a single recursive query and returns the decoded reply.
///
/// `Err` means the exchange itself failed (transport, timeout, malformed
/// reply). A reply with a failing response code is still `Ok`.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(
        &self,
        server: &ServerAddr,
        name: &str,
        record_type: RecordType,
    ) -> Result<ExchangeResponse, DomainError>;
}
