use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use dnsdump_application::ports::DnsExchanger;
use dnsdump_domain::{DomainError, ExchangeResponse, RecordType, ServerAddr};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Per send/receive deadline, the usual stub client default.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);

/// Single-query client: UDP first, TCP when the UDP reply is truncated.
pub struct HickoryExchanger {
    timeout: Duration,
}

impl HickoryExchanger {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn resolve(server: &ServerAddr) -> Result<SocketAddr, DomainError> {
        if let Some(addr) = server.socket_addr() {
            return Ok(addr);
        }

        let (hostname, port) = server
            .unresolved_parts()
            .ok_or_else(|| DomainError::TransportFailure {
                server: server.to_string(),
                reason: "missing port in address".to_string(),
            })?;

        let mut addrs = tokio::net::lookup_host((hostname, port))
            .await
            .map_err(|e| DomainError::TransportFailure {
                server: server.to_string(),
                reason: format!("cannot resolve server host: {}", e),
            })?;

        let addr = addrs.next().ok_or_else(|| DomainError::TransportFailure {
            server: server.to_string(),
            reason: "server host has no addresses".to_string(),
        })?;

        debug!(server = %server, resolved = %addr, "Server hostname resolved");
        Ok(addr)
    }

    async fn send_once(
        &self,
        transport: Transport,
        query_id: u16,
        query: &[u8],
    ) -> Result<ExchangeResponse, DomainError> {
        debug!(protocol = transport.protocol_name(), query_id = query_id, "Exchanging query");
        let response = transport.send(query, self.timeout).await?;

        match ResponseParser::response_id(&response.bytes) {
            Some(id) if id == query_id => {}
            other => {
                return Err(DomainError::InvalidDnsResponse(format!(
                    "ID mismatch over {}: sent {}, received {:?}",
                    response.protocol_used, query_id, other
                )));
            }
        }

        ResponseParser::parse(&response.bytes)
    }
}

impl Default for HickoryExchanger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsExchanger for HickoryExchanger {
    async fn exchange(
        &self,
        server: &ServerAddr,
        name: &str,
        record_type: RecordType,
    ) -> Result<ExchangeResponse, DomainError> {
        let addr = Self::resolve(server).await?;
        let (query_id, query) = MessageBuilder::build_query_with_id(name, record_type)?;

        debug!(
            server = %addr,
            name = name,
            record_type = %record_type,
            query_id = query_id,
            "Sending query"
        );

        let response = self.send_once(Transport::udp(addr), query_id, &query).await?;
        if !response.truncated {
            return Ok(response);
        }

        debug!(
            server = %addr,
            record_type = %record_type,
            "UDP response truncated, re-sending over TCP"
        );
        self.send_once(Transport::tcp(addr), query_id, &query).await
    }
}
