use crate::ports::ResolverConfigSource;
use dnsdump_domain::{DomainError, ServerAddr};
use std::sync::Arc;
use tracing::debug;

/// Picks the server a forward lookup talks to.
///
/// An explicit server always wins and is used as given, even when it is not
/// a usable `host:port`: that surfaces later as a per-query transport error.
/// Otherwise the first nameserver from the system resolver configuration is
/// used.
pub struct SelectServerUseCase {
    config_source: Arc<dyn ResolverConfigSource>,
    source_name: String,
}

impl SelectServerUseCase {
    pub fn new(config_source: Arc<dyn ResolverConfigSource>, source_name: impl Into<String>) -> Self {
        Self {
            config_source,
            source_name: source_name.into(),
        }
    }

    pub async fn execute(&self, explicit: Option<&str>) -> Result<ServerAddr, DomainError> {
        if let Some(server) = explicit.filter(|s| !s.trim().is_empty()) {
            let addr = ServerAddr::verbatim(server);
            debug!(server = %addr, "Using server from command line");
            return Ok(addr);
        }

        let config = self.config_source.load().await?;
        let addr = config
            .primary_server()
            .ok_or_else(|| DomainError::NoNameservers(self.source_name.clone()))?;

        debug!(
            server = %addr,
            configured = config.nameservers.len(),
            "Using first system nameserver"
        );
        Ok(addr)
    }
}
