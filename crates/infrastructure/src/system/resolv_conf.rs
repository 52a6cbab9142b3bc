use async_trait::async_trait;
use dnsdump_application::ports::ResolverConfigSource;
use dnsdump_domain::{DomainError, ResolverConfig, DEFAULT_DNS_PORT};
use std::net::IpAddr;
use tokio::fs;
use tracing::{debug, warn};

pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// System stub resolver configuration reader (resolv.conf(5)).
pub struct ResolvConfReader {
    path: String,
    port: u16,
}

impl ResolvConfReader {
    pub fn new() -> Self {
        Self::with_path(RESOLV_CONF_PATH)
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            port: DEFAULT_DNS_PORT,
        }
    }

    /// resolv.conf has no port syntax; this overrides the implied 53.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parse(&self, content: &str) -> ResolverConfig {
        // Format:
        // # comment
        // nameserver 192.168.1.1
        // nameserver fe80::1%eth0
        // search example.com
        // options ndots:1

        let mut nameservers = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let mut fields = line.split_whitespace();
            if fields.next() != Some("nameserver") {
                continue;
            }

            let Some(value) = fields.next() else {
                warn!(line = line_num + 1, path = %self.path, "nameserver line without address");
                continue;
            };

            // Zone IDs are not part of IpAddr syntax.
            let addr = value.split('%').next().unwrap_or(value);

            match addr.parse::<IpAddr>() {
                Ok(ip) => nameservers.push(ip),
                Err(e) => {
                    warn!(
                        error = %e,
                        value = value,
                        line = line_num + 1,
                        "Invalid nameserver address in resolver config"
                    );
                }
            }
        }

        debug!(nameservers = nameservers.len(), path = %self.path, "Resolver config parsed");
        ResolverConfig::new(nameservers).with_port(self.port)
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResolverConfigSource for ResolvConfReader {
    async fn load(&self) -> Result<ResolverConfig, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ConfigError(format!("Failed to read {}: {}", self.path, e))
        })?;

        Ok(self.parse(&content))
    }
}
