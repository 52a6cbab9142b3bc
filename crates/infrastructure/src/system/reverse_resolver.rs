use super::hosts_file::HostsFileReader;
use async_trait::async_trait;
use dnsdump_application::ports::{DnsExchanger, ResolverConfigSource, ReverseResolver};
use dnsdump_domain::{DomainError, RecordType, ResponseStatus};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Address-to-name lookup the way the platform stub resolver does it:
/// the hosts file first, then PTR queries to the configured nameservers
/// in order until one gives an authoritative answer.
pub struct SystemReverseResolver {
    hosts: HostsFileReader,
    config_source: Arc<dyn ResolverConfigSource>,
    exchanger: Arc<dyn DnsExchanger>,
}

impl SystemReverseResolver {
    pub fn new(
        hosts: HostsFileReader,
        config_source: Arc<dyn ResolverConfigSource>,
        exchanger: Arc<dyn DnsExchanger>,
    ) -> Self {
        Self {
            hosts,
            config_source,
            exchanger,
        }
    }

    /// PTR owner name for `ip`, fully qualified.
    pub fn ip_to_reverse_domain(ip: &IpAddr) -> String {
        match ip {
            IpAddr::V4(ipv4) => {
                let octets = ipv4.octets();
                format!(
                    "{}.{}.{}.{}.in-addr.arpa.",
                    octets[3], octets[2], octets[1], octets[0]
                )
            }
            IpAddr::V6(ipv6) => {
                let mut nibbles = Vec::with_capacity(32);
                for byte in ipv6.octets().iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                format!("{}.ip6.arpa.", nibbles.join("."))
            }
        }
    }
}

#[async_trait]
impl ReverseResolver for SystemReverseResolver {
    async fn lookup_addr(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        let static_names = self.hosts.names_for(ip).await?;
        if !static_names.is_empty() {
            debug!(ip = %ip, names = static_names.len(), "Answered from hosts file");
            return Ok(static_names);
        }

        let config = self.config_source.load().await?;
        let servers = config.servers();
        if servers.is_empty() {
            return Err(DomainError::NoNameservers("resolver configuration".to_string()));
        }

        let reverse_domain = Self::ip_to_reverse_domain(&ip);
        let mut last_error = None;

        for server in &servers {
            debug!(
                ip = %ip,
                reverse_domain = %reverse_domain,
                server = %server,
                "Performing PTR lookup"
            );

            match self
                .exchanger
                .exchange(server, &reverse_domain, RecordType::PTR)
                .await
            {
                Ok(response) if response.status == ResponseStatus::NXDomain => {
                    return Err(DomainError::HostNotFound(ip.to_string()));
                }
                Ok(response) if response.status.is_success() => {
                    let names: Vec<String> = response
                        .answers
                        .into_iter()
                        .filter(|a| a.record_type == Some(RecordType::PTR))
                        .map(|a| a.data)
                        .collect();

                    if names.is_empty() {
                        return Err(DomainError::HostNotFound(ip.to_string()));
                    }

                    debug!(ip = %ip, names = names.len(), "PTR lookup successful");
                    return Ok(names);
                }
                Ok(response) => {
                    debug!(server = %server, rcode = %response.status, "PTR lookup refused, trying next server");
                    last_error = Some(DomainError::InvalidDnsResponse(format!(
                        "server {} answered {}",
                        server, response.status
                    )));
                }
                Err(e) => {
                    debug!(server = %server, error = %e, "PTR lookup failed, trying next server");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| DomainError::HostNotFound(ip.to_string())))
    }
}
