use crate::ServerAddr;
use std::net::IpAddr;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// System stub-resolver settings relevant to picking a query target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub nameservers: Vec<IpAddr>,
    pub port: u16,
}

impl ResolverConfig {
    pub fn new(nameservers: Vec<IpAddr>) -> Self {
        Self {
            nameservers,
            port: DEFAULT_DNS_PORT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// First configured nameserver paired with the configured port.
    pub fn primary_server(&self) -> Option<ServerAddr> {
        self.nameservers
            .first()
            .map(|ip| ServerAddr::from_ip(*ip, self.port))
    }

    /// Every configured nameserver, in file order.
    pub fn servers(&self) -> Vec<ServerAddr> {
        self.nameservers
            .iter()
            .map(|ip| ServerAddr::from_ip(*ip, self.port))
            .collect()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
