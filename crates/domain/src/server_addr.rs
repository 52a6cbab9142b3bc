use crate::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

/// Address of the DNS server queries are sent to.
///
/// A `host:port` value whose host is not an IP literal stays unresolved
/// until a query is actually sent. A user-supplied value that is not
/// `host:port` at all is kept as `Raw` and fails when it is dialled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServerAddr {
    Resolved(SocketAddr),
    Unresolved { hostname: Arc<str>, port: u16 },
    Raw(Arc<str>),
}

impl ServerAddr {
    pub fn from_ip(ip: IpAddr, port: u16) -> Self {
        ServerAddr::Resolved(SocketAddr::new(ip, port))
    }

    /// Accepts any non-empty string; values that do not parse become `Raw`.
    pub fn verbatim(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| ServerAddr::Raw(s.trim().into()))
    }

    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            ServerAddr::Resolved(addr) => Some(*addr),
            ServerAddr::Unresolved { .. } | ServerAddr::Raw(_) => None,
        }
    }

    pub fn port(&self) -> Option<u16> {
        match self {
            ServerAddr::Resolved(addr) => Some(addr.port()),
            ServerAddr::Unresolved { port, .. } => Some(*port),
            ServerAddr::Raw(_) => None,
        }
    }

    /// Returns (hostname, port) if this address is unresolved.
    pub fn unresolved_parts(&self) -> Option<(&str, u16)> {
        match self {
            ServerAddr::Unresolved { hostname, port } => Some((&**hostname, *port)),
            ServerAddr::Resolved(_) | ServerAddr::Raw(_) => None,
        }
    }
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerAddr::Resolved(addr) => write!(f, "{}", addr),
            ServerAddr::Unresolved { hostname, port } => write!(f, "{}:{}", hostname, port),
            ServerAddr::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

fn parse_host_port(s: &str) -> Option<(&str, u16)> {
    if s.starts_with('[') {
        let end = s.find(']')?;
        let host = &s[1..end];
        let rest = &s[end + 1..];
        let port_str = rest.strip_prefix(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    } else {
        let (host, port_str) = s.rsplit_once(':')?;
        // Unbracketed IPv6 literals are ambiguous ("::1:53").
        if host.contains(':') {
            return None;
        }
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    }
}

impl FromStr for ServerAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(ServerAddr::Resolved(addr));
        }
        match parse_host_port(s) {
            Some((host, _)) if host.is_empty() => Err(DomainError::InvalidServerAddress(
                format!("'{}' has an empty host", s),
            )),
            Some((host, port)) => Ok(ServerAddr::Unresolved {
                hostname: host.into(),
                port,
            }),
            None => Err(DomainError::InvalidServerAddress(format!(
                "'{}' is not of the form host:port",
                s
            ))),
        }
    }
}
