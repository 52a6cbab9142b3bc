use dnsdump_domain::{fqdn, DomainError};
use std::io::ErrorKind;
use std::net::IpAddr;
use tokio::fs;
use tracing::debug;

pub const HOSTS_PATH: &str = "/etc/hosts";

/// Static host table reader (hosts(5)).
pub struct HostsFileReader {
    path: String,
}

impl HostsFileReader {
    pub fn new() -> Self {
        Self::with_path(HOSTS_PATH)
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Names mapped to `ip`, fully qualified, in file order without duplicates.
    ///
    /// A missing hosts file is treated as empty.
    pub async fn names_for(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path, "No hosts file");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(DomainError::IoError(format!(
                    "Failed to read {}: {}",
                    self.path, e
                )))
            }
        };

        Ok(Self::parse_names(&content, ip))
    }

    pub fn parse_names(content: &str, ip: IpAddr) -> Vec<String> {
        // Format:
        // 127.0.0.1   localhost localhost.localdomain   # comment
        // ::1         ip6-localhost

        let mut names: Vec<String> = Vec::new();

        for line in content.lines() {
            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();

            let Some(addr) = fields.next() else {
                continue;
            };
            let addr = addr.split('%').next().unwrap_or(addr);

            if addr.parse::<IpAddr>().ok() != Some(ip) {
                continue;
            }

            for name in fields {
                let name = fqdn(name);
                if !names.iter().any(|n| n.eq_ignore_ascii_case(&name)) {
                    names.push(name);
                }
            }
        }

        names
    }
}

impl Default for HostsFileReader {
    fn default() -> Self {
        Self::new()
    }
}
