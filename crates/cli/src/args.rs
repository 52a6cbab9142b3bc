use clap::{CommandFactory, Parser};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "dnsdump")]
#[command(version)]
#[command(about = "Dump every common DNS record type for a domain as JSON")]
pub struct Cli {
    /// Domain to look up
    #[arg(long, value_name = "NAME")]
    pub domain: Option<String>,

    /// DNS server as host:port (defaults to the first resolv.conf nameserver)
    #[arg(long, value_name = "HOST:PORT")]
    pub server: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// `reverse <ip>` performs a reverse lookup
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Forward {
        domain: String,
        server: Option<String>,
    },
    Reverse {
        ip: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("--domain is required")]
    MissingDomain,

    #[error("reverse requires an IP address")]
    MissingIp,
}

impl Cli {
    pub fn into_invocation(self) -> Result<Invocation, UsageError> {
        let mut args = self.args.into_iter();

        if args.next().as_deref() == Some("reverse") {
            return match args.next() {
                Some(ip) if !ip.is_empty() => Ok(Invocation::Reverse { ip }),
                _ => Err(UsageError::MissingIp),
            };
        }

        match self.domain {
            Some(domain) if !domain.is_empty() => Ok(Invocation::Forward {
                domain,
                server: self.server.filter(|s| !s.is_empty()),
            }),
            _ => Err(UsageError::MissingDomain),
        }
    }
}

/// Stderr text for a usage error: the message, then clap's usage line.
pub fn usage_message(error: &UsageError) -> String {
    format!("Error: {}\n{}\n", error, Cli::command().render_usage())
}
