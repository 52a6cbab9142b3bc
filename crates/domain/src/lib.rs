//! dnsdump domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod lookup_report;
pub mod server_addr;

pub use config::{ResolverConfig, DEFAULT_DNS_PORT};
pub use dns_record::{fqdn, AnswerRecord, ExchangeResponse, RecordType, ResponseStatus};
pub use errors::DomainError;
pub use lookup_report::{LookupReport, RecordOutcome};
pub use server_addr::ServerAddr;
