mod dns_exchanger;
mod resolver_config_source;
mod reverse_resolver;

pub use dns_exchanger::DnsExchanger;
pub use resolver_config_source::ResolverConfigSource;
pub use reverse_resolver::ReverseResolver;
