pub mod resolver;

pub use resolver::{ResolverConfig, DEFAULT_DNS_PORT};
