pub mod hosts_file;
pub mod resolv_conf;
pub mod reverse_resolver;

pub use hosts_file::{HostsFileReader, HOSTS_PATH};
pub use resolv_conf::{ResolvConfReader, RESOLV_CONF_PATH};
pub use reverse_resolver::SystemReverseResolver;
