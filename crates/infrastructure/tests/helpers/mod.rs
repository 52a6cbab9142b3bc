mod dns_server_mock;

#[allow(unused_imports)]
pub use dns_server_mock::{a, aaaa, encode_name, mx, ptr, txt, MockAnswer, MockDnsServer};
