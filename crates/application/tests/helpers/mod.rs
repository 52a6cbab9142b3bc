mod mock_ports;

#[allow(unused_imports)]
pub use mock_ports::{MockConfigSource, MockDnsExchanger, MockReverseResolver};
