pub mod exchanger;
pub mod forwarding;
pub mod transport;

pub use exchanger::{HickoryExchanger, DEFAULT_QUERY_TIMEOUT};
pub use forwarding::{MessageBuilder, RecordTypeMapper, ResponseParser};
