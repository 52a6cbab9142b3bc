pub mod record_type;
pub mod response;

pub use record_type::RecordType;
pub use response::{AnswerRecord, ExchangeResponse, ResponseStatus};

/// Returns `name` as a fully-qualified domain name (with trailing dot).
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
