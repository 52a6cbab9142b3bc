pub mod fetch_records;
pub mod reverse_lookup;
pub mod select_server;

pub use fetch_records::FetchRecordsUseCase;
pub use reverse_lookup::{ReverseLookupUseCase, REVERSE_LOOKUP_TIMEOUT};
pub use select_server::SelectServerUseCase;
