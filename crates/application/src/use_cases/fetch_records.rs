use crate::ports::DnsExchanger;
use dnsdump_domain::{fqdn, LookupReport, RecordType, ServerAddr};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Queries every record type in [`RecordType::LOOKUP_ORDER`] against one
/// server, one after another, and folds the replies into a [`LookupReport`].
///
/// A failed exchange is recorded under its type and never stops the loop.
/// Replies with a non-success code or no answers are left out of the report.
pub struct FetchRecordsUseCase {
    exchanger: Arc<dyn DnsExchanger>,
}

impl FetchRecordsUseCase {
    pub fn new(exchanger: Arc<dyn DnsExchanger>) -> Self {
        Self { exchanger }
    }

    pub async fn execute(&self, domain: &str, server: &ServerAddr) -> LookupReport {
        let qname = fqdn(domain);
        let mut report = LookupReport::new();

        debug!(domain = %qname, server = %server, "Fetching DNS records");

        for record_type in RecordType::LOOKUP_ORDER {
            match self.exchanger.exchange(server, &qname, record_type).await {
                Err(e) => {
                    warn!(
                        record_type = %record_type,
                        error = %e,
                        "Query failed"
                    );
                    report.insert_error(record_type, e.to_string());
                }
                Ok(response) if !response.has_answers() => {
                    debug!(
                        record_type = %record_type,
                        status = %response.status,
                        answers = response.answers.len(),
                        "No usable answers"
                    );
                }
                Ok(response) => {
                    debug!(
                        record_type = %record_type,
                        answers = response.answers.len(),
                        "Answers received"
                    );
                    report.insert_records(record_type, response.presentations());
                }
            }
        }

        info!(
            domain = %qname,
            types = report.len(),
            failures = report.failures(),
            "DNS records fetched"
        );
        report
    }
}
