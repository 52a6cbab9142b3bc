#![allow(dead_code)]

use async_trait::async_trait;
use dnsdump_application::ports::{DnsExchanger, ResolverConfigSource, ReverseResolver};
use dnsdump_domain::{
    AnswerRecord, DomainError, ExchangeResponse, RecordType, ResolverConfig, ResponseStatus,
    ServerAddr,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Exchanger with canned replies per record type.
///
/// Types without a canned reply answer NOERROR with an empty answer section.
#[derive(Clone, Default)]
pub struct MockDnsExchanger {
    responses: Arc<Mutex<HashMap<RecordType, Result<ExchangeResponse, DomainError>>>>,
    calls: Arc<Mutex<Vec<(String, String, RecordType)>>>,
}

impl MockDnsExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answers(&self, record_type: RecordType, presentations: &[&str]) {
        let answers = presentations
            .iter()
            .map(|p| AnswerRecord::new(Some(record_type), *p, *p))
            .collect();
        self.set_response(
            record_type,
            Ok(ExchangeResponse::new(ResponseStatus::NoError, answers)),
        );
    }

    pub fn set_status(&self, record_type: RecordType, status: ResponseStatus, answers: &[&str]) {
        let answers = answers
            .iter()
            .map(|p| AnswerRecord::new(Some(record_type), *p, *p))
            .collect();
        self.set_response(record_type, Ok(ExchangeResponse::new(status, answers)));
    }

    pub fn set_error(&self, record_type: RecordType, error: DomainError) {
        self.set_response(record_type, Err(error));
    }

    fn set_response(
        &self,
        record_type: RecordType,
        response: Result<ExchangeResponse, DomainError>,
    ) {
        self.responses.lock().unwrap().insert(record_type, response);
    }

    pub fn calls(&self) -> Vec<(String, String, RecordType)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsExchanger for MockDnsExchanger {
    async fn exchange(
        &self,
        server: &ServerAddr,
        name: &str,
        record_type: RecordType,
    ) -> Result<ExchangeResponse, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((server.to_string(), name.to_string(), record_type));

        self.responses
            .lock()
            .unwrap()
            .get(&record_type)
            .cloned()
            .unwrap_or_else(|| Ok(ExchangeResponse::new(ResponseStatus::NoError, vec![])))
    }
}

pub struct MockConfigSource {
    result: Result<ResolverConfig, DomainError>,
    loads: Arc<Mutex<usize>>,
}

impl MockConfigSource {
    pub fn with_nameservers(nameservers: &[&str]) -> Self {
        let ips = nameservers.iter().map(|s| s.parse().unwrap()).collect();
        Self::with_config(ResolverConfig::new(ips))
    }

    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            result: Ok(config),
            loads: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            loads: Arc::new(Mutex::new(0)),
        }
    }

    pub fn loads(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

#[async_trait]
impl ResolverConfigSource for MockConfigSource {
    async fn load(&self) -> Result<ResolverConfig, DomainError> {
        *self.loads.lock().unwrap() += 1;
        self.result.clone()
    }
}

pub struct MockReverseResolver {
    result: Result<Vec<String>, DomainError>,
    delay: Option<Duration>,
}

impl MockReverseResolver {
    pub fn with_names(names: &[&str]) -> Self {
        Self {
            result: Ok(names.iter().map(|n| n.to_string()).collect()),
            delay: None,
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl ReverseResolver for MockReverseResolver {
    async fn lookup_addr(&self, _ip: IpAddr) -> Result<Vec<String>, DomainError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}
