use dnsdump_application::ports::{DnsExchanger, ResolverConfigSource};
use dnsdump_application::use_cases::{
    FetchRecordsUseCase, ReverseLookupUseCase, SelectServerUseCase,
};
use dnsdump_infrastructure::dns::HickoryExchanger;
use dnsdump_infrastructure::system::{HostsFileReader, ResolvConfReader, SystemReverseResolver};
use std::sync::Arc;

pub struct UseCases {
    pub select_server: SelectServerUseCase,
    pub fetch_records: FetchRecordsUseCase,
    pub reverse_lookup: ReverseLookupUseCase,
}

impl UseCases {
    pub fn new() -> Self {
        let resolv_conf = ResolvConfReader::new();
        let source_name = resolv_conf.path().to_string();
        let config_source: Arc<dyn ResolverConfigSource> = Arc::new(resolv_conf);
        let exchanger: Arc<dyn DnsExchanger> = Arc::new(HickoryExchanger::new());

        let reverse_resolver = Arc::new(SystemReverseResolver::new(
            HostsFileReader::new(),
            config_source.clone(),
            exchanger.clone(),
        ));

        Self {
            select_server: SelectServerUseCase::new(config_source, source_name),
            fetch_records: FetchRecordsUseCase::new(exchanger),
            reverse_lookup: ReverseLookupUseCase::new(reverse_resolver),
        }
    }
}
