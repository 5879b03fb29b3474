use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use unitransfer::config::{StoreBackend, StoreConfig};
use unitransfer::workflows::transfer::{
    Decision, InMemoryRequestStore, RequestId, RequestStore, SqliteRequestStore, StoreError,
    TransferRequest,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Store backend chosen once at startup. Delegation keeps the service
/// generic over a single concrete store type.
pub(crate) enum RuntimeStore {
    Memory(InMemoryRequestStore),
    Sqlite(SqliteRequestStore),
}

impl RuntimeStore {
    pub(crate) fn from_config(config: &StoreConfig) -> Self {
        match config.backend {
            StoreBackend::Memory => Self::Memory(InMemoryRequestStore::new()),
            StoreBackend::Sqlite => Self::Sqlite(SqliteRequestStore::new(config.db_path.clone())),
        }
    }

    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl RequestStore for RuntimeStore {
    fn initialize(&self) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.initialize(),
            Self::Sqlite(store) => store.initialize(),
        }
    }

    fn list_all(&self) -> Result<Vec<TransferRequest>, StoreError> {
        match self {
            Self::Memory(store) => store.list_all(),
            Self::Sqlite(store) => store.list_all(),
        }
    }

    fn create(&self, request: TransferRequest) -> Result<TransferRequest, StoreError> {
        match self {
            Self::Memory(store) => store.create(request),
            Self::Sqlite(store) => store.create(request),
        }
    }

    fn update_status(&self, id: &RequestId, decision: Decision) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.update_status(id, decision),
            Self::Sqlite(store) => store.update_status(id, decision),
        }
    }
}

pub(crate) fn parse_store_backend(raw: &str) -> Result<StoreBackend, String> {
    StoreBackend::parse(raw).map_err(|err| err.to_string())
}
