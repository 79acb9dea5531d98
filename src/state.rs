//! Shared application state.

use std::sync::Arc;

use crate::auth::http::HttpCredentialValidator;
use crate::auth::CredentialValidator;
use crate::config::Config;
use crate::error::Result;
use crate::store::mongo::MongoRecordStore;
use crate::store::RecordStore;
use crate::telemetry::Metrics;

pub struct AppStateInner {
    pub credentials: Arc<dyn CredentialValidator>,
    pub store: Arc<dyn RecordStore>,
    pub metrics: Metrics,
}

pub type AppState = Arc<AppStateInner>;

pub fn with_collaborators(
    credentials: Arc<dyn CredentialValidator>,
    store: Arc<dyn RecordStore>,
) -> AppState {
    Arc::new(AppStateInner {
        credentials,
        store,
        metrics: Metrics::new(),
    })
}

/// Connects to the store and wires the HTTP auth client. Fails if the store
/// cannot be reached.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let store = MongoRecordStore::connect(config).await?;
    let credentials = HttpCredentialValidator::new(config.auth_service_url.clone());
    Ok(with_collaborators(Arc::new(credentials), Arc::new(store)))
}
