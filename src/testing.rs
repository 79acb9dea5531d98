//! In-memory collaborators for handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::auth::CredentialValidator;
use crate::error::{Error, Result};
use crate::store::{AnalyticsRecord, RecordStore};

pub fn record(value: Value) -> AnalyticsRecord {
    match value {
        Value::Object(map) => AnalyticsRecord::new(map),
        other => panic!("expected object, got {other}"),
    }
}

pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn demo() -> Self {
        let users = [("alice", "pw1"), ("bob", "pw2")]
            .into_iter()
            .map(|(u, p)| (u.to_string(), p.to_string()))
            .collect();
        Self { users }
    }
}

#[async_trait]
impl CredentialValidator for StaticCredentials {
    async fn validate(&self, username: &str, password: &str) -> bool {
        self.users.get(username).is_some_and(|p| p == password)
    }
}

pub struct FakeStore {
    records: HashMap<String, AnalyticsRecord>,
    failure: Option<String>,
    lookups: AtomicUsize,
}

impl FakeStore {
    pub fn with_records(records: Vec<AnalyticsRecord>) -> Self {
        let records = records
            .into_iter()
            .filter_map(|r| {
                let id = r.id()?.to_owned();
                Some((id, r))
            })
            .collect();
        Self { records, failure: None, lookups: AtomicUsize::new(0) }
    }

    pub fn failing(detail: &str) -> Self {
        Self { records: HashMap::new(), failure: Some(detail.into()), lookups: AtomicUsize::new(0) }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for FakeStore {
    async fn find_by_metric(&self, metric: &str) -> Result<Option<AnalyticsRecord>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(detail) = &self.failure {
            return Err(Error::StoreQuery(detail.clone()));
        }
        Ok(self.records.get(metric).cloned())
    }
}
