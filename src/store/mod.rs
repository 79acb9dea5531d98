//! Read-only access to analytics records keyed by metric name.
//! Used by: state, handlers::show.

pub mod mongo;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// One analytics document. Field layout is owned by whatever populates the
/// store; only `_id` (the metric name) is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalyticsRecord(Map<String, Value>);

impl AnalyticsRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get("_id").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Exact-match lookup on `_id`. `Ok(None)` when nothing matches.
    async fn find_by_metric(&self, metric: &str) -> Result<Option<AnalyticsRecord>>;
}
