//! MongoDB-backed record store.
//! Used by: state, main.

use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::{AnalyticsRecord, RecordStore};

pub struct MongoRecordStore {
    collection: Collection<Document>,
}

impl MongoRecordStore {
    /// Builds the client and pings the database so an unreachable store is
    /// reported here, before any request is served.
    pub async fn connect(config: &Config) -> Result<Self> {
        let options = ClientOptions::parse(&config.mongo_url)
            .await
            .map_err(|e| Error::StoreConnection(e.to_string()))?;
        let client = Client::with_options(options).map_err(|e| Error::StoreConnection(e.to_string()))?;
        let db = client.database(&config.db_name);
        db.run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| Error::StoreConnection(e.to_string()))?;

        tracing::info!(db = %config.db_name, collection = %config.collection_name, "connected to MongoDB");
        Ok(Self {
            collection: db.collection(&config.collection_name),
        })
    }
}

#[async_trait]
impl RecordStore for MongoRecordStore {
    async fn find_by_metric(&self, metric: &str) -> Result<Option<AnalyticsRecord>> {
        let found = self
            .collection
            .find_one(doc! { "_id": metric }, None)
            .await
            .map_err(|e| Error::StoreQuery(e.to_string()))?;
        found.map(record_from_document).transpose()
    }
}

fn record_from_document(document: Document) -> Result<AnalyticsRecord> {
    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(fields) => Ok(AnalyticsRecord::new(fields)),
        other => Err(Error::StoreQuery(format!("document decoded to non-object: {other}"))),
    }
}
