use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::{Collection, EntityStore, Filter, UpdateAck};
use crate::utils::error::AppError;

/// In-process store keeping documents in insertion order.
///
/// Used by the test suite and selected at runtime with `DATABASE_URL=memory`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn insert(&self, collection: Collection, document: Document) -> Result<Document, AppError> {
        let id = match document.get("_id") {
            Some(Bson::ObjectId(id)) => *id,
            _ => {
                return Err(AppError::ValidationError(
                    "document must carry an ObjectId _id".to_string(),
                ))
            }
        };

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        if documents.iter().any(|d| d.get_object_id("_id").ok() == Some(id)) {
            return Err(AppError::ValidationError(format!(
                "duplicate key: {} already exists in {}",
                id,
                collection.name()
            )));
        }

        documents.push(document.clone());
        Ok(document)
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| filter.matches(d))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateAck, AppError> {
        let mut collections = self.collections.write().await;
        let Some(document) = collections
            .get_mut(&collection)
            .and_then(|documents| {
                documents
                    .iter_mut()
                    .find(|d| d.get_object_id("_id").ok() == Some(id))
            })
        else {
            return Ok(UpdateAck::new(0, 0));
        };

        let mut modified = false;
        for (key, value) in fields {
            if document.get(&key) != Some(&value) {
                document.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateAck::new(1, u64::from(modified)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
