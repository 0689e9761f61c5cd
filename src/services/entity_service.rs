// ==================== ENTITY SERVICE ====================
// Operações CRUD genéricas sobre qualquer collection do EntityStore

use mongodb::bson::{oid::ObjectId, to_document, Document};
use serde::Serialize;

use crate::{
    models::object_id,
    store::{new_document, Collection, EntityStore, Filter, UpdateAck},
    utils::error::AppError,
};

/// Parses a path identifier.
pub fn parse_id(raw: &str) -> Result<ObjectId, AppError> {
    object_id::parse(raw).map_err(AppError::InvalidIdentifier)
}

/// Inserts a new document built from a typed payload and returns it as stored.
pub async fn create<T: Serialize>(
    store: &dyn EntityStore,
    collection: Collection,
    payload: &T,
) -> Result<Document, AppError> {
    let fields = to_document(payload)?;
    let stored = store.insert(collection, new_document(fields)).await?;

    log::info!(
        "✅ Created {} in {}",
        stored.get_object_id("_id").map(|id| id.to_hex()).unwrap_or_default(),
        collection.name()
    );

    Ok(stored)
}

pub async fn get_by_id(
    store: &dyn EntityStore,
    collection: Collection,
    raw_id: &str,
) -> Result<Option<Document>, AppError> {
    let id = parse_id(raw_id)?;
    store.find_by_id(collection, id).await
}

pub async fn list_all(
    store: &dyn EntityStore,
    collection: Collection,
    filter: &Filter,
) -> Result<Vec<Document>, AppError> {
    store.find(collection, filter).await
}

/// Merges the fields present in `payload` into an existing document.
pub async fn update<T: Serialize>(
    store: &dyn EntityStore,
    collection: Collection,
    raw_id: &str,
    payload: &T,
) -> Result<UpdateAck, AppError> {
    let id = parse_id(raw_id)?;
    let fields = to_document(payload)?;

    if fields.is_empty() {
        return Err(AppError::ValidationError("update contains no fields".to_string()));
    }

    let ack = store.update_fields(collection, id, fields).await?;

    if ack.matched_count == 0 {
        log::warn!("⚠️ No document {} in {}", id, collection.name());
    }

    Ok(ack)
}
