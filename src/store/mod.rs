// ==================== ENTITY STORE ====================
// Contrato comum aos backends (MongoDB em produção, memória em testes/dev)

pub mod filter;
pub mod memory;
pub mod mongo;

pub use filter::*;
pub use memory::MemoryStore;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::Serialize;

use crate::utils::error::AppError;

/// Collections known to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Patients,
    Meals,
    PantryStaff,
    DeliveryPersonnel,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Patients,
        Collection::Meals,
        Collection::PantryStaff,
        Collection::DeliveryPersonnel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Patients => "patients",
            Collection::Meals => "meals",
            Collection::PantryStaff => "pantryStaff",
            Collection::DeliveryPersonnel => "deliveryPersonnel",
        }
    }
}

/// Write acknowledgment, shaped like the driver's update result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateAck {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
        }
    }
}

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Inserts a document that already carries its `_id`.
    async fn insert(&self, collection: Collection, document: Document) -> Result<Document, AppError>;

    /// Every document matching `filter`, in store-native order.
    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>, AppError>;

    async fn find_by_id(&self, collection: Collection, id: ObjectId) -> Result<Option<Document>, AppError> {
        let found = self.find(collection, &Filter::new().eq("_id", id)).await?;
        Ok(found.into_iter().next())
    }

    /// `$set` semantics: named fields are replaced, the rest persist.
    async fn update_fields(
        &self,
        collection: Collection,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateAck, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Builds the `_id`-first document stored on creation.
pub fn new_document(fields: Document) -> Document {
    let mut document = doc! { "_id": ObjectId::new() };
    document.extend(fields);
    document.insert("createdAt", mongodb::bson::DateTime::now());
    document
}
