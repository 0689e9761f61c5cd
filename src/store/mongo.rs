use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};

use super::{Collection, EntityStore, Filter, UpdateAck};
use crate::database::{LazyMongoDB, MongoDB};
use crate::utils::error::AppError;

#[async_trait]
impl EntityStore for MongoDB {
    async fn insert(&self, collection: Collection, document: Document) -> Result<Document, AppError> {
        self.collection::<Document>(collection.name())
            .insert_one(&document)
            .await?;
        Ok(document)
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .collection::<Document>(collection.name())
            .find(filter.to_document())
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_by_id(&self, collection: Collection, id: ObjectId) -> Result<Option<Document>, AppError> {
        Ok(self
            .collection::<Document>(collection.name())
            .find_one(doc! { "_id": id })
            .await?)
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateAck, AppError> {
        let result = self
            .collection::<Document>(collection.name())
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(UpdateAck::new(result.matched_count, result.modified_count))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.database().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[async_trait]
impl EntityStore for LazyMongoDB {
    async fn insert(&self, collection: Collection, document: Document) -> Result<Document, AppError> {
        self.handle().await?.insert(collection, document).await
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Document>, AppError> {
        self.handle().await?.find(collection, filter).await
    }

    async fn find_by_id(&self, collection: Collection, id: ObjectId) -> Result<Option<Document>, AppError> {
        self.handle().await?.find_by_id(collection, id).await
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: ObjectId,
        fields: Document,
    ) -> Result<UpdateAck, AppError> {
        self.handle().await?.update_fields(collection, id, fields).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.handle().await?.ping().await
    }
}
