// ==================== RELATIONSHIP PROJECTOR ====================
// Anexa documentos relacionados (por identificador) a cada documento de origem

use std::collections::{HashMap, HashSet};

use futures::future::{BoxFuture, FutureExt};
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::{
    store::{field_values, Collection, EntityStore, Filter},
    utils::error::AppError,
};

/// One reference to resolve: documents of `target` whose `foreign_field`
/// equals the source's `local_field` are attached under `output`.
///
/// Nested relationships are resolved on the attached targets first, so a
/// task list can carry its own detail lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub local_field: String,
    pub target: Collection,
    pub foreign_field: String,
    pub output: String,
    pub nested: Vec<Relationship>,
}

impl Relationship {
    pub fn new(
        local_field: impl Into<String>,
        target: Collection,
        foreign_field: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            local_field: local_field.into(),
            target,
            foreign_field: foreign_field.into(),
            output: output.into(),
            nested: Vec::new(),
        }
    }

    /// Attaches `relationship` to every target this one resolves.
    pub fn with(mut self, relationship: Relationship) -> Self {
        self.nested.push(relationship);
        self
    }
}

/// A source query plus the relationships to attach to each result.
///
/// Resolution is an explicit lookup pass: one query for the sources, then one
/// `$in` query per relationship over every referenced key. Nothing is written
/// back to the store.
#[derive(Debug, Clone)]
pub struct Projection {
    source: Collection,
    filter: Filter,
    relationships: Vec<Relationship>,
}

impl Projection {
    pub fn of(source: Collection) -> Self {
        Self {
            source,
            filter: Filter::new(),
            relationships: Vec::new(),
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn attach(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Runs the projection. Any store failure fails the whole call.
    pub async fn run(&self, store: &dyn EntityStore) -> Result<Vec<Document>, AppError> {
        let mut documents = store.find(self.source, &self.filter).await?;
        resolve(store, &mut documents, &self.relationships).await?;
        Ok(documents)
    }
}

/// Hashable form of a join key. Values that are not identifiers, strings
/// or integers fall back to their canonical text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LookupKey {
    Id(ObjectId),
    Text(String),
    Int(i64),
    Other(String),
}

impl LookupKey {
    fn of(value: &Bson) -> Self {
        match value {
            Bson::ObjectId(id) => LookupKey::Id(*id),
            Bson::String(s) => LookupKey::Text(s.clone()),
            Bson::Int32(i) => LookupKey::Int(i64::from(*i)),
            Bson::Int64(i) => LookupKey::Int(*i),
            other => LookupKey::Other(other.to_string()),
        }
    }
}

fn resolve<'a>(
    store: &'a dyn EntityStore,
    documents: &'a mut [Document],
    relationships: &'a [Relationship],
) -> BoxFuture<'a, Result<(), AppError>> {
    async move {
        for relationship in relationships {
            let mut targets = fetch_targets(store, relationship, documents).await?;
            if !relationship.nested.is_empty() {
                resolve(store, &mut targets, &relationship.nested).await?;
            }

            // foreign key -> target positions, in store order
            let mut by_key: HashMap<LookupKey, Vec<usize>> = HashMap::new();
            for (position, target) in targets.iter().enumerate() {
                for value in field_values(target, &relationship.foreign_field) {
                    let positions = by_key.entry(LookupKey::of(value)).or_default();
                    if positions.last() != Some(&position) {
                        positions.push(position);
                    }
                }
            }

            for document in documents.iter_mut() {
                let mut matched: Vec<usize> = field_values(document, &relationship.local_field)
                    .filter_map(|value| by_key.get(&LookupKey::of(value)))
                    .flatten()
                    .copied()
                    .collect();
                matched.sort_unstable();
                matched.dedup();

                let attached = matched
                    .into_iter()
                    .map(|position| Bson::Document(targets[position].clone()))
                    .collect();
                document.insert(relationship.output.clone(), Bson::Array(attached));
            }
        }
        Ok(())
    }
    .boxed()
}

/// Every target document referenced by at least one source.
async fn fetch_targets(
    store: &dyn EntityStore,
    relationship: &Relationship,
    sources: &[Document],
) -> Result<Vec<Document>, AppError> {
    let mut seen = HashSet::new();
    let mut keys: Vec<Bson> = Vec::new();
    for source in sources {
        for value in field_values(source, &relationship.local_field) {
            if seen.insert(LookupKey::of(value)) {
                keys.push(value.clone());
            }
        }
    }

    if keys.is_empty() {
        return Ok(Vec::new());
    }

    store
        .find(
            relationship.target,
            &Filter::new().is_in(relationship.foreign_field.clone(), keys),
        )
        .await
}
