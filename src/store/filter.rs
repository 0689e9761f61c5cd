use mongodb::bson::{doc, Bson, Document};

#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Eq(String, Bson),
    In(String, Vec<Bson>),
}

/// Conjunction of equality / membership clauses over top-level fields.
///
/// Mirrors the subset of MongoDB query semantics the service relies on:
/// a clause on an array field matches when any element satisfies it, and
/// a missing field never matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<Clause>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.clauses.push(Clause::Eq(field.into(), value.into()));
        self
    }

    pub fn is_in(mut self, field: impl Into<String>, values: Vec<Bson>) -> Self {
        self.clauses.push(Clause::In(field.into(), values));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn to_document(&self) -> Document {
        let mut query = Document::new();
        for clause in &self.clauses {
            match clause {
                Clause::Eq(field, value) => {
                    query.insert(field.clone(), value.clone());
                }
                Clause::In(field, values) => {
                    query.insert(field.clone(), doc! { "$in": values.clone() });
                }
            }
        }
        query
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.clauses.iter().all(|clause| match clause {
            Clause::Eq(field, value) => field_values(document, field).any(|v| v == value),
            Clause::In(field, values) => {
                field_values(document, field).any(|v| values.contains(v))
            }
        })
    }
}

/// Values a top-level field contributes to matching: the elements of an
/// array, the value itself otherwise. Absent and null fields yield nothing.
pub fn field_values<'a>(document: &'a Document, field: &str) -> Box<dyn Iterator<Item = &'a Bson> + 'a> {
    match document.get(field) {
        None | Some(Bson::Null) => Box::new(std::iter::empty()),
        Some(Bson::Array(items)) => Box::new(items.iter().filter(|v| !matches!(v, Bson::Null))),
        Some(value) => Box::new(std::iter::once(value)),
    }
}
