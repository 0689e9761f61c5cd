use mongodb::bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection, Database, IndexModel};
use tokio::sync::OnceCell;

use crate::store::Collection as StoreCollection;
use crate::utils::error::AppError;

/// Database used when the connection string names none.
pub const DEFAULT_DATABASE_NAME: &str = "hospitalFoodManager";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Builds the pooled client. The driver connects lazily, but a
    /// `mongodb+srv://` string is resolved here: a malformed string is a
    /// `ValidationError`, a failed lookup is `StoreUnavailable`.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri)
            .await
            .map_err(connection_string_error)?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));
        client_options.app_name = Some("hospital-food-service".to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        Ok(Self { db })
    }

    /// Verifies connectivity and creates the lookup indexes.
    pub async fn initialize(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        self.ensure_indexes().await;
        Ok(())
    }

    /// Creates the indexes backing status filters and relationship lookups
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let meal_indexes = [
            "patientId",
            "status",
            "assignedPantryStaff",
            "assignedDeliveryPersonnel",
        ];

        let meals = self.collection::<Document>(StoreCollection::Meals.name());
        for field in meal_indexes {
            let index = IndexModel::builder().keys(doc! { field: 1 }).build();
            match meals.create_index(index).await {
                Ok(_) => log::info!("   ✅ Index created: meals({})", field),
                Err(e) => log::debug!("   ℹ️  Index not created for meals({}): {}", field, e),
            }
        }

        for collection in [StoreCollection::PantryStaff.name(), StoreCollection::DeliveryPersonnel.name()] {
            let index = IndexModel::builder().keys(doc! { "assignedTasks": 1 }).build();
            match self.collection::<Document>(collection).create_index(index).await {
                Ok(_) => log::info!("   ✅ Index created: {}(assignedTasks)", collection),
                Err(e) => log::debug!("   ℹ️  Index not created for {}(assignedTasks): {}", collection, e),
            }
        }

        log::info!("✅ Database indexes ready");
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

fn connection_string_error(err: mongodb::error::Error) -> AppError {
    match err.kind.as_ref() {
        ErrorKind::InvalidArgument { .. } => {
            AppError::ValidationError(format!("invalid connection string: {}", err))
        }
        _ => AppError::StoreUnavailable(err.to_string()),
    }
}

/// MongoDB handle that may finish connecting after startup.
///
/// When the server (or its SRV record) cannot be resolved at boot, the
/// client is built on first use instead; until then every call fails with
/// `StoreUnavailable` and the next call retries.
pub struct LazyMongoDB {
    uri: String,
    db_name: String,
    db: OnceCell<MongoDB>,
}

impl LazyMongoDB {
    pub fn deferred(uri: &str, db_name: &str) -> Self {
        Self {
            uri: uri.to_string(),
            db_name: db_name.to_string(),
            db: OnceCell::new(),
        }
    }

    pub fn connected(db: MongoDB, uri: &str, db_name: &str) -> Self {
        Self {
            uri: uri.to_string(),
            db_name: db_name.to_string(),
            db: OnceCell::new_with(Some(db)),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.db.initialized()
    }

    pub async fn handle(&self) -> Result<&MongoDB, AppError> {
        self.db
            .get_or_try_init(|| async {
                let db = MongoDB::new(&self.uri, &self.db_name).await?;
                match db.initialize().await {
                    Ok(()) => log::info!("✅ MongoDB connected successfully"),
                    Err(e) => log::warn!("⚠️ MongoDB client built but server not reachable yet: {}", e),
                }
                Ok::<MongoDB, AppError>(db)
            })
            .await
    }
}

/// Opens the production store.
///
/// Only a malformed connection string is fatal. An unreachable server or an
/// unresolvable SRV host is logged and the store connects on first use.
pub async fn connect(uri: &str, db_name: &str) -> Result<LazyMongoDB, AppError> {
    match MongoDB::new(uri, db_name).await {
        Ok(db) => {
            match db.initialize().await {
                Ok(()) => log::info!("✅ MongoDB connected successfully"),
                Err(e) => log::error!("❌ MongoDB connection failed, serving without a reachable store: {}", e),
            }
            Ok(LazyMongoDB::connected(db, uri, db_name))
        }
        Err(AppError::ValidationError(msg)) => Err(AppError::ValidationError(msg)),
        Err(e) => {
            log::error!("❌ MongoDB not resolvable, will retry on first request: {}", e);
            Ok(LazyMongoDB::deferred(uri, db_name))
        }
    }
}

/// Database name from the path segment of a connection string.
pub fn database_name_from_uri(uri: &str) -> Option<String> {
    let without_scheme = uri.split_once("://").map(|(_, rest)| rest)?;
    let (_, path) = without_scheme.split_once('/')?;
    let name = path.split('?').next().unwrap_or_default();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
