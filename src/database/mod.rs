use anyhow::Result;
use mongodb::{Client, Collection, Database};
use std::env;
use std::time::Duration;

use crate::models::Entity;

/// MongoDB connection manager
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Connect to the given deployment and database, verify the connection
    /// and create the indexes the collections rely on.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool tuning
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(database);

        // Test connection
        db.list_collection_names().await?;
        log::info!("Connected to MongoDB database: {}", database);

        let mongodb = Self { client, db };
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Connect using `MONGODB_URI` and `MONGODB_DATABASE`, with localhost
    /// defaults for development.
    pub async fn from_env() -> Result<Self> {
        let uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database = env::var("MONGODB_DATABASE").unwrap_or_else(|_| "feed".to_string());

        log::info!("Connecting to MongoDB at {}", uri);
        Self::connect(&uri, &database).await
    }

    /// Creates the indexes the collection operations query by
    async fn ensure_indexes(&self) -> Result<()> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let posts = self.db.collection::<mongodb::bson::Document>("posts");

        // posts(userId) - posts by author
        let posts_user_index = IndexModel::builder().keys(doc! { "userId": 1 }).build();
        match posts.create_index(posts_user_index).await {
            Ok(_) => log::info!("   ✅ Index created: posts(userId)"),
            Err(e) => log::debug!("   Index already exists: {}", e),
        }

        // posts(date) - newest-first listing
        let posts_date_index = IndexModel::builder().keys(doc! { "date": -1 }).build();
        match posts.create_index(posts_date_index).await {
            Ok(_) => log::info!("   ✅ Index created: posts(date)"),
            Err(e) => log::debug!("   Index already exists: {}", e),
        }

        // comments(postId) - comment threads per post
        let comments = self.db.collection::<mongodb::bson::Document>("comments");

        let comments_post_index = IndexModel::builder().keys(doc! { "postId": 1 }).build();
        match comments.create_index(comments_post_index).await {
            Ok(_) => log::info!("   ✅ Index created: comments(postId)"),
            Err(e) => log::debug!("   Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    /// Typed collection handle, bound through the entity's declared
    /// collection name.
    pub fn collection<E: Entity>(&self) -> Collection<E> {
        self.db.collection(E::COLLECTION)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Check if the connection is healthy
    pub async fn health_check(&self) -> Result<bool> {
        self.db.list_collection_names().await?;
        Ok(true)
    }
}
