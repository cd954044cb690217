//! Database operations for the chat service.
//!
//! Handles user profile storage via MongoDB.

use crate::models::User;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct ChatDb {
    client: MongoClient,
    db: Database,
}

impl ChatDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for chat-service");

        let firebase_uid_index = IndexModel::builder()
            .keys(doc! { "firebase_uid": 1 })
            .options(
                IndexOptions::builder()
                    .name("firebase_uid_idx".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.users()
            .create_index(firebase_uid_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create firebase_uid index: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    pub async fn find_user(&self, firebase_uid: &str) -> Result<Option<User>, AppError> {
        self.users()
            .find_one(doc! { "firebase_uid": firebase_uid }, None)
            .await
            .map_err(AppError::from)
    }

    pub async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        self.users().insert_one(user, None).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::Conflict(anyhow::anyhow!("User already registered"))
            } else {
                AppError::from(e)
            }
        })?;
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}
