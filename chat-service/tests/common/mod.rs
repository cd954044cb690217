use chat_service::config::ChatConfig;
use chat_service::services::providers::ChatProvider;
use chat_service::services::ChatDb;
use chat_service::startup::Application;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: ChatDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn(provider: Arc<dyn ChatProvider>) -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");
        std::env::set_var("OPENAI_API_KEY", "test-key");

        let db_name = format!("chat_test_{}", Uuid::new_v4());

        let mut config = ChatConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Cleanup test resources (database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
