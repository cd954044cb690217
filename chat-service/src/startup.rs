//! Application startup and lifecycle management.

use crate::config::ChatConfig;
use crate::handlers;
use crate::services::orchestrator::ChatOrchestrator;
use crate::services::providers::openai::{OpenAiChatProvider, OpenAiConfig};
use crate::services::providers::{ChatProvider, GenerationParams};
use crate::services::session::{InMemorySessionStore, SessionStore};
use crate::services::ChatDb;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ChatConfig,
    pub db: ChatDb,
    pub orchestrator: Arc<ChatOrchestrator>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Build the application with the OpenAI provider from configuration.
    pub async fn build(config: ChatConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn ChatProvider> = Arc::new(OpenAiChatProvider::new(OpenAiConfig {
            api_key: config.openai.api_key.clone(),
            model: config.openai.model.clone(),
            api_base: config.openai.api_base.clone(),
        }));

        tracing::info!(
            model = %config.openai.model,
            "Initialized OpenAI chat provider"
        );

        Self::build_with_provider(config, provider).await
    }

    /// Build the application with an explicit provider (tests inject a mock).
    pub async fn build_with_provider(
        config: ChatConfig,
        provider: Arc<dyn ChatProvider>,
    ) -> Result<Self, AppError> {
        let db = ChatDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        db.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

        let orchestrator = Arc::new(ChatOrchestrator::new(
            store,
            provider,
            config.chat.system_prompt.clone(),
            GenerationParams {
                temperature: Some(config.chat.temperature),
                max_tokens: Some(config.chat.max_output_tokens),
            },
        ));

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
            orchestrator,
        };

        // Permissive CORS for browser and mobile callers; the layer also
        // answers OPTIONS pre-flight requests with 200.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/chat", post(handlers::post_chat))
            .route("/register", post(handlers::register_user))
            .route("/user/:uid", get(handlers::get_user))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &ChatDb {
        &self.state.db
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
