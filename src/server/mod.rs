//! HTTP surface for the account and transfer core
//!
//! Exposes the service operations as REST endpoints. CORS is permissive;
//! the routing layer carries no business logic of its own.

pub mod handlers;

use crate::core::{AccountAdmin, AuthService, TransferEngine};
use crate::hasher::Argon2Hasher;
use crate::store::MemoryStore;
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared handler state: one service instance per operation family
///
/// All three services borrow the same process-wide store and hasher,
/// injected once at startup.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService<MemoryStore, Argon2Hasher>>,
    pub transfers: Arc<TransferEngine<MemoryStore, Argon2Hasher>>,
    pub admin: Arc<AccountAdmin<MemoryStore>>,
}

impl AppState {
    /// Wire the services over a shared store and hasher
    pub fn new(store: Arc<MemoryStore>, hasher: Arc<Argon2Hasher>) -> Self {
        Self {
            auth: Arc::new(AuthService::new(Arc::clone(&store), Arc::clone(&hasher))),
            transfers: Arc::new(TransferEngine::new(Arc::clone(&store), hasher)),
            admin: Arc::new(AccountAdmin::new(store)),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/users", post(handlers::register).get(handlers::list_users))
        .route(
            "/users/:id",
            put(handlers::update_status).delete(handlers::delete_user),
        )
        .route("/login", post(handlers::login))
        .route("/transfer", post(handlers::transfer))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server for the core services
pub struct ApiServer {
    state: AppState,
    bind_addr: String,
}

impl ApiServer {
    /// Create a server that will bind to `bind_addr`
    pub fn new(state: AppState, bind_addr: String) -> Self {
        Self { state, bind_addr }
    }

    /// Bind and serve until ctrl-c
    ///
    /// The listener and the store share the process lifecycle: opened
    /// here, dropped when the serve loop exits.
    pub async fn run(self) -> std::io::Result<()> {
        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(&self.bind_addr).await?;
        info!("listening on {}", self.bind_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
