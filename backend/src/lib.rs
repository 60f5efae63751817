//! # Skincare Tracker Backend
//!
//! Contains all non-UI logic for the skincare tracker.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (browser client)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (state container, services, validation)
//!     ↓
//! Storage Layer (snapshot repository, key-value backends)
//! ```
//!
//! The whole application state lives in one [`domain::SkincareStore`]. Every
//! change goes through one of its mutators and is written back to storage as a
//! complete snapshot before the request completes.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::domain::{
    Clock, CredentialVerifier, DashboardService, DietService, HydrationService, JournalService,
    MockCredentialVerifier, ProgressService, ReminderService, RoutineService, SessionService,
    SharedStore, SkincareStore, SystemClock,
};
use crate::storage::{open_storage, SnapshotRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub clock: Arc<dyn Clock>,
    pub session_service: SessionService,
    pub routine_service: RoutineService,
    pub journal_service: JournalService,
    pub progress_service: ProgressService,
    pub diet_service: DietService,
    pub reminder_service: ReminderService,
    pub hydration_service: HydrationService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    /// Wire every service to one store and clock
    pub fn new(store: SkincareStore, clock: Arc<dyn Clock>) -> Self {
        let store: SharedStore = Arc::new(Mutex::new(store));

        Self {
            session_service: SessionService::new(store.clone()),
            routine_service: RoutineService::new(store.clone()),
            journal_service: JournalService::new(store.clone()),
            progress_service: ProgressService::new(store.clone()),
            diet_service: DietService::new(store.clone(), clock.clone()),
            reminder_service: ReminderService::new(store.clone(), clock.clone()),
            hydration_service: HydrationService::new(store.clone()),
            dashboard_service: DashboardService::new(store.clone(), clock.clone()),
            store,
            clock,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up storage");
    let storage = open_storage(config).await?;
    let repository = SnapshotRepository::new(storage);

    info!("Loading application state");
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.date_zone));
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(MockCredentialVerifier);
    let store = SkincareStore::open(repository, verifier, clock.today()).await;

    info!("Setting up application state");
    Ok(AppState::new(store, clock))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    let cors = match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(_) => {
            warn!("Invalid allowed origin '{}', allowing any origin", allowed_origin);
            cors.allow_origin(Any)
        }
    };

    Router::new()
        .nest("/api", io::rest::api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
