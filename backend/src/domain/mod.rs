//! # Domain Layer
//!
//! Business rules for the skincare tracker.
//!
//! - [`store::SkincareStore`] owns the application state and persists it
//!   after every change.
//! - The `*_service` modules validate input, translate missing records into
//!   [`DomainError::NotFound`], and log what they do. They share one store
//!   through [`SharedStore`], so at most one mutation runs at a time.
//! - [`ingredients`] is a fixed catalogue and never touches the store.

pub mod auth;
pub mod clock;
pub mod dashboard_service;
pub mod diet_service;
pub mod error;
pub mod hydration_service;
pub mod ingredients;
pub mod journal_service;
pub mod models;
pub mod progress_service;
pub mod reminder_service;
pub mod routine_service;
pub mod session_service;
pub mod store;
pub mod validation;

use std::sync::Arc;
use tokio::sync::Mutex;

pub use auth::{CredentialVerifier, MockCredentialVerifier};
pub use clock::{Clock, DateZone, FixedClock, SystemClock};
pub use dashboard_service::DashboardService;
pub use diet_service::DietService;
pub use error::DomainError;
pub use hydration_service::HydrationService;
pub use journal_service::JournalService;
pub use progress_service::ProgressService;
pub use reminder_service::ReminderService;
pub use routine_service::RoutineService;
pub use session_service::SessionService;
pub use store::SkincareStore;
pub use validation::ValidationError;

/// Store handle shared by every service
pub type SharedStore = Arc<Mutex<SkincareStore>>;
