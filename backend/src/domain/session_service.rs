use anyhow::Result;
use log::{info, warn};
use shared::{LoginRequest, LoginResponse, UpdateUserRequest, User, UserResponse};

use super::error::DomainError;
use super::validation::require_text;
use super::SharedStore;

/// Service for signing in and out and editing the signed-in profile
#[derive(Clone)]
pub struct SessionService {
    store: SharedStore,
}

impl SessionService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Attempt a sign-in. A rejected attempt is reported in the response, not as an error.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        info!("Login attempt for '{}'", request.email);

        let mut store = self.store.lock().await;
        if store.login(&request.email, &request.password).await {
            info!("Login successful for '{}'", request.email);
            Ok(LoginResponse {
                success: true,
                user: store.snapshot().user.clone(),
                message: "Login successful!".to_string(),
            })
        } else {
            warn!("Login rejected for '{}'", request.email);
            Ok(LoginResponse {
                success: false,
                user: None,
                message: "Invalid email or password".to_string(),
            })
        }
    }

    pub async fn logout(&self) -> Result<UserResponse> {
        info!("Logging out");

        let mut store = self.store.lock().await;
        store.logout().await;

        Ok(UserResponse {
            user: None,
            is_authenticated: false,
        })
    }

    pub async fn current_user(&self) -> UserResponse {
        let store = self.store.lock().await;
        let snapshot = store.snapshot();
        UserResponse {
            user: snapshot.user.clone(),
            is_authenticated: snapshot.is_authenticated,
        }
    }

    /// Merge profile changes into the signed-in user
    pub async fn update_user(&self, request: UpdateUserRequest) -> Result<User> {
        info!("Updating user profile");

        if let Some(name) = &request.name {
            require_text("name", name).map_err(DomainError::from)?;
        }
        if let Some(email) = &request.email {
            require_text("email", email).map_err(DomainError::from)?;
        }

        let mut store = self.store.lock().await;
        if store.snapshot().user.is_none() {
            warn!("Profile update rejected: not signed in");
            return Err(DomainError::NotAuthenticated.into());
        }

        let user = store
            .update_user(request)
            .await
            .ok_or(DomainError::NotAuthenticated)?;

        info!("Updated profile for '{}'", user.email);
        Ok(user)
    }
}
