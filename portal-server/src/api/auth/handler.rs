//! Authentication Handlers
//!
//! Handles login, logout, and the current-user lookup

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::{ApiResponse, Role};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::security_log;
use crate::utils::{AppError, AppResult, ok, ok_with_message};

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response with JWT token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information returned after login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
}

/// Login handler
///
/// Authenticates the email/password pair and returns a JWT token. The
/// failure message never reveals which of the two fields was wrong.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let users = UserRepository::new(state.store());

    let Some(user) = users.find_by_email(&req.email) else {
        security_log!("WARN", "login_failed", email = req.email.clone());
        return Err(AppError::invalid_credentials());
    };

    // Verify password using argon2
    let password_valid = user
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

    if !password_valid {
        security_log!("WARN", "login_failed", email = req.email.clone());
        return Err(AppError::invalid_credentials());
    }

    // Generate JWT token
    let token = state
        .jwt_service()
        .generate_token(&user)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = user.id,
        email = %user.email,
        role = %user.role,
        "User logged in successfully"
    );

    let response = LoginResponse {
        token,
        user: UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            avatar: user.avatar,
        },
    };

    Ok(ok(response))
}

/// Get current user info
///
/// Returns the current authenticated user's information
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<UserInfo>>> {
    let users = UserRepository::new(state.store());
    let record = users
        .find_by_id(user.id)
        .ok_or_else(|| AppError::not_found(format!("User {}", user.id)))?;

    Ok(ok(UserInfo {
        id: record.id,
        name: record.name,
        email: record.email,
        role: record.role,
        avatar: record.avatar,
    }))
}

/// Logout handler
///
/// Stateless acknowledgement; the client discards the token. Idempotent.
pub async fn logout(user: CurrentUser) -> AppResult<Json<ApiResponse<bool>>> {
    tracing::info!(user_id = user.id, email = %user.email, "User logged out");
    Ok(ok_with_message(true, "Logged out"))
}
