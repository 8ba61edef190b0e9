use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::account::{AccountView, Role};
use crate::state::AppState;
use crate::workflow::accounts::{self, NewAccount};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AccountView>, AppError> {
    let role = Role::parse(&payload.role).ok_or_else(|| {
        AppError::Validation("role must be customer, staff, or rider".to_string())
    })?;

    let view = accounts::register(
        &state,
        NewAccount {
            name: payload.name,
            email: payload.email,
            phone: payload.phone,
            password: payload.password,
            role,
        },
    )?;

    Ok(Json(view))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }

    let account = accounts::authenticate(&state, &payload.email, &payload.password)?;
    let access_token = state.tokens.issue(&account.email, account.role)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
