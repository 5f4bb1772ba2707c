//! Authentication handlers

use crate::config::Config;
use crate::db::UsersDb;
use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::user::{LoginRequest, RegisterRequest, User};
use crate::security::{jwt, password};
use actix_web::{web, HttpResponse};
use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;
use validator::Validate;

/// Auth response carrying the user and an access token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
}

/// Register a new account
pub async fn register(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let users = UsersDb::new(pool.clone().into_inner());
    let password_hash = password::hash_password(&payload.password)?;
    let user = users
        .create(&payload.email, &payload.username, &password_hash)
        .await?;

    let access_token = jwt::issue_token(
        &config.jwt_secret,
        user.id,
        user.role,
        config.jwt_expiry_hours,
    )?;

    Ok(HttpResponse::Created().json(AuthResponse { user, access_token }))
}

/// Log in with email and password
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let users = UsersDb::new(pool.clone().into_inner());
    let user = users
        .find_by_email(&payload.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !password::verify_password(&payload.password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let access_token = jwt::issue_token(
        &config.jwt_secret,
        user.id,
        user.role,
        config.jwt_expiry_hours,
    )?;

    Ok(HttpResponse::Ok().json(AuthResponse { user, access_token }))
}

/// Current authenticated user
pub async fn me(pool: web::Data<PgPool>, user: AuthUser) -> Result<HttpResponse> {
    let users = UsersDb::new(pool.clone().into_inner());
    let current = users.get(user.id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "user": current })))
}
