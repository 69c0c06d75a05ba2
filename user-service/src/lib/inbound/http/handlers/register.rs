use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::validation::CredentialValidator;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserServicePort;

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    // All constraints are checked up front so the response lists every problem
    CredentialValidator::validate_registration(&body.name, &body.email, &body.password)
        .map_err(ApiError::Validation)?;

    let command = CreateUserCommand {
        name: body.name,
        email: body.email,
        password: body.password,
    };

    state
        .user_service
        .create_user(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}
