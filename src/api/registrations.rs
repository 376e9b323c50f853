//! Registration endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::registration::{Gender, Registration, RegistrationId};
use crate::infrastructure::registration::RegisterRequest;

/// Submission body for POST /api/register.
///
/// Every field is optional at the serde layer so missing values reach
/// server-side validation and come back as itemized errors instead of body
/// rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterApiRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub terms: Option<bool>,
}

impl From<RegisterApiRequest> for RegisterRequest {
    fn from(request: RegisterApiRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            age: request.age,
            gender: request.gender,
            address: request.address,
            country: request.country,
            state: request.state,
            city: request.city,
            password: request.password,
            confirm_password: request.confirm_password,
            terms: request.terms,
        }
    }
}

/// Public subset returned from a successful registration. The password never
/// appears on any read path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCreated {
    pub id: RegistrationId,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub data: RegistrationCreated,
}

/// Full record as exposed on read paths, with the password hash omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: RegistrationId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub gender: Gender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub country: String,
    pub state: String,
    pub city: String,
    pub registered_at: DateTime<Utc>,
}

impl From<&Registration> for RegistrationResponse {
    fn from(registration: &Registration) -> Self {
        Self {
            id: registration.id(),
            first_name: registration.first_name().to_string(),
            last_name: registration.last_name().to_string(),
            email: registration.email().to_string(),
            phone: registration.phone().to_string(),
            age: registration.age(),
            gender: registration.gender(),
            address: registration.address().map(str::to_string),
            country: registration.country().to_string(),
            state: registration.state().to_string(),
            city: registration.city().to_string(),
            registered_at: registration.registered_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRegistrationsResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<RegistrationResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetRegistrationResponse {
    pub success: bool,
    pub data: RegistrationResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteRegistrationResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterApiRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    debug!(email = ?request.email, "Registration submitted");

    let registration = state
        .registrations
        .register(request.into())
        .await
        .map_err(|e| ApiError::from_domain(e, state.expose_error_detail))?;

    let response = RegisterResponse {
        success: true,
        message: "Registration Successful! Your profile has been submitted successfully."
            .to_string(),
        data: RegistrationCreated {
            id: registration.id(),
            email: registration.email().to_string(),
            registered_at: registration.registered_at(),
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/registrations
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<ListRegistrationsResponse>, ApiError> {
    let registrations = state
        .registrations
        .list()
        .await
        .map_err(|e| ApiError::from_domain(e, state.expose_error_detail))?;

    let data: Vec<RegistrationResponse> =
        registrations.iter().map(RegistrationResponse::from).collect();

    Ok(Json(ListRegistrationsResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// GET /api/registrations/{id}
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetRegistrationResponse>, ApiError> {
    let id = parse_id(&id)?;

    let registration = state
        .registrations
        .get(id)
        .await
        .map_err(|e| ApiError::from_domain(e, state.expose_error_detail))?
        .ok_or_else(|| ApiError::not_found("Registration not found"))?;

    Ok(Json(GetRegistrationResponse {
        success: true,
        data: RegistrationResponse::from(&registration),
    }))
}

/// DELETE /api/registrations/{id}
pub async fn delete_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteRegistrationResponse>, ApiError> {
    let id = parse_id(&id)?;

    let deleted = state
        .registrations
        .delete(id)
        .await
        .map_err(|e| ApiError::from_domain(e, state.expose_error_detail))?;

    if !deleted {
        return Err(ApiError::not_found("Registration not found"));
    }

    Ok(Json(DeleteRegistrationResponse {
        success: true,
        message: "Registration deleted successfully".to_string(),
    }))
}

/// An unparseable id cannot match any record, so it reads as not-found
/// rather than a malformed request.
fn parse_id(raw: &str) -> Result<RegistrationId, ApiError> {
    RegistrationId::parse(raw).ok_or_else(|| ApiError::not_found("Registration not found"))
}
