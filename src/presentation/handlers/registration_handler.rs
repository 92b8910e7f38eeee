use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::{
        models::{event::Event, registration::Registration},
        repositories::{
            event_repository::EventRepository, registration_repository::RegistrationRepository,
            user_repository::UserRepository,
        },
    },
    presentation::{error::ApiError, extract::ApiJson, handlers::event_handler::EventInfo},
    usecase::registration_usecase::RegistrationUsecase,
};

// Request

/// json for registering a user to an event
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_id: Uuid,
    pub event_id: Uuid,
}

// Response

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInfo {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub registered_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationInfo {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id().as_uuid().to_string(),
            user_id: registration.user_id().as_uuid().to_string(),
            event_id: registration.event_id().as_uuid().to_string(),
            registered_at: registration.registered_at(),
        }
    }
}

/// Listing item with the event details filled in, the way the listing page
/// shows them
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationWithEventInfo {
    pub id: String,
    pub user_id: String,
    pub event: Option<EventInfo>,
    pub registered_at: DateTime<Utc>,
}

impl From<(Registration, Option<Event>)> for RegistrationWithEventInfo {
    fn from((registration, event): (Registration, Option<Event>)) -> Self {
        Self {
            id: registration.id().as_uuid().to_string(),
            user_id: registration.user_id().as_uuid().to_string(),
            event: event.map(EventInfo::from),
            registered_at: registration.registered_at(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub registration: RegistrationInfo,
}

#[derive(Serialize, Deserialize)]
pub struct ListRegistrationsResponse {
    pub message: String,
    pub user: String,
    pub count: usize,
    pub registrations: Vec<RegistrationWithEventInfo>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRegistrationResponse {
    pub message: String,
    pub cancelled_registration: RegistrationInfo,
}

/* Router Function and Handler Function */

/// Suppose to be merged into the main router
pub fn create_registration_router<R, U, E>(
    registration_service: RegistrationUsecase<R, U, E>,
) -> Router
where
    R: RegistrationRepository + Send + Sync + 'static + Clone,
    U: UserRepository + Send + Sync + 'static + Clone,
    E: EventRepository + Send + Sync + 'static + Clone,
{
    let state = RegistrationState {
        registration_service: Arc::new(registration_service),
    };

    Router::new()
        .route("/register", post(register::<R, U, E>))
        .route(
            "/registrations/{id}",
            get(list_registrations::<R, U, E>).delete(cancel_registration::<R, U, E>),
        )
        .with_state(state)
}

#[derive(Clone)]
pub struct RegistrationState<
    R: RegistrationRepository + Clone,
    U: UserRepository + Clone,
    E: EventRepository + Clone,
> {
    pub registration_service: Arc<RegistrationUsecase<R, U, E>>,
}

async fn register<R, U, E>(
    State(state): State<RegistrationState<R, U, E>>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    R: RegistrationRepository + Send + Sync + Clone,
    U: UserRepository + Send + Sync + Clone,
    E: EventRepository + Send + Sync + Clone,
{
    let registration = state
        .registration_service
        .register(payload.user_id, payload.event_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            registration: registration.into(),
        }),
    ))
}

/// GET lists the registrations of the user with that id
async fn list_registrations<R, U, E>(
    State(state): State<RegistrationState<R, U, E>>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    R: RegistrationRepository + Send + Sync + Clone,
    U: UserRepository + Send + Sync + Clone,
    E: EventRepository + Send + Sync + Clone,
{
    let user_id = user_id
        .parse::<Uuid>()
        .map_err(|_| ApiError::bad_request("Invalid user id"))?;

    let (user, registrations) = state.registration_service.list_for_user(user_id).await?;

    let registrations: Vec<RegistrationWithEventInfo> = registrations
        .into_iter()
        .map(RegistrationWithEventInfo::from)
        .collect();
    Ok((
        StatusCode::OK,
        Json(ListRegistrationsResponse {
            message: "Registrations retrieved successfully".to_string(),
            user: user.name().to_string(),
            count: registrations.len(),
            registrations,
        }),
    ))
}

async fn cancel_registration<R, U, E>(
    State(state): State<RegistrationState<R, U, E>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    R: RegistrationRepository + Send + Sync + Clone,
    U: UserRepository + Send + Sync + Clone,
    E: EventRepository + Send + Sync + Clone,
{
    let id = id
        .parse::<Uuid>()
        .map_err(|_| ApiError::bad_request("Invalid registration id"))?;

    let registration = state.registration_service.cancel(id).await?;

    Ok((
        StatusCode::OK,
        Json(CancelRegistrationResponse {
            message: "Registration cancelled successfully".to_string(),
            cancelled_registration: registration.into(),
        }),
    ))
}
