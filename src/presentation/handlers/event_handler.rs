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
    domain::{models::event::Event, repositories::event_repository::EventRepository},
    presentation::{error::ApiError, extract::ApiJson},
    usecase::event_usecase::EventUsecase,
};

// Request

/// json for event creation
#[derive(Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

// Response

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventInfo {
    fn from(event: Event) -> Self {
        Self {
            id: event.id().as_uuid().to_string(),
            title: event.title().to_string(),
            description: event.description().to_string(),
            date: event.date(),
            created_at: event.created_at(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub message: String,
    pub event: EventInfo,
}

#[derive(Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub message: String,
    pub count: usize,
    pub events: Vec<EventInfo>,
}

#[derive(Serialize, Deserialize)]
pub struct GetEventResponse {
    pub message: String,
    pub event: EventInfo,
}

/* Router Function and Handler Function */

/// Suppose to be merged into the main router
pub fn create_event_router<E>(event_service: EventUsecase<E>) -> Router
where
    E: EventRepository + Send + Sync + 'static + Clone,
{
    let state = EventState {
        event_service: Arc::new(event_service),
    };

    Router::new()
        .route("/events", post(create_event::<E>).get(list_events::<E>))
        .route("/events/{id}", get(get_event::<E>))
        .with_state(state)
}

#[derive(Clone)]
pub struct EventState<E: EventRepository + Clone> {
    pub event_service: Arc<EventUsecase<E>>,
}

async fn create_event<E>(
    State(state): State<EventState<E>>,
    ApiJson(payload): ApiJson<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    E: EventRepository + Send + Sync + Clone,
{
    let event = state
        .event_service
        .create_event(payload.title, payload.description, payload.date)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateEventResponse {
            message: "Event created successfully".to_string(),
            event: event.into(),
        }),
    ))
}

async fn list_events<E>(
    State(state): State<EventState<E>>,
) -> Result<impl IntoResponse, ApiError>
where
    E: EventRepository + Send + Sync + Clone,
{
    let events = state.event_service.list_events().await?;

    let events: Vec<EventInfo> = events.into_iter().map(EventInfo::from).collect();
    Ok((
        StatusCode::OK,
        Json(ListEventsResponse {
            message: "Events retrieved successfully".to_string(),
            count: events.len(),
            events,
        }),
    ))
}

async fn get_event<E>(
    State(state): State<EventState<E>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    E: EventRepository + Send + Sync + Clone,
{
    // parsed by hand so a malformed id still gets the JSON error envelope
    let id = id
        .parse::<Uuid>()
        .map_err(|_| ApiError::bad_request("Invalid event id"))?;

    let event = state.event_service.get_event(id).await?;

    Ok((
        StatusCode::OK,
        Json(GetEventResponse {
            message: "Event retrieved successfully".to_string(),
            event: event.into(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use http_body_util::BodyExt;
    use rstest::*;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::{error::RepositoryError, models::event::EventId};

    const KNOWN_EVENT_ID: &str = "00000000-0000-0000-0000-000000000002";

    fn sample_event(id: Uuid) -> Event {
        Event::reconstruct(
            EventId::from_uuid(id),
            "RustConf".to_string(),
            "Annual Rust conference".to_string(),
            Utc::now(),
            Utc::now(),
        )
    }

    // mock repository interface
    #[derive(Clone)]
    struct MockEventRepository;

    #[async_trait]
    impl EventRepository for MockEventRepository {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, RepositoryError> {
            if id.to_string() == KNOWN_EVENT_ID {
                Ok(Some(sample_event(id)))
            } else {
                Ok(None)
            }
        }

        async fn insert(&self, _event: &Event) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
            Ok(vec![sample_event(Uuid::new_v4())])
        }
    }

    #[fixture]
    fn test_app() -> Router {
        create_event_router(EventUsecase::new(MockEventRepository))
    }

    async fn post_event(app: Router, body: String) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/events")
                .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn get_path(app: Router, path: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("GET")
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_event_positive(test_app: Router) {
        let request = CreateEventRequest {
            title: "RustConf".to_string(),
            description: "Annual Rust conference".to_string(),
            date: Utc::now(),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_event(test_app, body).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let created: CreateEventResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(created.event.title, "RustConf");
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_event_blank_title_negative(test_app: Router) {
        let request = CreateEventRequest {
            title: "  ".to_string(),
            description: "Annual Rust conference".to_string(),
            date: Utc::now(),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_event(test_app, body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_events_positive(test_app: Router) {
        let response = get_path(test_app, "/events").await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let listed: ListEventsResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(listed.count, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_event_positive(test_app: Router) {
        let response = get_path(test_app, &format!("/events/{KNOWN_EVENT_ID}")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let fetched: GetEventResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(fetched.event.id, KNOWN_EVENT_ID);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_event_malformed_id_negative(test_app: Router) {
        let response = get_path(test_app, "/events/not-a-uuid").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // the error body is still the JSON envelope
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let error: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error["error"], "Invalid event id");
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_event_unknown_id_negative(test_app: Router) {
        let unknown = Uuid::new_v4();
        let response = get_path(test_app, &format!("/events/{unknown}")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let error: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error["error"], "Event not found");
    }
}
