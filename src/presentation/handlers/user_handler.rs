use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{models::user::User, repositories::user_repository::UserRepository},
    presentation::{error::ApiError, extract::ApiJson},
    usecase::user_usecase::UserUsecase,
};

// Request

/// json for user creation
#[derive(Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

// Response

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id().as_uuid().to_string(),
            name: user.name().to_string(),
            email: user.email().as_str().to_string(),
            created_at: user.created_at(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: UserInfo,
}

#[derive(Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub message: String,
    pub count: usize,
    pub users: Vec<UserInfo>,
}

/* Router Function and Handler Function */

/// Suppose to be merged into the main router
pub fn create_user_router<U>(user_service: UserUsecase<U>) -> Router
where
    U: UserRepository + Send + Sync + 'static + Clone,
{
    let state = UserState {
        user_service: Arc::new(user_service),
    };

    Router::new()
        .route("/users", post(create_user::<U>).get(list_users::<U>))
        .with_state(state)
}

#[derive(Clone)]
pub struct UserState<U: UserRepository + Clone> {
    pub user_service: Arc<UserUsecase<U>>,
}

async fn create_user<U>(
    State(state): State<UserState<U>>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserRepository + Send + Sync + Clone,
{
    let user = state
        .user_service
        .create_user(payload.name, payload.email)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully".to_string(),
            user: user.into(),
        }),
    ))
}

async fn list_users<U>(
    State(state): State<UserState<U>>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserRepository + Send + Sync + Clone,
{
    let users = state.user_service.list_users().await?;

    let users: Vec<UserInfo> = users.into_iter().map(UserInfo::from).collect();
    Ok((
        StatusCode::OK,
        Json(ListUsersResponse {
            message: "Users retrieved successfully".to_string(),
            count: users.len(),
            users,
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
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        error::RepositoryError,
        models::user::{EmailAddress, UserId},
    };

    const TAKEN_EMAIL: &str = "taken@example.com";

    fn sample_user(email: &str) -> User {
        User::reconstruct(
            UserId::from_uuid(Uuid::new_v4()),
            "Test User".to_string(),
            EmailAddress::new(email).unwrap(),
            Utc::now(),
        )
    }

    // mock repository interface
    #[derive(Clone)]
    struct MockUserRepository;

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_email(
            &self,
            email: &EmailAddress,
        ) -> Result<Option<User>, RepositoryError> {
            if email.as_str() == TAKEN_EMAIL {
                Ok(Some(sample_user(TAKEN_EMAIL)))
            } else {
                Ok(None)
            }
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }

        async fn insert(&self, _user: &User) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn list(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(vec![
                sample_user("alice@example.com"),
                sample_user("bob@example.com"),
            ])
        }
    }

    #[fixture]
    fn test_app() -> Router {
        create_user_router(UserUsecase::new(MockUserRepository))
    }

    async fn post_user(app: Router, body: String) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_user_positive(test_app: Router) {
        let request = CreateUserRequest {
            name: "Alice".to_string(),
            email: " Alice@Example.com ".to_string(),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_user(test_app, body).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let created: CreateUserResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(created.message, "User created successfully");
        assert_eq!(created.user.name, "Alice");
        // email comes back normalized
        assert_eq!(created.user.email, "alice@example.com");
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_user_duplicate_email_negative(test_app: Router) {
        let request = CreateUserRequest {
            name: "Someone".to_string(),
            email: TAKEN_EMAIL.to_string(),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_user(test_app, body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let error: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error["error"], "User with this email already exists");
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_user_invalid_email_negative(test_app: Router) {
        let request = CreateUserRequest {
            name: "Someone".to_string(),
            email: "not-an-email".to_string(),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_user(test_app, body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_user_blank_name_negative(test_app: Router) {
        let request = CreateUserRequest {
            name: "   ".to_string(),
            email: "new@example.com".to_string(),
        };
        let body = serde_json::to_string(&request).unwrap();

        let response = post_user(test_app, body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_user_malformed_body_negative(test_app: Router) {
        let response = post_user(test_app, "{not json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // the error body is still the JSON envelope
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let error: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(error["error"].is_string());
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_users_positive(test_app: Router) {
        let response = test_app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let listed: ListUsersResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(listed.count, 2);
        assert_eq!(listed.users.len(), 2);
    }
}
