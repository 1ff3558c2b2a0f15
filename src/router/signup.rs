use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::http::HttpResponse;
use crate::signup::SignupBody;

/// Handler to sign a new account up.
pub async fn handler(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> HttpResponse {
    state.controller.handle(body.into()).await
}

#[cfg(test)]
pub(super) mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;

    use crate::account::AccountRepository;
    use crate::email::EmailValidator;
    use crate::error::{Result, ServerError};
    use crate::signup::SignupController;
    use crate::{app, make_request, router};

    #[tokio::test]
    async fn test_signup_handler_creates_account() {
        let app = app(router::state());

        let response = make_request(
            app,
            Method::POST,
            "/signup",
            json!({
                "name": "any_name",
                "email": "valid@example.com",
                "password": "any_password",
                "passwordConfirmation": "any_password",
            })
            .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["name"], "any_name");
        assert_eq!(body["email"], "valid@example.com");
        assert_eq!(body["password"], "any_password");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[tokio::test]
    async fn test_signup_handler_reports_first_missing_field() {
        let app = app(router::state());

        let response = make_request(
            app,
            Method::POST,
            "/signup",
            json!({ "name": "any_name" }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({ "error": "missing_param", "param": "email" })
        );
    }

    #[tokio::test]
    async fn test_signup_handler_rejects_malformed_email() {
        let app = app(router::state());

        let response = make_request(
            app,
            Method::POST,
            "/signup",
            json!({
                "name": "any_name",
                "email": "invalid_email",
                "password": "any_password",
                "passwordConfirmation": "any_password",
            })
            .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            json!({ "error": "invalid_param", "param": "email" })
        );
    }

    struct ExplodingValidator;

    impl EmailValidator for ExplodingValidator {
        fn is_valid(&self, _email: &str) -> Result<bool> {
            Err(ServerError::internal("boom"))
        }
    }

    #[tokio::test]
    async fn test_signup_handler_hides_collaborator_failures() {
        let mut state = router::state();
        state.controller = SignupController::new(
            Arc::new(ExplodingValidator),
            Arc::new(AccountRepository::new()),
        );
        let app = app(state);

        let response = make_request(
            app,
            Method::POST,
            "/signup",
            json!({
                "name": "any_name",
                "email": "valid@example.com",
                "password": "any_password",
                "passwordConfirmation": "any_password",
            })
            .to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": "server_error" }));
    }
}
