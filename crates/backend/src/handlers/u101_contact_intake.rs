use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::usecases::u101_contact_intake::ContactResponse;
use serde_json::json;

use crate::routes::AppState;
use crate::usecases::u101_contact_intake::{IntakeError, IntakeOutcome};

const SUCCESS_MESSAGE: &str = "Mensaje enviado correctamente";

/// POST /api/contact
///
/// Тело читается как строка: невалидный JSON — это такая же ошибка
/// обработки, как и сбой провайдера (500), а не отказ экстрактора.
pub async fn submit(State(state): State<AppState>, body: String) -> Response {
    handle(&state, &body, false).await
}

/// POST /.netlify/functions/enviar-sms
///
/// Старый адрес: в ответе дополнительно поле `sid`
pub async fn submit_legacy(State(state): State<AppState>, body: String) -> Response {
    handle(&state, &body, true).await
}

async fn handle(state: &AppState, body: &str, legacy: bool) -> Response {
    match state.intake.submit_raw(body).await {
        Ok(outcome) => {
            let mut response = success_response(outcome);
            if legacy {
                response = response.with_legacy_sid();
            }
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            let status = status_for(&e);
            (status, Json(ContactResponse::failure(e.to_string()))).into_response()
        }
    }
}

/// Любой метод кроме POST
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Método no permitido" })),
    )
        .into_response()
}

fn success_response(outcome: IntakeOutcome) -> ContactResponse {
    ContactResponse::ok(
        SUCCESS_MESSAGE,
        outcome.email_admin_id,
        outcome.email_usuario_id,
        outcome.sms_sid,
    )
}

fn status_for(error: &IntakeError) -> StatusCode {
    match error {
        IntakeError::InvalidPhone(_) => StatusCode::BAD_REQUEST,
        IntakeError::InvalidBody(_) | IntakeError::Delivery(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u101_contact_intake::service::tests::{FakeEmail, FakeSms};
    use crate::usecases::u101_contact_intake::ContactIntake;
    use std::sync::Arc;

    fn state(email: FakeEmail, sms: FakeSms) -> AppState {
        AppState {
            intake: ContactIntake::new(Arc::new(email), Arc::new(sms), "admin@naturafy.pe"),
        }
    }

    async fn call(state: AppState, body: &str) -> (StatusCode, serde_json::Value) {
        let response = submit(State(state), body.to_string()).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let (status, body) = call(
            state(FakeEmail::default(), FakeSms::default()),
            r#"{"nombre":"Ana","telefono":"+51987654321","email":"ana@example.com"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "mensaje": SUCCESS_MESSAGE,
                "email_admin_id": "em_1",
                "email_usuario_id": "em_2",
                "sms_sid": "SM1"
            })
        );
    }

    #[tokio::test]
    async fn test_bad_phone_is_400() {
        let (status, body) = call(
            state(FakeEmail::default(), FakeSms::default()),
            r#"{"nombre":"Ana","telefono":"987654321"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            "Teléfono inválido. Debe incluir código de país (+51...)"
        );
    }

    #[tokio::test]
    async fn test_missing_phone_is_400() {
        let (status, _) = call(
            state(FakeEmail::default(), FakeSms::default()),
            r#"{"nombre":"Ana"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_json_is_500() {
        let (status, body) = call(state(FakeEmail::default(), FakeSms::default()), "not json").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("expected"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_500_with_message() {
        let email = FakeEmail {
            fail_on: Some(0),
            ..Default::default()
        };
        let (status, body) = call(
            state(email, FakeSms::default()),
            r#"{"telefono":"+51987654321"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "fake-email API error (HTTP 422): Invalid `to` field"
            })
        );
    }

    #[tokio::test]
    async fn test_array_body_is_400() {
        let email = FakeEmail::default();
        let (status, body) = call(
            state(email, FakeSms::default()),
            r#"["Ana","+51987654321"]"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Teléfono inválido. Debe incluir código de país (+51...)"
            })
        );
    }

    #[tokio::test]
    async fn test_legacy_submit_adds_sid() {
        let response = submit_legacy(
            State(state(FakeEmail::default(), FakeSms::default())),
            r#"{"telefono":"+51987654321"}"#.to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["sid"], "SM1");
        assert_eq!(body["sms_sid"], "SM1");
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let response = method_not_allowed().await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
