use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::config::Config;
use crate::shared::delivery::{ResendEmailSender, TwilioSmsSender};
use crate::system::middleware::request_logger::request_logger;
use crate::usecases::u101_contact_intake::ContactIntake;

/// Состояние, доступное обработчикам
#[derive(Clone)]
pub struct AppState {
    pub intake: ContactIntake,
}

impl AppState {
    /// Собирает реальных провайдеров доставки из конфигурации
    pub fn from_config(config: &Config) -> Self {
        let email = Arc::new(ResendEmailSender::from_config(&config.email));
        let sms = Arc::new(TwilioSmsSender::from_config(&config.sms));
        Self {
            intake: ContactIntake::new(email, sms, config.email.admin_to.clone()),
        }
    }
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let contact = post(handlers::u101_contact_intake::submit)
        .fallback(handlers::u101_contact_intake::method_not_allowed);
    // Старый адрес serverless-функции, на него ещё ссылаются формы
    let legacy_contact = post(handlers::u101_contact_intake::submit_legacy)
        .fallback(handlers::u101_contact_intake::method_not_allowed);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/contact", contact)
        .route("/.netlify/functions/enviar-sms", legacy_contact)
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
