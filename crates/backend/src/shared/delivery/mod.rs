//! Внешние провайдеры доставки: email и SMS.
//!
//! Провайдеры непрозрачны для обработчика контактов: он видит только
//! трейты `EmailSender` / `SmsSender` и ID сообщения в ответ.

pub mod resend;
pub mod twilio;

use async_trait::async_trait;
use thiserror::Error;

pub use resend::ResendEmailSender;
pub use twilio::TwilioSmsSender;

/// Ошибки провайдеров доставки
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("{provider} is not configured: {detail}")]
    NotConfigured {
        provider: &'static str,
        detail: String,
    },

    #[error("{provider} request failed: {source}")]
    Network {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error (HTTP {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("{provider} returned an unexpected response: {detail}")]
    InvalidResponse {
        provider: &'static str,
        detail: String,
    },
}

/// Исходящее письмо (HTML уже собран)
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Исходящее SMS
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingSms {
    pub to: String,
    pub body: String,
}

/// Трейт для email-провайдера
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Отправить письмо, вернуть ID сообщения у провайдера
    async fn send_email(&self, email: OutgoingEmail) -> Result<String, DeliveryError>;
}

/// Трейт для SMS-провайдера
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Отправить SMS, вернуть SID сообщения у провайдера
    async fn send_sms(&self, sms: OutgoingSms) -> Result<String, DeliveryError>;
}

/// HTTP клиент с таймаутом для вызовов провайдеров
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to build HTTP client with timeout, using default: {}", e);
            reqwest::Client::new()
        })
}

/// Достаёт текст ошибки из JSON-ответа провайдера (поле `message`),
/// иначе возвращает тело как есть
pub(crate) fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"code":21211,"message":"Invalid 'To' Phone Number"}"#),
            "Invalid 'To' Phone Number"
        );
        assert_eq!(extract_error_message("  Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn test_error_display() {
        let err = DeliveryError::Api {
            provider: "twilio",
            status: 400,
            message: "Invalid 'To' Phone Number".into(),
        };
        assert_eq!(
            err.to_string(),
            "twilio API error (HTTP 400): Invalid 'To' Phone Number"
        );
    }
}
