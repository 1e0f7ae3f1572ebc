use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{extract_error_message, http_client, DeliveryError, EmailSender, OutgoingEmail};
use crate::shared::config::EmailConfig;

const PROVIDER: &str = "resend";

/// Клиент email API в формате Resend (`POST /emails`)
pub struct ResendEmailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    from: String,
}

#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailReply {
    id: String,
}

impl ResendEmailSender {
    pub fn from_config(config: &EmailConfig) -> Self {
        Self {
            client: http_client(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            from: config.from.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.api_url)
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<String, DeliveryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DeliveryError::NotConfigured {
                provider: PROVIDER,
                detail: "RESEND_API_KEY is not set".to_string(),
            })?;

        let body = SendEmailBody {
            from: &self.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|source| DeliveryError::Network {
                provider: PROVIDER,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Api {
                provider: PROVIDER,
                status: status.as_u16(),
                message: extract_error_message(&error_body),
            });
        }

        let reply: SendEmailReply =
            response
                .json()
                .await
                .map_err(|e| DeliveryError::InvalidResponse {
                    provider: PROVIDER,
                    detail: e.to_string(),
                })?;

        tracing::debug!("Email '{}' accepted by {}: id={}", email.subject, PROVIDER, reply.id);
        Ok(reply.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> EmailConfig {
        EmailConfig {
            api_url: "https://api.resend.com/".into(),
            from: "Naturafy <hola@naturafy.pe>".into(),
            admin_to: "contacto@naturafy.pe".into(),
            api_key: api_key.map(str::to_string),
        }
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let sender = ResendEmailSender::from_config(&config(Some("re_1")));
        assert_eq!(sender.endpoint(), "https://api.resend.com/emails");
    }

    #[test]
    fn test_body_shape() {
        let body = SendEmailBody {
            from: "a@b.c",
            to: ["d@e.f"],
            subject: "Hola",
            html: "<p>hi</p>",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["to"], serde_json::json!(["d@e.f"]));
        assert_eq!(json["subject"], "Hola");
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let sender = ResendEmailSender::from_config(&config(None));
        let err = sender
            .send_email(OutgoingEmail {
                to: "d@e.f".into(),
                subject: "Hola".into(),
                html: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DeliveryError::NotConfigured { .. }));
    }
}
