use async_trait::async_trait;
use serde::Deserialize;

use super::{extract_error_message, http_client, DeliveryError, OutgoingSms, SmsSender};
use crate::shared::config::SmsConfig;

const PROVIDER: &str = "twilio";

/// Клиент Twilio Messages API
pub struct TwilioSmsSender {
    client: reqwest::Client,
    api_url: String,
    account_sid: Option<String>,
    auth_token: Option<String>,
    messaging_service_sid: String,
}

#[derive(Debug, Deserialize)]
struct MessageReply {
    sid: String,
}

impl TwilioSmsSender {
    pub fn from_config(config: &SmsConfig) -> Self {
        Self {
            client: http_client(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            messaging_service_sid: config.messaging_service_sid.clone(),
        }
    }

    fn endpoint(&self, account_sid: &str) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_url, account_sid
        )
    }

    fn credentials(&self) -> Result<(&str, &str), DeliveryError> {
        let not_configured = |detail: &str| DeliveryError::NotConfigured {
            provider: PROVIDER,
            detail: detail.to_string(),
        };
        let sid = self
            .account_sid
            .as_deref()
            .ok_or_else(|| not_configured("TWILIO_ACCOUNT_SID is not set"))?;
        let token = self
            .auth_token
            .as_deref()
            .ok_or_else(|| not_configured("TWILIO_AUTH_TOKEN is not set"))?;
        if self.messaging_service_sid.is_empty() {
            return Err(not_configured("messaging service SID is not set"));
        }
        Ok((sid, token))
    }
}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send_sms(&self, sms: OutgoingSms) -> Result<String, DeliveryError> {
        let (account_sid, auth_token) = self.credentials()?;

        let form = [
            ("To", sms.to.as_str()),
            ("MessagingServiceSid", self.messaging_service_sid.as_str()),
            ("Body", sms.body.as_str()),
        ];

        let response = self
            .client
            .post(self.endpoint(account_sid))
            .basic_auth(account_sid, Some(auth_token))
            .form(&form)
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

        let reply: MessageReply =
            response
                .json()
                .await
                .map_err(|e| DeliveryError::InvalidResponse {
                    provider: PROVIDER,
                    detail: e.to_string(),
                })?;

        tracing::debug!("SMS accepted by {}: sid={}", PROVIDER, reply.sid);
        Ok(reply.sid)
    }
}
