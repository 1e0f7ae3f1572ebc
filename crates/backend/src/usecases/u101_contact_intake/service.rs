use std::sync::Arc;

use contracts::usecases::u101_contact_intake::{validate_phone, ContactRequest, PhoneError};
use thiserror::Error;
use tracing::Instrument;

use super::messages;
use crate::shared::delivery::{DeliveryError, EmailSender, SmsSender};

/// Ошибки обработки формы контакта
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Тело запроса не является JSON-объектом формы
    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Teléfono inválido. Debe incluir código de país (+51...)")]
    InvalidPhone(PhoneError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// ID сообщений у провайдеров после успешной обработки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeOutcome {
    pub email_admin_id: String,
    pub email_usuario_id: Option<String>,
    pub sms_sid: Option<String>,
}

/// Приём формы контакта: валидация и последовательная доставка
/// (письмо администратору → письмо пользователю → SMS).
///
/// Ошибка любого шага прерывает оставшиеся шаги; уже отправленные
/// сообщения не отзываются.
#[derive(Clone)]
pub struct ContactIntake {
    email: Arc<dyn EmailSender>,
    sms: Arc<dyn SmsSender>,
    admin_to: String,
}

impl ContactIntake {
    pub fn new(
        email: Arc<dyn EmailSender>,
        sms: Arc<dyn SmsSender>,
        admin_to: impl Into<String>,
    ) -> Self {
        Self {
            email,
            sms,
            admin_to: admin_to.into(),
        }
    }

    /// Разбирает сырое тело запроса и обрабатывает форму
    pub async fn submit_raw(&self, body: &str) -> Result<IntakeOutcome, IntakeError> {
        let request = parse_request(body)?;
        self.submit(request).await
    }

    pub async fn submit(&self, request: ContactRequest) -> Result<IntakeOutcome, IntakeError> {
        let intake_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!("contact_intake", %intake_id);
        self.process(request).instrument(span).await
    }

    async fn process(&self, request: ContactRequest) -> Result<IntakeOutcome, IntakeError> {
        let telefono = validate_phone(request.telefono.as_deref()).map_err(|e| {
            tracing::warn!("Rejected contact form: {}", e);
            IntakeError::InvalidPhone(e)
        })?;

        tracing::info!(
            "New contact: nombre='{}', email={}, sms={}",
            request.display_name(),
            request.reply_email().is_some(),
            request.wants_sms()
        );

        // 1. Уведомление администратору
        let email_admin_id = self
            .email
            .send_email(messages::admin_email(&request, telefono, &self.admin_to))
            .await
            .inspect_err(|e| tracing::error!("Admin email failed: {}", e))?;
        tracing::info!("Admin email sent: id={}", email_admin_id);

        // 2. Благодарность пользователю, если указан email
        let email_usuario_id = match request.reply_email() {
            Some(to) => {
                let id = self
                    .email
                    .send_email(messages::thank_you_email(&request, to))
                    .await
                    .inspect_err(|e| tracing::error!("Thank-you email failed: {}", e))?;
                tracing::info!("Thank-you email sent: id={}", id);
                Some(id)
            }
            None => None,
        };

        // 3. SMS, если пользователь не отказался
        let sms_sid = if request.wants_sms() {
            let sid = self
                .sms
                .send_sms(messages::sms(&request, telefono))
                .await
                .inspect_err(|e| tracing::error!("SMS failed: {}", e))?;
            tracing::info!("SMS sent: sid={}", sid);
            Some(sid)
        } else {
            None
        };

        Ok(IntakeOutcome {
            email_admin_id,
            email_usuario_id,
            sms_sid,
        })
    }
}

/// Поля формы берутся только из JSON-объекта. Массив, строка или число
/// не содержат `telefono` и дальше отклоняются как форма без телефона;
/// `null` и неверные типы полей остаются ошибкой разбора.
fn parse_request(body: &str) -> Result<ContactRequest, IntakeError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Object(_) | serde_json::Value::Null => {
            Ok(serde_json::from_value(value)?)
        }
        _ => Ok(ContactRequest::default()),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::delivery::{OutgoingEmail, OutgoingSms};
    use async_trait::async_trait;
    use contracts::usecases::u101_contact_intake::PHONE_ERROR_MESSAGE;
    use std::sync::Mutex;

    /// Email-провайдер в памяти; `fail_on` — номер вызова (с 0), который упадёт
    #[derive(Default)]
    pub(crate) struct FakeEmail {
        pub sent: Mutex<Vec<OutgoingEmail>>,
        pub fail_on: Option<usize>,
    }

    #[async_trait]
    impl EmailSender for FakeEmail {
        async fn send_email(&self, email: OutgoingEmail) -> Result<String, DeliveryError> {
            let mut sent = self.sent.lock().unwrap();
            if self.fail_on == Some(sent.len()) {
                return Err(DeliveryError::Api {
                    provider: "fake-email",
                    status: 422,
                    message: "Invalid `to` field".into(),
                });
            }
            sent.push(email);
            Ok(format!("em_{}", sent.len()))
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeSms {
        pub sent: Mutex<Vec<OutgoingSms>>,
        pub fail: bool,
    }

    #[async_trait]
    impl SmsSender for FakeSms {
        async fn send_sms(&self, sms: OutgoingSms) -> Result<String, DeliveryError> {
            if self.fail {
                return Err(DeliveryError::NotConfigured {
                    provider: "fake-sms",
                    detail: "no credentials".into(),
                });
            }
            let mut sent = self.sent.lock().unwrap();
            sent.push(sms);
            Ok(format!("SM{}", sent.len()))
        }
    }

    fn intake(email: Arc<FakeEmail>, sms: Arc<FakeSms>) -> ContactIntake {
        ContactIntake::new(email, sms, "admin@naturafy.pe")
    }

    fn full_request() -> ContactRequest {
        ContactRequest {
            nombre: Some("Ana".into()),
            telefono: Some("+51987654321".into()),
            email: Some("ana@example.com".into()),
            mensaje: Some("Hola".into()),
            recibir_sms: None,
        }
    }

    #[tokio::test]
    async fn test_full_submission_runs_all_steps_in_order() {
        let email = Arc::new(FakeEmail::default());
        let sms = Arc::new(FakeSms::default());

        let outcome = intake(email.clone(), sms.clone())
            .submit(full_request())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            IntakeOutcome {
                email_admin_id: "em_1".into(),
                email_usuario_id: Some("em_2".into()),
                sms_sid: Some("SM1".into()),
            }
        );
        let sent = email.sent.lock().unwrap();
        assert_eq!(sent[0].to, "admin@naturafy.pe");
        assert_eq!(sent[1].to, "ana@example.com");
        assert_eq!(sms.sent.lock().unwrap()[0].to, "+51987654321");
    }

    #[tokio::test]
    async fn test_optional_steps_skipped() {
        let email = Arc::new(FakeEmail::default());
        let sms = Arc::new(FakeSms::default());
        let request = ContactRequest {
            email: None,
            recibir_sms: Some(false),
            ..full_request()
        };

        let outcome = intake(email.clone(), sms.clone())
            .submit(request)
            .await
            .unwrap();

        assert_eq!(outcome.email_usuario_id, None);
        assert_eq!(outcome.sms_sid, None);
        assert_eq!(email.sent.lock().unwrap().len(), 1);
        assert!(sms.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_phone_sends_nothing() {
        let email = Arc::new(FakeEmail::default());
        let sms = Arc::new(FakeSms::default());
        let request = ContactRequest {
            telefono: Some("987654321".into()),
            ..full_request()
        };

        let err = intake(email.clone(), sms.clone())
            .submit(request)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            IntakeError::InvalidPhone(PhoneError::MissingCountryCode)
        ));
        assert_eq!(err.to_string(), PHONE_ERROR_MESSAGE);
        assert!(email.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_email_failure_aborts_sms() {
        let email = Arc::new(FakeEmail {
            fail_on: Some(1),
            ..Default::default()
        });
        let sms = Arc::new(FakeSms::default());

        let err = intake(email.clone(), sms.clone())
            .submit(full_request())
            .await
            .unwrap_err();

        assert!(matches!(err, IntakeError::Delivery(_)));
        assert_eq!(
            err.to_string(),
            "fake-email API error (HTTP 422): Invalid `to` field"
        );
        // Письмо администратору уже ушло, SMS — нет
        assert_eq!(email.sent.lock().unwrap().len(), 1);
        assert!(sms.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sms_failure_is_reported() {
        let email = Arc::new(FakeEmail::default());
        let sms = Arc::new(FakeSms {
            fail: true,
            ..Default::default()
        });

        let err = intake(email, sms).submit(full_request()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "fake-sms is not configured: no credentials"
        );
    }

    #[tokio::test]
    async fn test_submit_raw_rejects_malformed_json() {
        let email = Arc::new(FakeEmail::default());
        let sms = Arc::new(FakeSms::default());

        let err = intake(email, sms).submit_raw("{nombre").await.unwrap_err();
        assert!(matches!(err, IntakeError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn test_submit_raw_array_body_has_no_phone() {
        let email = Arc::new(FakeEmail::default());
        let sms = Arc::new(FakeSms::default());

        let err = intake(email.clone(), sms.clone())
            .submit_raw(r#"["Ana","+51987654321"]"#)
            .await
            .unwrap_err();

        assert!(matches!(err, IntakeError::InvalidPhone(PhoneError::Missing)));
        assert!(email.sent.lock().unwrap().is_empty());
        assert!(sms.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_parse_request_shapes() {
        let request = parse_request(r#"{"telefono":"+51987654321"}"#).unwrap();
        assert_eq!(request.telefono.as_deref(), Some("+51987654321"));

        assert_eq!(parse_request(r#""+51987654321""#).unwrap(), ContactRequest::default());
        assert_eq!(parse_request("42").unwrap(), ContactRequest::default());

        assert!(matches!(parse_request("null"), Err(IntakeError::InvalidBody(_))));
        assert!(matches!(
            parse_request(r#"{"telefono":51987654321}"#),
            Err(IntakeError::InvalidBody(_))
        ));
    }
}
