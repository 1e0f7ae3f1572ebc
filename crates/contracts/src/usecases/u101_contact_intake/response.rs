use serde::{Deserialize, Serialize};

/// Единый JSON-конверт ответа обработчика контактов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// ID письма администратору у email-провайдера
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_admin_id: Option<String>,
    /// ID благодарственного письма (если email был указан)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_usuario_id: Option<String>,
    /// SID сообщения у SMS-провайдера (если SMS отправлялось)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_sid: Option<String>,
    /// Тот же SID под старым именем, которое читают формы serverless-функции
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

impl ContactResponse {
    pub fn ok(
        mensaje: impl Into<String>,
        email_admin_id: String,
        email_usuario_id: Option<String>,
        sms_sid: Option<String>,
    ) -> Self {
        Self {
            success: true,
            mensaje: Some(mensaje.into()),
            error: None,
            email_admin_id: Some(email_admin_id),
            email_usuario_id,
            sms_sid,
            sid: None,
        }
    }

    /// Дублирует `sms_sid` в поле `sid` для старых клиентов
    pub fn with_legacy_sid(mut self) -> Self {
        self.sid = self.sms_sid.clone();
        self
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}
