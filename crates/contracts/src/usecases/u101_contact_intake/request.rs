use serde::{Deserialize, Serialize};

/// Данные формы контакта/регистрации.
///
/// Все поля необязательны на уровне JSON: обязательность телефона
/// проверяется в `validation::validate_phone`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
    /// Согласие на SMS. Отсутствие поля = согласие.
    #[serde(default)]
    pub recibir_sms: Option<bool>,
}

impl ContactRequest {
    pub fn display_name(&self) -> &str {
        self.nombre.as_deref().map(str::trim).unwrap_or("")
    }

    /// Email отправителя, если он указан и не пустой
    pub fn reply_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    pub fn message_text(&self) -> &str {
        self.mensaje.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn wants_sms(&self) -> bool {
        self.recibir_sms.unwrap_or(true)
    }
}
