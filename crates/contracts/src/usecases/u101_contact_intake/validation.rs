use std::fmt;

/// Сообщение об ошибке, которое видит пользователь
pub const PHONE_ERROR_MESSAGE: &str = "Teléfono inválido. Debe incluir código de país (+51...)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneError {
    Missing,
    MissingCountryCode,
    Malformed,
}

impl fmt::Display for PhoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = match self {
            PhoneError::Missing => "phone number is missing",
            PhoneError::MissingCountryCode => "phone number must start with '+'",
            PhoneError::Malformed => "phone number contains invalid characters",
        };
        f.write_str(detail)
    }
}

impl std::error::Error for PhoneError {}

/// Проверяет телефон: обязателен, начинается с `+`, дальше только цифры
/// и разделители (пробел, `-`, скобки). Возвращает обрезанное значение.
pub fn validate_phone(raw: Option<&str>) -> Result<&str, PhoneError> {
    let phone = raw.map(str::trim).unwrap_or("");
    if phone.is_empty() {
        return Err(PhoneError::Missing);
    }

    let rest = phone
        .strip_prefix('+')
        .ok_or(PhoneError::MissingCountryCode)?;

    let mut digits = 0usize;
    for ch in rest.chars() {
        match ch {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(PhoneError::Malformed),
        }
    }
    if digits == 0 {
        return Err(PhoneError::Malformed);
    }

    Ok(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert_eq!(validate_phone(Some("+51987654321")), Ok("+51987654321"));
        assert_eq!(validate_phone(Some("  +51 987-654-321 ")), Ok("+51 987-654-321"));
        assert_eq!(validate_phone(Some("+1 (415) 555-0100")), Ok("+1 (415) 555-0100"));
    }

    #[test]
    fn test_missing() {
        assert_eq!(validate_phone(None), Err(PhoneError::Missing));
        assert_eq!(validate_phone(Some("")), Err(PhoneError::Missing));
        assert_eq!(validate_phone(Some("   ")), Err(PhoneError::Missing));
    }

    #[test]
    fn test_without_prefix() {
        assert_eq!(
            validate_phone(Some("987654321")),
            Err(PhoneError::MissingCountryCode)
        );
        assert_eq!(
            validate_phone(Some("0051987654321")),
            Err(PhoneError::MissingCountryCode)
        );
    }

    #[test]
    fn test_malformed() {
        assert_eq!(validate_phone(Some("+")), Err(PhoneError::Malformed));
        assert_eq!(validate_phone(Some("+ - ")), Err(PhoneError::Malformed));
        assert_eq!(validate_phone(Some("+51abc")), Err(PhoneError::Malformed));
        assert_eq!(validate_phone(Some("++51")), Err(PhoneError::Malformed));
    }
}
