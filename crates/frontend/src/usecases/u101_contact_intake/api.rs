use contracts::usecases::u101_contact_intake::{ContactRequest, ContactResponse};
use gloo_net::http::Request;

const BASE_URL: &str = "/api/contact";

/// Отправить форму контакта.
///
/// Ответы 400/500 тоже несут `ContactResponse` с полем `error`,
/// поэтому тело разбирается независимо от статуса.
pub async fn submit_contact(request: &ContactRequest) -> Result<ContactResponse, String> {
    let response = Request::post(BASE_URL)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    match response.json::<ContactResponse>().await {
        Ok(body) => Ok(body),
        Err(e) => Err(format!("HTTP {}: failed to parse response: {}", status, e)),
    }
}
