use gloo_net::http::Request;

use super::sections::Section;

/// Загружает HTML-фрагмента раздела из `./tabs/<file>`
pub async fn fetch_fragment(section: Section) -> Result<String, String> {
    let file = section.fragment_file();

    let response = Request::get(&section.fragment_url())
        .send()
        .await
        .map_err(|e| format!("Failed to load {}: {}", file, e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to load {} (HTTP {})",
            file,
            response.status()
        ));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read {}: {}", file, e))
}
