use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Одна строка на запрос: длительность (ms), размер ответа, статус, метод и путь.
/// Размер берётся из Content-Length, тело ответа не буферизуется.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let line = format!(
        "{:>5}ms | {:>9} | {} {:>6} {}",
        duration.as_millis(),
        format_size(size),
        status.as_u16(),
        method,
        path
    );

    if status.is_server_error() {
        tracing::error!("{}", line);
    } else if status.is_client_error() {
        tracing::warn!("{}", line);
    } else {
        tracing::info!("{}", line);
    }

    response
}

/// "-" если размер неизвестен (chunked), иначе байты / KB
fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(n) if n < 1024 => format!("{} B", n),
        Some(n) => format!("{:.1} KB", n as f64 / 1024.0),
    }
}
