use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};

use quickcrop::Error;

use crate::handlers;
use crate::logging::RequestLog;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(200),
        vec![Header::from_bytes(b"Content-Type", b"text/html; charset=utf-8").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

/// Binary JPEG body served as a download attachment.
pub fn jpeg_download_response(bytes: Vec<u8>, filename: &str) -> Response<Cursor<Vec<u8>>> {
    let len = bytes.len();
    let disposition = format!("attachment; filename={}", filename);
    Response::new(
        StatusCode(200),
        vec![
            Header::from_bytes(b"Content-Type", b"image/jpeg").unwrap(),
            Header::from_bytes(b"Content-Disposition", disposition.as_bytes()).unwrap(),
        ],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

/// JSON error body `{"detail": "<message>"}` with the status the error maps
/// to. The failure is logged here so every handler gets the same policy:
/// validation failures at warn, everything else at error.
pub fn error_response(log: &RequestLog, err: &Error) -> Response<Cursor<Vec<u8>>> {
    let status = err.status_code();
    match status {
        400 => log.warn(&format!("rejected: {}", err)),
        _ => log.error(&format!("failed: {}", err)),
    }

    let body = serde_json::json!({ "detail": err.to_string() }).to_string();
    let bytes = body.into_bytes();
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![Header::from_bytes(b"Content-Type", b"application/json").unwrap()],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    let body = b"404 Not Found".to_vec();
    let len = body.len();
    Response::new(
        StatusCode(404),
        vec![Header::from_bytes(b"Content-Type", b"text/plain").unwrap()],
        Cursor::new(body),
        Some(len),
        None,
    )
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler.
///
/// Handlers receive a `&mut Request` so the dispatcher retains ownership and
/// can call `request.respond(response)` at the end, plus a request-scoped
/// `RequestLog` for failure reporting.
pub fn dispatch(mut request: Request) {
    let method = request.method().clone();
    let path = match request.url().find('?') {
        Some(pos) => request.url()[..pos].to_owned(),
        None => request.url().to_owned(),
    };

    let log = RequestLog::new(&method, &path);

    let response = match (method, path.as_str()) {
        (Method::Get, "/") => handlers::index::handle_get(),
        (Method::Post, "/upload") => handlers::upload::handle_post(&mut request, &log),
        (Method::Post, "/crop") => handlers::crop::handle_post(&mut request, &log),
        _ => not_found(),
    };

    let _ = request.respond(response);
}
