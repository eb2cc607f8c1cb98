use std::io::{Cursor, Read};
use tiny_http::{Request, Response};

use quickcrop::Error;

use crate::logging::RequestLog;
use crate::render::{render_page, Page};
use crate::util::multipart::{extract_boundary, extract_file};

// ---------------------------------------------------------------------------
// POST /upload
// ---------------------------------------------------------------------------

/// Receives the multipart upload, validates and normalizes the image through
/// the pipeline, and renders the crop page with the JPEG embedded as a data
/// URI. Anything that goes wrong becomes a JSON error response with the
/// status the pipeline error dictates.
pub fn handle_post(request: &mut Request, log: &RequestLog) -> Response<Cursor<Vec<u8>>> {
    let content_type = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    let boundary = match extract_boundary(&content_type) {
        Some(b) => b,
        None => {
            let err = Error::validation("No file uploaded");
            return crate::routes::error_response(log, &err);
        }
    };

    let mut body: Vec<u8> = Vec::new();
    if let Err(e) = request.as_reader().read_to_end(&mut body) {
        let err = Error::Server(format!("Error reading request body: {}", e));
        return crate::routes::error_response(log, &err);
    }

    let file_bytes = extract_file(&body, &boundary).unwrap_or_default();

    match quickcrop::upload(&file_bytes) {
        Ok(img_base64) => {
            let page = render_page(Page::Crop, |tmpl| tmpl.replace("{{IMG_BASE64}}", &img_base64));
            crate::routes::html_response(page)
        }
        Err(err) => crate::routes::error_response(log, &err),
    }
}
