use std::io::{Cursor, Read};
use tiny_http::{Request, Response};

use quickcrop::Error;

use crate::logging::RequestLog;
use crate::util::form::{form_get, parse_form};

const DOWNLOAD_FILENAME: &str = "cropped_image.jpg";

// ---------------------------------------------------------------------------
// POST /crop
// ---------------------------------------------------------------------------

/// Receives the urlencoded crop form (`image` data URI + `cropData` JSON),
/// runs the crop pipeline, and streams the result back as a JPEG attachment.
/// Absent form fields are passed through as empty strings so the pipeline's
/// "missing image or crop data" rule decides the response.
pub fn handle_post(request: &mut Request, log: &RequestLog) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        let err = Error::Server(format!("Error reading request body: {}", e));
        return crate::routes::error_response(log, &err);
    }

    let pairs = parse_form(&body);
    let image = form_get(&pairs, "image").unwrap_or("");
    let crop_data = form_get(&pairs, "cropData").unwrap_or("");

    match quickcrop::crop_download(image, crop_data) {
        Ok(jpeg) => crate::routes::jpeg_download_response(jpeg, DOWNLOAD_FILENAME),
        Err(err) => crate::routes::error_response(log, &err),
    }
}
