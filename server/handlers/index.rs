use std::io::Cursor;
use tiny_http::Response;

use crate::render::{render_page, Page};

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get() -> Response<Cursor<Vec<u8>>> {
    let page = render_page(Page::Index, |tmpl| tmpl);
    crate::routes::html_response(page)
}
