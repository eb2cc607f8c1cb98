/// Page renderer for the quickcrop server.
///
/// Two HTML templates with placeholder tokens like `{{TOKEN}}`, loaded at
/// compile time. `render_page` accepts a closure that does page-specific
/// placeholder substitution; placeholders the closure leaves unfilled are
/// blanked so raw `{{TOKEN}}` strings never leak to the browser.

const INDEX_TEMPLATE: &str = include_str!("assets/index.html");
const CROP_TEMPLATE: &str = include_str!("assets/crop.html");

#[derive(Clone, Copy)]
pub enum Page {
    Index,
    Crop,
}

pub fn render_page<F>(page: Page, fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let template = match page {
        Page::Index => INDEX_TEMPLATE,
        Page::Crop => CROP_TEMPLATE,
    };
    blank_remaining(fill(template.to_owned()))
}

/// Replaces any `{{TOKEN}}` that wasn't already substituted with an empty
/// string. All tokens should be handled by the caller; a missed token should
/// produce a clean page rather than leaking debug info.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}
