/// Minimal multipart/form-data parsing for the upload form.
///
/// The upload page posts a single file field, so this only needs to find the
/// boundary token and pull the bytes of the first file part out of the body.

/// Returns the index of the first occurrence of `needle` in `haystack`.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Splits `haystack` on every occurrence of `needle`, returning the pieces
/// between occurrences (excluding the needle itself).
fn split_on<'a>(haystack: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    let mut result = Vec::new();
    let mut start = 0;
    while start <= haystack.len() {
        if let Some(pos) = find_subsequence(&haystack[start..], needle) {
            result.push(&haystack[start..start + pos]);
            start += pos + needle.len();
        } else {
            result.push(&haystack[start..]);
            break;
        }
    }
    result
}

/// Extracts the boundary token from a Content-Type header value like
/// `multipart/form-data; boundary=----WebKitFormBoundaryXXX`.
pub fn extract_boundary(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(|s| s.trim())
        .find(|s| s.starts_with("boundary="))
        .map(|s| s["boundary=".len()..].trim_matches('"').to_owned())
}

/// Extracts the raw bytes of the first file part from a multipart/form-data
/// body. Returns `None` if not found or on parse error.
pub fn extract_file(body: &[u8], boundary: &str) -> Option<Vec<u8>> {
    let delimiter = format!("--{}", boundary);
    let delim_bytes = delimiter.as_bytes();
    let parts = split_on(body, delim_bytes);

    for part in parts {
        let sep = b"\r\n\r\n";
        if let Some(sep_pos) = find_subsequence(part, sep) {
            let header_section = &part[..sep_pos];
            if header_section
                .windows(8)
                .any(|w| w.eq_ignore_ascii_case(b"filename"))
            {
                let data_start = sep_pos + sep.len();
                let raw = &part[data_start..];
                let trimmed = raw.strip_suffix(b"\r\n").unwrap_or(raw);
                return Some(trimmed.to_vec());
            }
        }
    }
    None
}
