use std::sync::atomic::{AtomicU64, Ordering};

use tiny_http::Method;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Request-scoped logging collaborator.
///
/// The dispatcher builds one of these per request and hands it to the
/// handler, so every log line carries the request id, method, and path
/// without handlers touching process-wide state directly. Output still goes
/// through the `log` facade, so filtering and formatting stay with
/// env_logger.
pub struct RequestLog {
    id: u64,
    method: String,
    path: String,
}

impl RequestLog {
    pub fn new(method: &Method, path: &str) -> RequestLog {
        RequestLog {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            method: method.to_string(),
            path: path.to_owned(),
        }
    }

    pub fn warn(&self, msg: &str) {
        log::warn!("[#{} {} {}] {}", self.id, self.method, self.path, msg);
    }

    pub fn error(&self, msg: &str) {
        log::error!("[#{} {} {}] {}", self.id, self.method, self.path, msg);
    }
}
