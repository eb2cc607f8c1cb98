/// quickcrop server
///
/// Upload an image, drag out a rectangle in the browser, download the crop
/// as a JPEG. Served by a synchronous tiny_http server; no JavaScript
/// frameworks required.
///
/// Run with:
///   cargo run --bin quickcrop-server --release
/// Then open http://0.0.0.0:8000 (override with QUICKCROP_ADDR).

mod handlers;
mod logging;
mod render;
mod routes;
mod util;

use tiny_http::Server;

const DEFAULT_ADDR: &str = "0.0.0.0:8000";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let addr = std::env::var("QUICKCROP_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
    let server = Server::http(&addr).expect("Failed to bind HTTP server");

    log::info!("quickcrop listening on http://{}", addr);

    // The decode/crop/encode work is synchronous and CPU-bound, so each
    // request is dispatched on its own thread to keep a slow decode from
    // stalling the accept loop. Requests share no state.
    for request in server.incoming_requests() {
        std::thread::spawn(move || {
            routes::dispatch(request);
        });
    }
}
