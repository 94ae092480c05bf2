//! promhook offline encoder.
//!
//! Reads one statistics payload (JSON) from stdin and writes the Prometheus
//! exposition text to stdout. Smoke and debugging tool only; the production
//! transport and registration loop are owned by the external service layer.

use std::io::Read;

use tracing_subscriber::{fmt, EnvFilter};

use promhook_adapter::{config, service::AdapterService};

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "promhook.yaml".to_string());
    let cfg = config::load_from_file(&path).expect("config load failed");

    let mut svc = AdapterService::new(cfg);
    svc.start().expect("start failed");
    tracing::debug!(route = ?svc.route_descriptor(), "registration descriptor");

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .expect("read stdin failed");

    match svc.handle_notify(&raw) {
        Ok(resp) => print!("{}", resp.answer),
        Err(e) => {
            tracing::error!(code = e.error_code().as_str(), "encode failed: {e}");
            svc.stop();
            std::process::exit(1);
        }
    }

    svc.stop();
}
