use std::env;
use url::Url;

pub const DEFAULT_PORT: u16 = 8080;

pub fn resolve_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// The worker's own location, used as the base for relative navigation targets.
pub fn resolve_scope(port: u16) -> Result<Url, url::ParseError> {
    match env::var("PUSH_ROUTER_SCOPE") {
        Ok(scope) => Url::parse(&scope),
        Err(_) => Url::parse(&format!("http://localhost:{port}/")),
    }
}
