use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Build the `Authorization` header value for HTTP Basic authentication
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}
