//! HTTP transport over ureq
//!
//! ureq is blocking, so every request runs on `spawn_blocking`.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use ureq::{Agent, RequestBuilder};

use super::{HttpMethod, Transport, TransportError};
use crate::config::{HttpConfig, SiteConfig};

#[derive(Debug, Clone, Default)]
struct ApiCredentials {
    key: Option<String>,
    username: Option<String>,
}

/// Sends submissions to `base_url` with JSON bodies.
pub struct HttpTransport {
    agent: Agent,
    base_url: String,
    credentials: ApiCredentials,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            // 4xx/5xx are read as responses so the error body reaches the flash message
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: ApiCredentials::default(),
        }
    }

    pub fn from_config(site: &SiteConfig, http: &HttpConfig) -> Self {
        let mut transport = Self::new(&site.base_url, Duration::from_secs(http.timeout_secs));
        transport.credentials = ApiCredentials {
            key: http.api_key.clone(),
            username: http.api_username.clone(),
        };
        transport
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn submit_sync(
        agent: Agent,
        url: String,
        method: HttpMethod,
        body: Option<Value>,
        credentials: ApiCredentials,
    ) -> Result<Value, TransportError> {
        let result = match method {
            HttpMethod::Delete => with_headers(agent.delete(&url), &credentials).call(),
            HttpMethod::Post | HttpMethod::Put => {
                let request = if method == HttpMethod::Post {
                    agent.post(&url)
                } else {
                    agent.put(&url)
                };
                let request = with_headers(request, &credentials);
                match body {
                    Some(ref json) => request.send_json(json),
                    None => request.send_empty(),
                }
            }
        };

        let response = result.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            TransportError::network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let text = response
            .into_body()
            .read_to_string()
            .map_err(|e| TransportError::network(format!("Failed to read response: {}", e)))?;
        let json = parse_body(&text);

        if !(200..300).contains(&status) {
            debug!("{} {} returned {}", method, url, status);
            return Err(TransportError::status(status, json));
        }

        debug!("{} {} -> {}", method, url, status);
        json.ok_or_else(|| TransportError {
            status: Some(status),
            body: None,
            message: "Response is not valid JSON".to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let agent = self.agent.clone();
        let url = self.url_for(path);
        let credentials = self.credentials.clone();

        tokio::task::spawn_blocking(move || Self::submit_sync(agent, url, method, body, credentials))
            .await
            .unwrap_or_else(|e| Err(TransportError::network(format!("Request task failed: {}", e))))
    }
}

fn with_headers<B>(request: RequestBuilder<B>, credentials: &ApiCredentials) -> RequestBuilder<B> {
    let mut request = request.header("Accept", "application/json");
    if let Some(ref key) = credentials.key {
        request = request.header("Api-Key", key);
    }
    if let Some(ref username) = credentials.username {
        request = request.header("Api-Username", username);
    }
    request
}

/// Empty body is `Null`; anything unparsable is `None`.
fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return Some(Value::Null);
    }
    serde_json::from_str(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let transport = HttpTransport::new("http://forum.test/", Duration::from_secs(1));
        assert_eq!(transport.url_for("/sidebar_sections/3"), "http://forum.test/sidebar_sections/3");
        assert_eq!(transport.url_for("sidebar_sections"), "http://forum.test/sidebar_sections");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Some(Value::Null));
        assert_eq!(parse_body("{\"ok\":true}"), Some(serde_json::json!({"ok": true})));
        assert_eq!(parse_body("<html>"), None);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let transport = HttpTransport::new("http://127.0.0.1:9", Duration::from_millis(500));
        let err = transport
            .submit(HttpMethod::Delete, "/sidebar_sections/1", None)
            .await
            .unwrap_err();
        assert_eq!(err.status, None);
    }
}
