//! Current-site origin used to tell internal links from external ones

/// `http://` and `https://` prefixes of the current host.
///
/// Classification is a plain prefix comparison, so `http://host.evil` also
/// counts as same-origin when the host is `host`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    http_host: String,
    https_host: String,
}

impl Origin {
    /// `host` may carry a port, e.g. `localhost:3000`.
    pub fn new(host: &str) -> Self {
        Self {
            http_host: format!("http://{}", host),
            https_host: format!("https://{}", host),
        }
    }

    /// Whether `value` starts with either origin prefix.
    pub fn is_same_origin(&self, value: &str) -> bool {
        value.starts_with(&self.http_host) || value.starts_with(&self.https_host)
    }

    /// Strip a leading origin prefix, leaving the application path.
    pub fn strip<'a>(&self, value: &'a str) -> &'a str {
        value
            .strip_prefix(self.http_host.as_str())
            .or_else(|| value.strip_prefix(self.https_host.as_str()))
            .unwrap_or(value)
    }
}
