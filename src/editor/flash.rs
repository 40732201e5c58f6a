//! Banner message shown above the form after a failed submission

use serde_json::Value;

use crate::client::TransportError;
use crate::i18n::{Translator, keys};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub text: String,
    /// CSS class of the banner, always `"error"` for submission failures
    pub class: String,
}

impl Flash {
    pub fn error(text: String) -> Self {
        Self {
            text,
            class: "error".to_string(),
        }
    }

    /// Sanitized, user facing message for a failed request.
    pub fn from_transport(err: &TransportError, translator: &dyn Translator) -> Self {
        Self::error(sanitize(&extract_error(err, translator)))
    }
}

/// Pick the most useful message out of a failed response.
///
/// `errors` array (joined with `<br>`), then `error`, then a localized
/// network or generic message.
pub fn extract_error(err: &TransportError, translator: &dyn Translator) -> String {
    if let Some(body) = err.body.as_ref() {
        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            let messages: Vec<&str> = errors.iter().filter_map(Value::as_str).collect();
            if !messages.is_empty() {
                return messages.join("<br>");
            }
        }
        if let Some(error) = body.get("error").and_then(Value::as_str)
            && !error.is_empty()
        {
            return error.to_string();
        }
    }

    match err.status {
        None => translator.translate(keys::NETWORK_ERROR, &[]),
        Some(_) => translator.translate(keys::GENERIC_ERROR, &[]),
    }
}

/// Escape HTML, keeping only `<br>` line breaks.
pub fn sanitize(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped.replace("&lt;br&gt;", "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EnglishCatalog;
    use serde_json::json;

    #[test]
    fn test_errors_array_wins() {
        let err = TransportError::status(
            422,
            Some(json!({"errors": ["Title is too long", "Links are invalid"], "error": "x"})),
        );
        assert_eq!(
            extract_error(&err, &EnglishCatalog),
            "Title is too long<br>Links are invalid"
        );
    }

    #[test]
    fn test_error_field() {
        let err = TransportError::status(403, Some(json!({"error": "Not allowed"})));
        assert_eq!(extract_error(&err, &EnglishCatalog), "Not allowed");
    }

    #[test]
    fn test_fallback_messages() {
        let generic = TransportError::status(500, None);
        assert_eq!(extract_error(&generic, &EnglishCatalog), "Sorry, an error has occurred.");

        let empty = TransportError::status(422, Some(json!({"errors": []})));
        assert_eq!(extract_error(&empty, &EnglishCatalog), "Sorry, an error has occurred.");

        let network = TransportError::network("refused");
        assert!(extract_error(&network, &EnglishCatalog).contains("can't reach this site"));
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(
            sanitize("<script>alert('x')</script> & co<br>next"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co<br>next"
        );
    }

    #[test]
    fn test_flash_from_transport() {
        let err = TransportError::status(422, Some(json!({"errors": ["<b>bad</b>"]})));
        let flash = Flash::from_transport(&err, &EnglishCatalog);
        assert_eq!(flash.text, "&lt;b&gt;bad&lt;/b&gt;");
        assert_eq!(flash.class, "error");
    }
}
