//! Runtime config injection
//!
//! Produces the single `<script>` block that exposes connection settings and the
//! assistant key to page scripts. Values go through `serde_json` and the JSON
//! text is escaped so nothing in a value can close the surrounding element.

use serde::Serialize;

use crate::config::RuntimeConfig;
use crate::utils::{API_CONFIG_GLOBAL, REMOTE_CONFIG_GLOBAL};

#[derive(Serialize)]
struct RemoteConfigObject<'a> {
    enabled: bool,
    url: &'a str,
    key: &'a str,
}

#[derive(Serialize)]
struct ApiConfigObject<'a> {
    key: &'a str,
}

/// Serialize a value as JSON that is safe to embed in a `<script>` element
///
/// Markup-significant characters and the JS line separators are written as
/// `\uXXXX` escapes. Those characters only occur inside JSON strings, so the
/// output still parses to the same value.
pub fn script_safe_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;

    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    Ok(escaped)
}

/// Build the config `<script>` block for one composition
pub fn config_script(config: &RuntimeConfig) -> Result<String, serde_json::Error> {
    let remote = script_safe_json(&RemoteConfigObject {
        enabled: config.cache_enabled,
        url: &config.remote_endpoint,
        key: &config.remote_key,
    })?;
    let api = script_safe_json(&ApiConfigObject {
        key: &config.api_key,
    })?;

    Ok(format!(
        "<script>\nwindow.{REMOTE_CONFIG_GLOBAL} = {remote};\nwindow.{API_CONFIG_GLOBAL} = {api};\n</script>"
    ))
}

/// `<script src=..>` tag for an external library
#[must_use]
pub fn external_script_tag(url: &str) -> String {
    format!(r#"<script src="{url}"></script>"#)
}
