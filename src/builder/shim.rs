//! CommonJS registration shim

use serde_json::Value;

/// Wrap `body` in a client-side `require.register` call keyed by `name`
///
/// The name is written as a JSON string literal, so quotes and backslashes in
/// it are escaped.
pub fn format_module(name: &str, body: &str) -> String {
    let name = Value::from(name);
    format!("require.register({name}, function(module, exports, require){{\n{body}\n}});")
}
