//! Development server configuration types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bundle::{API_PROXY_PREFIX, API_PROXY_TARGET};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    /// Path prefix to proxy rule, in declaration order
    #[serde(default)]
    pub proxy: IndexMap<String, ProxyRule>,
}

impl DevServerOptions {
    /// Rule for a request path, picking the longest matching prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use keel_config::DevServerOptions;
    ///
    /// let server = DevServerOptions::default();
    /// let (prefix, rule) = server.proxy_for("/api/users/42").unwrap();
    /// assert_eq!(prefix, "/api");
    /// assert_eq!(rule.target, "http://localhost:4000");
    /// assert!(server.proxy_for("/index.html").is_none());
    /// ```
    pub fn proxy_for(&self, path: &str) -> Option<(&str, &ProxyRule)> {
        self.proxy
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, rule)| (prefix.as_str(), rule))
    }
}

impl Default for DevServerOptions {
    fn default() -> Self {
        let mut proxy = IndexMap::new();
        proxy.insert(
            API_PROXY_PREFIX.to_string(),
            ProxyRule {
                target: API_PROXY_TARGET.to_string(),
                change_origin: true,
                secure: false,
            },
        );
        Self { proxy }
    }
}

/// Pass-through of matching requests to another origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    /// Origin requests are forwarded to
    pub target: String,

    /// Rewrite the `Host` header to the target's
    #[serde(default)]
    pub change_origin: bool,

    /// Verify the target's TLS certificate
    #[serde(default)]
    pub secure: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_proxies_api() {
        let server = DevServerOptions::default();
        assert_eq!(server.proxy.len(), 1);
        let rule = &server.proxy["/api"];
        assert_eq!(rule.target, "http://localhost:4000");
        assert!(rule.change_origin);
        assert!(!rule.secure);
    }

    #[test]
    fn longest_prefix_wins() {
        let mut server = DevServerOptions::default();
        server.proxy.insert(
            "/api/ws".to_string(),
            ProxyRule {
                target: "http://localhost:4001".to_string(),
                change_origin: false,
                secure: false,
            },
        );

        let (prefix, rule) = server.proxy_for("/api/ws/chat").unwrap();
        assert_eq!(prefix, "/api/ws");
        assert_eq!(rule.target, "http://localhost:4001");

        let (prefix, _) = server.proxy_for("/api/users").unwrap();
        assert_eq!(prefix, "/api");
    }

    #[test]
    fn serializes_change_origin_camel_case() {
        let value = serde_json::to_value(DevServerOptions::default()).unwrap();
        assert_eq!(value["proxy"]["/api"]["changeOrigin"], true);
        assert_eq!(value["proxy"]["/api"]["secure"], false);
    }
}
