use hyper::body::Bytes;
use tokio::sync::OnceCell;

const HOMEPAGE: &str = include_str!("static/index.html");
const JAVASCRIPT: &str = include_str!("static/app.js");
const CSS: &str = include_str!("static/grid.css");

/// Placeholder in the page script replaced by the public websocket URL.
const SOCKET_HOST: &str = "SOCKET_HOST";

fn read_js_with_endpoint(ws_endpoint: &str) -> Bytes {
    Bytes::from(JAVASCRIPT.replace(SOCKET_HOST, ws_endpoint))
}

pub struct StaticResource {
    pub(crate) homepage: Bytes,
    pub(crate) javascript: Bytes,
    pub(crate) css: Bytes,
}

impl StaticResource {
    /// Process-wide bundle; the endpoint of the first call wins.
    pub async fn new(ws_endpoint: &str) -> &'static StaticResource {
        STATIC_RESOURCE.get_or_init(|| async {
            StaticResource::build(ws_endpoint)
        }).await
    }

    pub fn build(ws_endpoint: &str) -> StaticResource {
        StaticResource {
            homepage: Bytes::from_static(HOMEPAGE.as_bytes()),
            javascript: read_js_with_endpoint(ws_endpoint),
            css: Bytes::from_static(CSS.as_bytes()),
        }
    }

    /// Content type and body for a request path.
    pub fn lookup(&self, path: &str) -> Option<(&'static str, Bytes)> {
        match path {
            "/" | "/index.html" => Some(("text/html; charset=utf-8", self.homepage.clone())),
            "/app.js" => Some(("text/javascript; charset=utf-8", self.javascript.clone())),
            "/grid.css" => Some(("text/css; charset=utf-8", self.css.clone())),
            _ => None,
        }
    }
}

static STATIC_RESOURCE: OnceCell<StaticResource> = OnceCell::const_new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_substituted_into_script() {
        let resources = StaticResource::build("ws://10.0.0.2:9001");
        let script = String::from_utf8(resources.javascript.to_vec()).unwrap();
        assert!(script.contains("ws://10.0.0.2:9001"));
        assert!(!script.contains(SOCKET_HOST));
    }

    #[test]
    fn test_lookup_known_paths() {
        let resources = StaticResource::build("ws://localhost:8081");
        let (content_type, body) = resources.lookup("/").unwrap();
        assert!(content_type.starts_with("text/html"));
        assert!(String::from_utf8_lossy(&body).contains("id=\"board\""));
        assert!(resources.lookup("/app.js").is_some());
        assert!(resources.lookup("/grid.css").is_some());
        assert!(resources.lookup("/secret").is_none());
    }

    #[tokio::test]
    async fn test_shared_bundle_is_built_once() {
        let first = StaticResource::new("ws://first").await;
        let second = StaticResource::new("ws://second").await;
        assert!(std::ptr::eq(first, second));
    }
}
