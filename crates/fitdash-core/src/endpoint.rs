//! Resource endpoint composition.

/// Where one resource collection lives: an API base URL plus a path suffix.
///
/// Immutable for the lifetime of a view instance. Composition is plain string
/// formatting and nothing is validated here: an empty or nonsense base yields
/// a URL the transport layer rejects, and that rejection surfaces through the
/// ordinary fetch error path instead of failing at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEndpoint {
    base: String,
    resource: String,
}

impl ResourceEndpoint {
    /// Create an endpoint for `resource` under `base`
    /// (e.g. `http://localhost:8000` and `teams`).
    pub fn new(base: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            resource: resource.into(),
        }
    }

    /// The absolute URL of the collection: `<base>/api/<resource>/`.
    ///
    /// A trailing slash on the base is tolerated; the API's own trailing
    /// slash is always kept because the server redirects without it.
    pub fn url(&self) -> String {
        let base = self.base.trim_end_matches('/');
        let resource = &self.resource;
        format!("{base}/api/{resource}/")
    }
}
