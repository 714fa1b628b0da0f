//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. You register a path, you
//! get a handler.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router, generic over the shared state `S` its handlers
/// receive.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve)
/// together with the state. Registrations chain.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
}

impl<S: Send + Sync + 'static> Router<S> {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics on an invalid or conflicting route pattern. Routes are fixed at
    /// startup, so this surfaces immediately.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Shorthand for `on(Method::GET, ..)`.
    pub fn get(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::GET, path, handler)
    }

    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler<S>, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl<S: Send + Sync + 'static> Default for Router<S> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Request, Response};

    async fn noop(_req: Request, _state: Arc<()>) -> Response {
        Response::text("")
    }

    #[test]
    fn lookup_extracts_params() {
        let router = Router::<()>::new().get("/cards/{cardtype}", noop);

        let (_, params) = router.lookup(&Method::GET, "/cards/shoes").unwrap();
        assert_eq!(params.get("cardtype").map(String::as_str), Some("shoes"));
    }

    #[test]
    fn lookup_is_per_method() {
        let router = Router::<()>::new().get("/", noop);

        assert!(router.lookup(&Method::GET, "/").is_some());
        assert!(router.lookup(&Method::POST, "/").is_none());
        assert!(router.lookup(&Method::GET, "/missing").is_none());
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = Router::<()>::new().get("/a", noop).get("/a", noop);
    }
}
