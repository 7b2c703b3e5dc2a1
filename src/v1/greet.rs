#![forbid(unsafe_code)]

use std::sync::Arc;

use log::debug;
use poem::web::Data;
use poem::{handler, Request};

// Greet Server Utilities
use crate::utils::greeting::compose_greeting;
use crate::utils::idgen::IdSource;

// ***************************************************************************
//                                 Endpoint
// ***************************************************************************
// ---------------------------------------------------------------------------
// greet_all:
// ---------------------------------------------------------------------------
/** Respond to every request with the greeting and a fresh identifier.  The
 * handler runs as the server's root endpoint, so the method, path, query,
 * headers and body play no role in the response; a new identifier is drawn
 * from the injected source on each invocation and nothing is retained
 * between requests.
 */
#[handler]
pub async fn greet_all(http_req: &Request, Data(id_source): Data<&Arc<dyn IdSource>>) -> String {
    // Conditional logging depending on log level.
    debug!("Greeting request: {} {}.", http_req.method(), http_req.uri().path());

    compose_greeting(&id_source.next_id())
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use futures::future::join_all;
    use poem::http::{Method, StatusCode, Uri};
    use poem::{Endpoint, EndpointExt, Request, Response};
    use uuid::Uuid;

    use crate::utils::greeting::GREETING;
    use crate::utils::idgen::{IdSource, RandomIdSource};

    use super::greet_all;

    // A deterministic source so response bodies can be asserted exactly.
    struct FixedIdSource;

    impl IdSource for FixedIdSource {
        fn next_id(&self) -> String {
            "00000000-0000-4000-8000-000000000000".to_string()
        }
    }

    fn test_app() -> impl Endpoint {
        let id_source: Arc<dyn IdSource> = Arc::new(RandomIdSource);
        greet_all.data(id_source)
    }

    async fn body_text(resp: Response) -> String {
        assert_eq!(resp.status(), StatusCode::OK);
        resp.into_body().into_string().await.expect("body must be utf-8 text")
    }

    /** Check the greeting pattern and return the identifier suffix. */
    fn id_suffix(body: &str) -> &str {
        let id = body.strip_prefix(GREETING).expect("greeting prefix missing");
        assert_eq!(id.len(), 36);
        Uuid::parse_str(id).expect("identifier must parse as a uuid");
        id
    }

    #[tokio::test]
    async fn get_root_returns_greeting() {
        let app = test_app();
        let req = Request::builder().uri(Uri::from_static("/")).finish();
        let resp = app.get_response(req).await;
        let content_type = resp.content_type().map(|ct| ct.to_string()).unwrap_or_default();
        assert!(content_type.starts_with("text/plain"));
        let body = body_text(resp).await;
        id_suffix(&body);
    }

    #[tokio::test]
    async fn post_unknown_path_gets_same_treatment() {
        let app = test_app();
        let req = Request::builder()
            .method(Method::POST)
            .uri(Uri::from_static("/does/not/exist"))
            .body("this body is ignored");
        let body = body_text(app.get_response(req).await).await;
        id_suffix(&body);
    }

    #[tokio::test]
    async fn repeated_requests_yield_fresh_ids() {
        let app = test_app();
        let first = body_text(app.get_response(Request::builder().finish()).await).await;
        let second = body_text(app.get_response(Request::builder().finish()).await).await;
        assert_ne!(id_suffix(&first), id_suffix(&second));
    }

    #[tokio::test]
    async fn deterministic_source_yields_exact_body() {
        let id_source: Arc<dyn IdSource> = Arc::new(FixedIdSource);
        let app = greet_all.data(id_source);
        let body = body_text(app.get_response(Request::builder().finish()).await).await;
        assert_eq!(body, "Hello, World!00000000-0000-4000-8000-000000000000");
    }

    #[tokio::test]
    async fn concurrent_requests_get_distinct_ids() {
        let app = test_app();
        let resps = join_all((0..16).map(|_| app.get_response(Request::builder().finish()))).await;
        let mut ids = HashSet::new();
        for resp in resps {
            let body = body_text(resp).await;
            ids.insert(id_suffix(&body).to_string());
        }
        assert_eq!(ids.len(), 16);
    }
}
