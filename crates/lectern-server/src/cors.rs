use http::{Method, header::HeaderName};
use lectern_config::{AnyOrArray, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// Entries that fail to parse as origins, methods or header names are
/// skipped.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new();

    let layer = match &config.origins {
        AnyOrArray::Any => layer.allow_origin(AllowOrigin::any()),
        AnyOrArray::List(origins) => {
            let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            layer.allow_origin(origins)
        }
    };

    let layer = match &config.methods {
        AnyOrArray::Any => layer.allow_methods(AllowMethods::any()),
        AnyOrArray::List(methods) => {
            let methods: Vec<Method> = methods.iter().filter_map(|m| m.parse().ok()).collect();
            layer.allow_methods(methods)
        }
    };

    let layer = match &config.headers {
        AnyOrArray::Any => layer.allow_headers(AllowHeaders::any()),
        AnyOrArray::List(headers) => {
            let headers: Vec<HeaderName> = headers.iter().filter_map(|h| h.parse().ok()).collect();
            layer.allow_headers(headers)
        }
    };

    match config.max_age_duration() {
        Some(max_age) => layer.max_age(max_age),
        None => layer,
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, routing::post};
    use http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;

    fn app(config: &CorsConfig) -> Router {
        Router::new()
            .route("/api/summary", post(|| async { "ok" }))
            .layer(cors_layer(config))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/summary")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn default_config_allows_any_origin() {
        let response = app(&CorsConfig::default())
            .oneshot(preflight("https://reader.example"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
        assert!(methods.contains("POST"));
        assert!(methods.contains("OPTIONS"));
    }

    #[tokio::test]
    async fn origin_list_is_enforced() {
        let config = CorsConfig {
            origins: AnyOrArray::List(vec!["https://reader.example".to_owned()]),
            max_age: Some(600),
            ..CorsConfig::default()
        };

        let allowed = app(&config).oneshot(preflight("https://reader.example")).await.unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://reader.example"
        );
        assert_eq!(allowed.headers()[header::ACCESS_CONTROL_MAX_AGE], "600");

        let denied = app(&config).oneshot(preflight("https://other.example")).await.unwrap();
        assert!(denied.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
