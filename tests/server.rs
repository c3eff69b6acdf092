//! HTTP surface tests, driven through the router without a socket.

#[cfg(test)]
mod server_tests {
    use ap_typing::server::router;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(get("/health").await, (StatusCode::OK, "OK".to_string()));
    }

    #[tokio::test]
    async fn test_shadow_json() {
        let (status, body) = get_json("/shadow/vfel/1340").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ap_type"], "VFEL");
        assert_eq!(body["subtype"], "1340");
        let keys: Vec<&str> = body["shadow_types"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["shadow_type"].as_str().unwrap())
            .collect();
        assert_eq!(keys, ["VFEL", "VFLE", "VLFE"]);
    }

    #[tokio::test]
    async fn test_shadow_html() {
        let (status, body) = get("/shadow/LFVE/2111/html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<p>Shadow types for LFVE 2111:</p>"));
        assert_eq!(body.matches("<li>").count(), 5);
    }

    #[tokio::test]
    async fn test_invalid_input_is_bad_request() {
        let (status, body) = get_json("/shadow/VFEX/1340").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid AP type VFEX");

        let (status, body) = get_json("/shadow/VFEL/9999").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid subtype 9999");
    }

    #[tokio::test]
    async fn test_intertype_routes() {
        let (status, body) = get_json("/intertype/FVLE/ELVF").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["relation"], "Dual");
        assert_eq!(body["description"], "Dual: FVLE <—> ELVF (shared sexta)");

        let (status, body) = get_json("/intertypes/FVLE").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["relations"].as_array().map(Vec::len), Some(17));
        assert_eq!(body["relations"][4]["description"], "EFVL <—> FVLE <—> VLEF (square)");
    }

    #[tokio::test]
    async fn test_triads_route() {
        let (status, body) = get_json("/triads/592").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nickname"], "Spineless Saint");

        let (status, body) = get_json("/triads/SPI%20SY-CY-UN").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["lines"][0], "Triads for SPI SY-UN-CY (Tweaked-out Architect):");

        let (status, _) = get_json("/triads/123").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
