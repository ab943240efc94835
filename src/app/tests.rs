//! HTTP Layer Tests
//!
//! Drives the assembled router end to end with in-memory backends.
//!
//! ## Test Scopes
//! - **Request parsing**: missing bodies, invalid JSON, field validation messages.
//! - **Responses**: JSON shapes and key order of every endpoint.
//! - **Errors**: status codes of each `ApiError` variant.

#[cfg(test)]
mod tests {
    use crate::app::fanout::fan_out;
    use crate::app::request::{parse_body, require_text};
    use crate::app::response::PerDataset;
    use crate::app::router::{AppState, build_router};
    use crate::catalog::registry::Catalog;
    use crate::catalog::types::Cluster;
    use crate::domains::service::DomainService;
    use crate::error::ApiError;
    use crate::phrases::service::PhraseService;
    use crate::testing::{FakeCounter, sample_domain_store, sample_tables};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let default = FakeCounter::new()
            .answer("c4", "well", 212660501)
            .answer("re_laion2b-en-*", "well", 1234);
        let dolma = FakeCounter::new().answer("docs_v1.5_2023-11-02", "well", 42);

        build_router(AppState {
            catalog: Arc::new(Catalog::builtin()),
            tables: Arc::new(sample_tables()),
            domains: Arc::new(DomainService::new(
                Arc::new(sample_domain_store()),
                16,
                Duration::from_secs(5),
            )),
            phrases: Arc::new(
                PhraseService::new(16, Duration::from_secs(5))
                    .with_counter(Cluster::Default, Arc::new(default))
                    .with_counter(Cluster::Dolma, Arc::new(dolma)),
            ),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(test_app(), request).await
    }

    async fn post(uri: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(test_app(), request).await
    }

    fn parse(body: &str) -> Value {
        serde_json::from_str(body).unwrap()
    }

    fn error_of(body: &str) -> String {
        parse(body)["error"].as_str().unwrap().to_string()
    }

    // ============================================================
    // REQUEST HELPERS
    // ============================================================

    #[derive(Debug, serde::Deserialize)]
    struct Probe {
        #[allow(dead_code)]
        corpora: Vec<String>,
    }

    #[test]
    fn test_parse_body_missing() {
        for body in ["", "   ", "null"] {
            match parse_body::<Probe>(body.as_bytes()) {
                Err(ApiError::BadRequest(msg)) => assert_eq!(msg, "No request body"),
                other => panic!("unexpected: {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_body_invalid() {
        assert!(matches!(
            parse_body::<Probe>(b"{not json"),
            Err(ApiError::BadRequest(msg)) if msg.starts_with("Invalid JSON body")
        ));
        assert!(matches!(
            parse_body::<Probe>(b"{\"corpora\": 3}"),
            Err(ApiError::BadRequest(msg)) if msg.starts_with("Invalid request body")
        ));
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Some("  well ")).unwrap(), "well");
        assert!(require_text(Some("   ")).is_err());
        assert!(require_text(None).is_err());
    }

    #[test]
    fn test_per_dataset_keeps_insertion_order() {
        let mut out = PerDataset::new();
        out.insert("b", 1);
        out.insert("a", 2);
        out.insert("b", 3);

        assert_eq!(serde_json::to_string(&out).unwrap(), r#"{"b":3,"a":2}"#);
    }

    #[tokio::test]
    async fn test_fan_out_propagates_first_error() {
        let names = vec!["ok".to_string(), "bad".to_string()];
        let result = fan_out(&names, Duration::from_secs(1), |name| async move {
            if name == "bad" {
                Err(ApiError::Backend("boom".into()))
            } else {
                Ok(1u32)
            }
        })
        .await;

        assert!(matches!(result, Err(ApiError::Backend(_))));
    }

    // ============================================================
    // METADATA ROUTES
    // ============================================================

    #[tokio::test]
    async fn test_index_is_no_content() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_datasets_route() {
        let (status, body) = get("/api/datasets").await;
        assert_eq!(status, StatusCode::OK);

        let json = parse(&body);
        assert_eq!(json.as_object().unwrap().len(), 11);
        assert_eq!(
            json["LAION-2B-en"],
            json!({"meta": ["basic", "indexed", "url", "overlap"], "order": 9})
        );
        assert!(body.find("OpenWebText").unwrap() < body.find("Dolma").unwrap());
    }

    #[tokio::test]
    async fn test_ks_route() {
        let (status, body) = get("/api/ks").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse(&body), json!([1, 2, 3, 4, 5, 10, 100]));
    }

    // ============================================================
    // N-GRAMS
    // ============================================================

    #[tokio::test]
    async fn test_topk_route() {
        let (status, body) = post("/api/topk", r#"{"k": 2, "datasets": ["C4"], "count": 2}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse(&body), json!({"C4": ["of the", "in the"]}));
    }

    #[tokio::test]
    async fn test_topk_with_counts_route() {
        let (status, body) = post(
            "/api/topk_with_counts",
            r#"{"k": 2, "datasets": ["OSCAR", "C4"], "count": 1}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            parse(&body),
            json!({"OSCAR": [{"ng": "de la", "c": 50}], "C4": [{"ng": "of the", "c": 100}]})
        );
        assert!(body.find("OSCAR").unwrap() < body.find("C4").unwrap());
    }

    #[tokio::test]
    async fn test_topk_validation_messages() {
        let (status, body) = post("/api/topk", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&body), "No request body");

        let (status, body) = post("/api/topk", r#"{"k": 6, "datasets": ["C4"]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            error_of(&body),
            "Please enter a valid k value: [1, 2, 3, 4, 5, 10, 100]."
        );

        let (status, body) = post("/api/topk", r#"{"k": 2, "datasets": ["c4_en"]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&body), "Please enter a valid dataset name.");
    }

    // ============================================================
    // OVERLAPS AND LENGTHS
    // ============================================================

    #[tokio::test]
    async fn test_get_overlaps_route() {
        let (status, body) = post("/api/get_overlaps", r#"{"corpora": ["C4", "LAION-2B-en"]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            parse(&body),
            json!([
                {"subset": ["C4"], "count": 364868892u64},
                {"subset": ["LAION-2B-en"], "count": 1407171770u64},
                {"subset": ["C4", "LAION-2B-en"], "count": 30602}
            ])
        );
    }

    #[tokio::test]
    async fn test_get_overlaps_unknown_corpus() {
        let (status, body) = post("/api/get_overlaps", r#"{"corpora": ["Wikipedia"]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&body), "Please enter a valid dataset name.");
    }

    #[tokio::test]
    async fn test_get_overlaps_missing_combination() {
        let (status, _) = post("/api/get_overlaps", r#"{"corpora": ["The Stack"]}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_overlaps_too_many_corpora() {
        let corpora = vec!["C4"; 30];
        let body = json!({ "corpora": corpora }).to_string();
        let (status, body) = post("/api/get_overlaps", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&body), "Please select at most 11 corpora.");
    }

    #[tokio::test]
    async fn test_len_dist_route() {
        let (status, body) = post("/api/len_dist", r#"{"corpora": ["LAION-2B-en"]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse(&body), json!({"LAION-2B-en": [[5, 0.9]]}));
    }

    // ============================================================
    // PHRASES
    // ============================================================

    #[tokio::test]
    async fn test_text_count_route() {
        let (status, body) = post(
            "/api/text_count",
            r#"{"text": "well", "datasets": ["C4", "LAION-2B-en", "Dolma"]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            parse(&body),
            json!({"C4": 212660501u64, "LAION-2B-en": 1234, "Dolma": 42})
        );
    }

    #[tokio::test]
    async fn test_text_count_blank_text() {
        let (status, body) = post("/api/text_count", r#"{"text": "  ", "datasets": ["C4"]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&body), "Please enter a valid string");
    }

    #[tokio::test]
    async fn test_text_count_backend_failure_is_bad_gateway() {
        let (status, body) = post("/api/text_count", r#"{"text": "rare", "datasets": ["C4"]}"#).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(error_of(&body).contains("backend failure"));
    }

    // ============================================================
    // DOMAINS
    // ============================================================

    #[tokio::test]
    async fn test_domains_count_route() {
        let (status, body) = post(
            "/api/domains_count",
            r#"{"domain_text": "www.google", "corpora": ["LAION-2B-en"]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json = parse(&body);
        let rows = json["LAION-2B-en"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["domain"], "www.google.com");
        assert_eq!(rows[0]["tokens"], 453);
        assert_eq!(rows[0]["rank"], 4);
        assert!(rows[0]["percentage"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_domains_count_validation() {
        let (status, body) = post("/api/domains_count", r#"{"corpora": ["C4"]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&body), "Please enter a valid string");

        let (status, body) = post(
            "/api/domains_count",
            r#"{"domain_text": "www", "corpora": ["The Pile"]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&body), "Please enter a valid dataset name.");
    }

    #[tokio::test]
    async fn test_top_domains_route() {
        let (status, body) = post("/api/top_domains", r#"{"corpora": ["LAION-2B-en"], "count": 2}"#).await;
        assert_eq!(status, StatusCode::OK);

        let json = parse(&body);
        let domains: Vec<&str> = json["LAION-2B-en"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["domain"].as_str().unwrap())
            .collect();
        assert_eq!(domains, vec!["i.pinimg.com", "cdn.shopify.com"]);
    }

    #[tokio::test]
    async fn test_top_domains_default_count_and_negative_count() {
        let (status, body) = post("/api/top_domains", r#"{"corpora": ["C4"]}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse(&body)["C4"].as_array().unwrap().len(), 3);

        let (status, _) = post("/api/top_domains", r#"{"corpora": ["C4"], "count": -1}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_top_domains_missing_table_is_not_found() {
        let (status, _) = post("/api/top_domains", r#"{"corpora": ["mC4-en"]}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
