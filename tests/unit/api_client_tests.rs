//! VulnCheck client tests against mocked HTTP responses
//! Covers every endpoint family and the status-to-error mapping

use mockito::{Matcher, Server};
use serde_json::json;
use vulncheck_harness::application::{ApiError, ApplicationError};
use vulncheck_harness::domain::{IndexQuery, PathSegment};
use vulncheck_harness::infrastructure::{VulnCheckApi, VulnCheckClient};

const TOKEN: &str = "integration-token";

fn client_for(server: &Server) -> VulnCheckClient {
    VulnCheckClient::with_base_url(server.url(), Some(TOKEN.to_string())).unwrap()
}

fn envelope(data: serde_json::Value) -> String {
    json!({
        "_benchmark": 0.012,
        "_meta": {
            "timestamp": "2024-05-01T12:00:00Z",
            "limit": 100,
            "total_documents": 1,
            "page": 1,
            "total_pages": 1
        },
        "data": data
    })
    .to_string()
}

#[tokio::test]
async fn test_get_index_backup() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/backup/mitre-cvelist-v5")
        .match_header("authorization", "Bearer integration-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!([{
            "filename": "mitre-cvelist-v5-1714564800.zip",
            "url": "https://example.test/backup.zip",
            "sha256": "abc"
        }])))
        .expect(1)
        .create_async()
        .await;

    let index = PathSegment::new("index", "mitre-cvelist-v5").unwrap();
    let response = client_for(&server).get_index_backup(&index).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.data[0]["sha256"], "abc");
    assert_eq!(response.meta.unwrap().total_documents, Some(1));
}

#[tokio::test]
async fn test_query_index_with_cve_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/index/initial-access")
        .match_query(Matcher::UrlEncoded("cve".into(), "CVE-2023-27350".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!([{"cve": ["CVE-2023-27350"], "vendor": "PaperCut"}])))
        .expect(1)
        .create_async()
        .await;

    let index = PathSegment::new("index", "initial-access").unwrap();
    let query = IndexQuery::new().cve("CVE-2023-27350");
    let response = client_for(&server).query_index(&index, &query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.data[0]["vendor"], "PaperCut");
}

#[tokio::test]
async fn test_query_index_sends_paging() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/index/vulnrichment")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("page".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "_meta": {"limit": 10, "page": 2, "total_pages": 5},
                "data": []
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let index = PathSegment::new("index", "vulnrichment").unwrap();
    let query = IndexQuery::new().limit(10).page(2);
    let response = client_for(&server).query_index(&index, &query).await.unwrap();

    mock.assert_async().await;
    let meta = response.meta.unwrap();
    assert_eq!(meta.page, Some(2));
    assert_eq!(meta.total_pages, Some(5));
}

#[tokio::test]
async fn test_lookup_cpe_encodes_query() {
    let mut server = Server::new_async().await;
    let cpe = "cpe:/a:microsoft:internet_explorer:8.0.6001:beta";
    let mock = server
        .mock("GET", "/cpe")
        .match_query(Matcher::UrlEncoded("cpe".into(), cpe.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!(["CVE-2010-0249"])))
        .expect(1)
        .create_async()
        .await;

    let response = client_for(&server).lookup_cpe(cpe).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.data, json!(["CVE-2010-0249"]));
}

#[tokio::test]
async fn test_lookup_purl() {
    let mut server = Server::new_async().await;
    let purl = "pkg:hex/coherence@0.1.2";
    let mock = server
        .mock("GET", "/purl")
        .match_query(Matcher::UrlEncoded("purl".into(), purl.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!({"cves": ["CVE-2018-20301"], "vulnerabilities": []})))
        .create_async()
        .await;

    let response = client_for(&server).lookup_purl(purl).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.data["cves"][0], "CVE-2018-20301");
}

#[tokio::test]
async fn test_text_endpoints() {
    let mut server = Server::new_async().await;
    let _tags = server
        .mock("GET", "/tags/vulncheck-c2")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("cobaltstrike\nsliver\n")
        .create_async()
        .await;
    let _pdns = server
        .mock("GET", "/pdns/vulncheck-c2")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("bad.example.com\n")
        .create_async()
        .await;

    let client = client_for(&server);

    assert_eq!(client.get_c2_tags().await.unwrap(), "cobaltstrike\nsliver\n");
    assert_eq!(client.get_c2_pdns().await.unwrap(), "bad.example.com\n");
}

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/backup/unknown-index")
        .with_status(404)
        .with_body(r#"{"error": true, "errors": ["index not found"]}"#)
        .create_async()
        .await;

    let index = PathSegment::new("index", "unknown-index").unwrap();
    let err = client_for(&server)
        .get_index_backup(&index)
        .await
        .unwrap_err();

    match err {
        ApplicationError::Api(ApiError::NotFound { resource }) => {
            assert_eq!(resource, "/backup/unknown-index")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_and_server_errors() {
    let mut server = Server::new_async().await;
    let _limited = server
        .mock("GET", "/index")
        .with_status(429)
        .create_async()
        .await;
    let _broken = server
        .mock("GET", "/backup")
        .with_status(500)
        .with_body(r#"{"error": true, "errors": ["internal failure"]}"#)
        .create_async()
        .await;

    let client = client_for(&server);

    assert!(matches!(
        client.list_indexes().await.unwrap_err(),
        ApplicationError::Api(ApiError::RateLimit)
    ));
    match client.list_backups().await.unwrap_err() {
        ApplicationError::Api(ApiError::Http { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal failure");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/index")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{not json")
        .create_async()
        .await;

    let err = client_for(&server).list_indexes().await.unwrap_err();
    assert!(matches!(err, ApplicationError::Network(_)));
}
