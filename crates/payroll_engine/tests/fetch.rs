mod common;

use std::time::Duration;

use payroll_engine::{posts_url, FailureKind, FetchSettings, PostFetcher, ReqwestPostFetcher};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{init_logging, wp_post};

#[test]
fn posts_url_carries_category_and_page_size() {
    let url = posts_url("https://pittnews.com/", 31).unwrap();
    assert_eq!(
        url.as_str(),
        "https://pittnews.com/wp-json/wp/v2/posts?categories=31&per_page=100"
    );
}

#[test]
fn posts_url_rejects_garbage_base() {
    let err = posts_url("not a url", 31).unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn fetcher_parses_posts_for_category() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("categories", "31"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            wp_post("2023-03-05T10:00:00", "One", &["Ann"], "Staff Writer", 10),
            wp_post("2023-03-06T11:30:00", "Two", &["Bo", "Cy"], "Senior Staff Writer", 20),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ReqwestPostFetcher::new(FetchSettings::with_api_base(server.uri())).unwrap();
    let posts = fetcher.fetch_posts(31).await.expect("fetch ok");

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].custom_fields.writer, vec!["Bo", "Cy"]);
    assert_eq!(posts[1].job_title(), "Senior Staff Writer");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = ReqwestPostFetcher::new(FetchSettings::with_api_base(server.uri())).unwrap();
    let err = fetcher.fetch_posts(31).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn fetcher_fails_on_malformed_json() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[{\"date\": 5}]", "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestPostFetcher::new(FetchSettings::with_api_base(server.uri())).unwrap();
    let err = fetcher.fetch_posts(31).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidJson);
}

#[tokio::test]
async fn fetcher_rejects_html_error_pages() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>login</html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = ReqwestPostFetcher::new(FetchSettings::with_api_base(server.uri())).unwrap();
    let err = fetcher.fetch_posts(31).await.unwrap_err();

    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::with_api_base(server.uri())
    };
    let fetcher = ReqwestPostFetcher::new(settings).unwrap();
    let err = fetcher.fetch_posts(31).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}
