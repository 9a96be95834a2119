//! Library-level analysis scenarios over mocked HTTP endpoints.

use policheck::analyzer::AnalysisEngine;
use policheck::fetcher::FetchSettings;
use policheck::{AnalysisOutcome, Criterion, MAX_SCORE};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FULL_POLICY_HTML: &str = "<html><body>Contact us. Our Privacy Policy describes \
     data collection and data security and data retention practices. \
     This is the Company entity.</body></html>";

async fn serve(html: &'static str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;
    server
}

/// The engine's client is blocking; keep it off the async test runtime.
async fn analyze(url: String) -> AnalysisOutcome {
    tokio::task::spawn_blocking(move || AnalysisEngine::new().expect("engine").analyze(&url))
        .await
        .expect("analysis thread")
}

#[tokio::test(flavor = "multi_thread")]
async fn full_policy_scores_maximum() {
    let server = serve(FULL_POLICY_HTML).await;
    let outcome = analyze(server.uri()).await;

    let analysis = outcome.as_success().expect("fetch should succeed");
    for criterion in Criterion::ALL {
        assert!(analysis.criteria.get(criterion), "{} should pass", criterion);
    }
    assert_eq!(analysis.score.value, MAX_SCORE);
    assert!(analysis.suggestions.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn bare_page_scores_placeholders_only() {
    let server = serve("<html><body>Hello world</body></html>").await;
    let outcome = analyze(server.uri()).await;

    let analysis = outcome.as_success().expect("fetch should succeed");
    assert_eq!(analysis.score.value, 30);
    assert_eq!(analysis.suggestions.len(), 6);
    for criterion in Criterion::ALL {
        assert_eq!(analysis.criteria.get(criterion), criterion.is_constant());
    }
}

#[test]
fn unfetchable_url_is_failure_shape() {
    let engine = AnalysisEngine::new().expect("engine");
    let outcome = engine.analyze("notaurl");

    let failure = outcome.as_failure().expect("fetch should fail");
    assert_eq!(failure.url, "notaurl");
    assert!(!failure.error.is_empty());
    assert!(outcome.score().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let outcome = analyze(server.uri()).await;
    let failure = outcome.as_failure().expect("404 should be a failure");
    assert!(failure.error.contains("404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(FULL_POLICY_HTML)
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let url = server.uri();
    let outcome = tokio::task::spawn_blocking(move || {
        let settings = FetchSettings {
            timeout: Duration::from_millis(50),
            ..FetchSettings::default()
        };
        AnalysisEngine::with_settings(&settings)
            .expect("engine")
            .analyze(&url)
    })
    .await
    .expect("analysis thread");

    assert!(!outcome.is_success(), "timeout should produce a failure");
}

#[tokio::test(flavor = "multi_thread")]
async fn matching_is_case_insensitive() {
    let server = serve("<html><body>PRIVACY POLICY</body></html>").await;
    let outcome = analyze(server.uri()).await;

    let analysis = outcome.as_success().expect("fetch should succeed");
    assert!(analysis.criteria.labeled_privacy_policy);
}

#[tokio::test(flavor = "multi_thread")]
async fn label_spans_line_breaks() {
    let server = serve("<html><body>Privacy\n        Policy</body></html>").await;
    let outcome = analyze(server.uri()).await;

    let analysis = outcome.as_success().expect("fetch should succeed");
    assert!(analysis.criteria.labeled_privacy_policy);
}

#[tokio::test(flavor = "multi_thread")]
async fn redirects_are_followed() {
    let server = MockServer::start().await;
    let target = format!("{}/policy", server.uri());

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", target.as_str()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/policy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(FULL_POLICY_HTML)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let outcome = analyze(format!("{}/old", server.uri())).await;
    let analysis = outcome.as_success().expect("redirect should be followed");
    assert!(analysis.url.ends_with("/policy"));
    assert_eq!(analysis.score.value, MAX_SCORE);
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_analysis_of_same_content_is_identical() {
    let server = serve(FULL_POLICY_HTML).await;

    let first = analyze(server.uri()).await;
    let second = analyze(server.uri()).await;

    let (a, b) = (
        first.as_success().expect("fetch should succeed"),
        second.as_success().expect("fetch should succeed"),
    );
    assert_eq!(a.criteria, b.criteria);
    assert_eq!(a.score, b.score);
    assert_eq!(a.suggestions, b.suggestions);
}
