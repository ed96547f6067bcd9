//! Integration tests for the crawler
//!
//! These tests use wiremock to stand in for the listing site and exercise
//! the full crawl cycle end-to-end: pagination, detail following, metadata
//! threading, retries and failure accounting.

use boardwalk::config::{Config, CrawlerConfig, OutputConfig};
use boardwalk::crawler::Coordinator;
use boardwalk::fetch::HttpFetcher;
use boardwalk::output::MemorySink;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the given seed URL
///
/// Delays are zeroed so retry paths run fast; one retry is allowed so the
/// transient-failure tests have something to exercise.
fn create_test_config(seed_url: &str) -> Config {
    Config {
        crawler: CrawlerConfig {
            seed_url: seed_url.to_string(),
            user_agent: "TestAgent/1.0".to_string(),
            download_delay: 0,
            retry_delay: 0,
            max_retries: 1,
            max_concurrent_details: 5,
            request_timeout: 5,
        },
        output: OutputConfig {
            records_path: "./unused.jsonl".to_string(),
        },
    }
}

fn html_response(body: String) -> ResponseTemplate {
    // `set_body_raw` carries the content type; a body setter's own mime wins
    // over a later `insert_header`, so the type must be given to the setter.
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

fn listing_page(entries: &[(&str, &str, &str)], next: Option<&str>) -> String {
    let mut body = String::from("<html><body><ul>");
    for (href, title, hood) in entries {
        body.push_str(&format!(
            r#"<li><p class="result-info">
                <a href="{}" class="result-title hdrlnk">{}</a>
                <span class="result-meta"><span class="result-hood"> ({})</span></span>
            </p></li>"#,
            href, title, hood
        ));
    }
    body.push_str("</ul>");
    if let Some(next_href) = next {
        body.push_str(&format!(
            r#"<a href="{}" class="button next">next &gt;</a>"#,
            next_href
        ));
    }
    body.push_str("</body></html>");
    body
}

fn detail_page(description: &str, compensation: &str, employment: &str) -> String {
    format!(
        r#"<html><body>
        <p class="attrgroup">
            <span>compensation: <b>{}</b></span>
            <span>employment type: <b>{}</b></span>
        </p>
        <section id="postingbody">{}</section>
        </body></html>"#,
        compensation, employment, description
    )
}

async fn run_crawl(server: &MockServer, sink: MemorySink) -> boardwalk::CrawlStats {
    let seed = format!("{}/search/", server.uri());
    let config = create_test_config(&seed);

    let fetcher = HttpFetcher::new(&config.crawler).expect("Failed to build fetcher");
    let coordinator = Coordinator::new(&config, fetcher, sink);

    coordinator
        .run(Url::parse(&seed).expect("Failed to parse seed"))
        .await
        .expect("Crawl failed")
}

#[tokio::test]
async fn test_two_page_crawl_exact_request_counts() {
    let mock_server = MockServer::start().await;

    // Page 1: two entries and a next link
    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html_response(listing_page(
            &[
                ("/d/chief-engineer/1.html", "Chief Engineer", "Brooklyn"),
                ("/d/plant-operator/2.html", "Plant Operator", "Queens"),
            ],
            Some("/search/page2"),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Page 2: no entries, no next link -> termination
    Mock::given(method("GET"))
        .and(path("/search/page2"))
        .respond_with(html_response(listing_page(&[], None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/d/chief-engineer/1.html"))
        .respond_with(html_response(detail_page("Run the plant.", "$90k", "full-time")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/d/plant-operator/2.html"))
        .respond_with(html_response(detail_page("Operate it.", "$30/hr", "part-time")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sink = MemorySink::new();
    let stats = run_crawl(&mock_server, sink.clone()).await;

    // Exactly 2 listing fetches + 2 detail fetches; wiremock verifies the
    // expect(1) counts when the server drops.
    assert_eq!(stats.listing_pages, 2);
    assert_eq!(stats.stubs_discovered, 2);
    assert_eq!(stats.records_emitted, 2);
    assert_eq!(stats.failed_requests(), 0);

    let records = sink.records();
    assert_eq!(records.len(), 2);

    let chief = records
        .iter()
        .find(|r| r.title == "Chief Engineer")
        .expect("Chief Engineer record missing");
    assert_eq!(chief.address, "Brooklyn");
    assert_eq!(chief.description, "Run the plant.");
    assert_eq!(chief.compensation, "$90k");
    assert_eq!(chief.employment_type, "full-time");
    assert!(chief.url.ends_with("/d/chief-engineer/1.html"));
}

#[tokio::test]
async fn test_single_page_without_next_link_terminates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html_response(listing_page(
            &[("/d/1.html", "Only Job", "Bronx")],
            None,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/d/1.html"))
        .respond_with(html_response(detail_page("Just this one.", "$1", "gig")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sink = MemorySink::new();
    let stats = run_crawl(&mock_server, sink.clone()).await;

    assert_eq!(stats.listing_pages, 1);
    assert_eq!(stats.listing_failures, 0);
    assert_eq!(stats.records_emitted, 1);
}

#[tokio::test]
async fn test_stub_metadata_threads_through_detail_phase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html_response(listing_page(
            &[("/d/1.html", "Chief Engineer", "Brooklyn")],
            None,
        )))
        .mount(&mock_server)
        .await;

    // The detail page carries none of the stub's fields
    Mock::given(method("GET"))
        .and(path("/d/1.html"))
        .respond_with(html_response(
            r#"<html><body><section id="postingbody">Unrelated body text</section></body></html>"#
                .to_string(),
        ))
        .mount(&mock_server)
        .await;

    let sink = MemorySink::new();
    run_crawl(&mock_server, sink.clone()).await;

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Chief Engineer");
    assert_eq!(records[0].address, "Brooklyn");
    assert_eq!(records[0].description, "Unrelated body text");
    // Attribute group absent -> defaults, not failure
    assert_eq!(records[0].compensation, "");
    assert_eq!(records[0].employment_type, "");
}

#[tokio::test]
async fn test_detail_server_error_is_counted_not_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html_response(listing_page(
            &[("/d/good.html", "Good", "Brooklyn"), ("/d/bad.html", "Bad", "Queens")],
            None,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/d/good.html"))
        .respond_with(html_response(detail_page("Fine.", "$1", "gig")))
        .mount(&mock_server)
        .await;

    // Persistent 500: initial attempt + 1 retry, then counted as failed
    Mock::given(method("GET"))
        .and(path("/d/bad.html"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let sink = MemorySink::new();
    let stats = run_crawl(&mock_server, sink.clone()).await;

    assert_eq!(stats.records_emitted, 1);
    assert_eq!(stats.detail_failures, 1);
    assert_eq!(sink.records()[0].title, "Good");
}

#[tokio::test]
async fn test_transient_server_error_recovers_on_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html_response(listing_page(
            &[("/d/1.html", "Flaky", "Brooklyn")],
            None,
        )))
        .mount(&mock_server)
        .await;

    // First attempt fails, the retry succeeds
    Mock::given(method("GET"))
        .and(path("/d/1.html"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/d/1.html"))
        .respond_with(html_response(detail_page("Recovered.", "$2", "gig")))
        .mount(&mock_server)
        .await;

    let sink = MemorySink::new();
    let stats = run_crawl(&mock_server, sink.clone()).await;

    assert_eq!(stats.detail_failures, 0);
    assert_eq!(stats.records_emitted, 1);
    assert_eq!(sink.records()[0].description, "Recovered.");
}

#[tokio::test]
async fn test_listing_fetch_failure_halts_pagination() {
    let mock_server = MockServer::start().await;

    // Page 1 advertises a next page that only ever returns 404
    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html_response(listing_page(
            &[("/d/1.html", "Survivor", "Brooklyn")],
            Some("/search/gone"),
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/d/1.html"))
        .respond_with(html_response(detail_page("Still emitted.", "$1", "gig")))
        .mount(&mock_server)
        .await;

    let sink = MemorySink::new();
    let stats = run_crawl(&mock_server, sink.clone()).await;

    // The dead listing page halts pagination but the outstanding detail
    // fetch still resolves and emits.
    assert_eq!(stats.listing_pages, 1);
    assert_eq!(stats.listing_failures, 1);
    assert_eq!(stats.records_emitted, 1);
}

#[tokio::test]
async fn test_non_html_detail_is_a_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html_response(listing_page(
            &[("/d/1.pdf", "Binary", "Brooklyn")],
            None,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/d/1.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0x25, 0x50, 0x44, 0x46]) // %PDF
                .insert_header("content-type", "application/pdf"),
        )
        .expect(1) // content mismatch is not retried
        .mount(&mock_server)
        .await;

    let sink = MemorySink::new();
    let stats = run_crawl(&mock_server, sink.clone()).await;

    assert_eq!(stats.records_emitted, 0);
    assert_eq!(stats.detail_failures, 1);
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(header("user-agent", "TestAgent/1.0"))
        .respond_with(html_response(listing_page(&[], None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stats = run_crawl(&mock_server, MemorySink::new()).await;
    assert_eq!(stats.listing_pages, 1);
}

#[tokio::test]
async fn test_crawl_writes_jsonl_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(html_response(listing_page(
            &[("/d/1.html", "Chief Engineer", "Brooklyn")],
            None,
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/d/1.html"))
        .respond_with(html_response(detail_page("Run the plant.", "$90k", "full-time")))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let records_path = dir.path().join("records.jsonl");

    let mut config = create_test_config(&format!("{}/search/", mock_server.uri()));
    config.output.records_path = records_path.display().to_string();

    // Top-level entry point: builds the executor and sink from config
    let stats = boardwalk::crawler::crawl(config).await.expect("Crawl failed");
    assert_eq!(stats.records_emitted, 1);

    let contents = std::fs::read_to_string(&records_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);

    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["Title"], "Chief Engineer");
    assert_eq!(record["Address"], "Brooklyn");
    assert_eq!(record["Compensation"], "$90k");
    assert_eq!(record["Employment Type"], "full-time");
    assert_eq!(record["Description"], "Run the plant.");
}
