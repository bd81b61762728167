use indicatif::ProgressBar;
use pretty_assertions::assert_eq;
use seatmap_crawler::page::HttpPage;
use seatmap_crawler::store::JsonDirStore;
use seatmap_crawler::{AirlineRef, DetailScraper, RunStats};
use std::path::Path;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORIGIN: &str = "https://seatmaps.com";

const DELTA: &str = r#"<html><body>
<h1>Delta Air Lines Fleet</h1>
<a href="/seatmap/delta/737-800">Boeing 737-800</a>
<a href="/seatmap/delta/a320">Airbus A320</a>
</body></html>"#;

fn fleet_page(title: &str) -> String {
    format!(
        r#"<html><body><h1>{}</h1><a href="/seatmap/x/a321">Airbus A321</a></body></html>"#,
        title
    )
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn airline(server: &MockServer, name: &str, route: &str) -> AirlineRef {
    AirlineRef {
        name: name.to_string(),
        url: format!("{}{}", server.uri(), route),
    }
}

async fn run(dir: &Path, airlines: &[AirlineRef]) -> RunStats {
    let page = HttpPage::new(Duration::from_secs(5)).unwrap();
    let storage = JsonDirStore::open(dir).await.unwrap();
    let scraper = DetailScraper::new(page, storage, ORIGIN, Duration::ZERO);
    scraper.run(airlines, &ProgressBar::hidden()).await
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}

#[tokio::test]
async fn test_delta_end_to_end() {
    let server = MockServer::start().await;
    mount_page(&server, "/airlines/delta-air-lines/", DELTA.to_string()).await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("airlines_data");

    let airlines = vec![airline(&server, "Delta Air Lines", "/airlines/delta-air-lines/")];
    let stats = run(&out, &airlines).await;
    assert_eq!(stats.saved, 1);

    let written = std::fs::read_to_string(out.join("Delta Air Lines.json")).unwrap();
    let expected = format!(
        r#"{{
  "name": "Delta Air Lines",
  "url": "{}/airlines/delta-air-lines/",
  "display_name": "Delta Air Lines Fleet",
  "aircraft": [
    {{
      "aircraft_name": "Boeing 737-800",
      "seatmap_url": "https://seatmaps.com/seatmap/delta/737-800"
    }},
    {{
      "aircraft_name": "Airbus A320",
      "seatmap_url": "https://seatmaps.com/seatmap/delta/a320"
    }}
  ]
}}"#,
        server.uri()
    );
    assert_eq!(written, expected);
}

#[tokio::test]
async fn test_second_run_fetches_nothing() {
    let server = MockServer::start().await;
    mount_page(&server, "/airlines/delta/", fleet_page("Delta")).await;
    mount_page(&server, "/airlines/klm/", fleet_page("KLM")).await;
    let dir = tempfile::tempdir().unwrap();

    let airlines = vec![
        airline(&server, "Delta", "/airlines/delta/"),
        airline(&server, "KLM", "/airlines/klm/"),
    ];
    let first = run(dir.path(), &airlines).await;
    assert_eq!(first.saved, 2);
    assert_eq!(request_count(&server).await, 2);

    let second = run(dir.path(), &airlines).await;
    assert_eq!(
        second,
        RunStats {
            skipped: 2,
            ..Default::default()
        }
    );
    assert_eq!(request_count(&server).await, 2);
}

#[tokio::test]
async fn test_resume_only_refetches_missing_record() {
    let server = MockServer::start().await;
    mount_page(&server, "/airlines/delta/", fleet_page("Delta")).await;
    mount_page(&server, "/airlines/klm/", fleet_page("KLM")).await;
    mount_page(&server, "/airlines/qantas/", fleet_page("Qantas")).await;
    let dir = tempfile::tempdir().unwrap();

    let airlines = vec![
        airline(&server, "Delta", "/airlines/delta/"),
        airline(&server, "KLM", "/airlines/klm/"),
        airline(&server, "Qantas", "/airlines/qantas/"),
    ];
    run(dir.path(), &airlines).await;
    let delta_before = std::fs::read(dir.path().join("Delta.json")).unwrap();
    let qantas_before = std::fs::read(dir.path().join("Qantas.json")).unwrap();

    std::fs::remove_file(dir.path().join("KLM.json")).unwrap();
    let stats = run(dir.path(), &airlines).await;

    assert_eq!(stats.saved, 1);
    assert_eq!(stats.skipped, 2);
    assert!(dir.path().join("KLM.json").is_file());
    assert_eq!(std::fs::read(dir.path().join("Delta.json")).unwrap(), delta_before);
    assert_eq!(std::fs::read(dir.path().join("Qantas.json")).unwrap(), qantas_before);

    let requests = server.received_requests().await.unwrap();
    let klm_requests = requests
        .iter()
        .filter(|r| r.url.path() == "/airlines/klm/")
        .count();
    assert_eq!(requests.len(), 4);
    assert_eq!(klm_requests, 2);
}

#[tokio::test]
async fn test_failures_leave_no_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/airlines/slow/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(fleet_page("Slow"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/airlines/gone/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(&server, "/airlines/ok/", fleet_page("Ok")).await;
    let dir = tempfile::tempdir().unwrap();

    let airlines = vec![
        airline(&server, "Slow", "/airlines/slow/"),
        airline(&server, "Gone", "/airlines/gone/"),
        airline(&server, "Ok", "/airlines/ok/"),
    ];
    let page = HttpPage::new(Duration::from_millis(300)).unwrap();
    let storage = JsonDirStore::open(dir.path()).await.unwrap();
    let scraper = DetailScraper::new(page, storage, ORIGIN, Duration::ZERO);
    let stats = scraper.run(&airlines, &ProgressBar::hidden()).await;

    assert_eq!(
        stats,
        RunStats {
            skipped: 0,
            saved: 1,
            timed_out: 1,
            failed: 1,
        }
    );
    assert!(!dir.path().join("Slow.json").exists());
    assert!(!dir.path().join("Gone.json").exists());
    assert!(dir.path().join("Ok.json").is_file());
}

#[tokio::test]
async fn test_slash_in_name_writes_flat_file() {
    let server = MockServer::start().await;
    mount_page(&server, "/airlines/ab/", fleet_page("A/B Fleet")).await;
    let dir = tempfile::tempdir().unwrap();

    run(dir.path(), &[airline(&server, "A/B", "/airlines/ab/")]).await;

    assert!(dir.path().join("A_B.json").is_file());
    assert!(!dir.path().join("A").exists());
}

#[tokio::test]
async fn test_error_page_with_heading_is_not_stored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/airlines/missing/"))
        .respond_with(ResponseTemplate::new(404).set_body_string(fleet_page("Page not found")))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();

    let stats = run(dir.path(), &[airline(&server, "Missing", "/airlines/missing/")]).await;

    assert_eq!(stats.failed, 1);
    assert!(!dir.path().join("Missing.json").exists());
}
