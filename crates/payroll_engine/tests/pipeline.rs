mod common;

use calamine::{open_workbook, Data, Reader, Xlsx};
use payroll_core::{Cents, Desk, PayPeriod, PayrollConfig, Post, UnknownTitlePolicy};
use payroll_engine::{
    DeskError, FailureKind, FetchError, FetchSettings, HtmlTextExtractor, PayrollRun, PostFetcher,
    ReqwestPostFetcher,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{init_logging, wp_post};

fn desk(category_id: u32, name: &str) -> Desk {
    Desk {
        category_id,
        name: name.to_string(),
        enabled: true,
    }
}

async fn mount_feed(server: &MockServer, category: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(query_param("categories", category))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn only_paid_writer_in_window_gets_a_sheet() {
    init_logging();
    let server = MockServer::start().await;
    mount_feed(
        &server,
        "31",
        json!([
            wp_post("2023-03-05T10:00:00", "Story A", &["Writer A"], "Staff Writer", 200),
            wp_post("2023-03-06T10:00:00", "Story B", &["Writer B"], "Editor-in-chief", 500),
            wp_post("2023-04-02T10:00:00", "Too late", &["Writer C"], "Staff Writer", 900),
            wp_post("2023-02-27T10:00:00", "Too early", &["Writer C"], "Staff Writer", 900),
        ]),
    )
    .await;

    let temp = tempfile::TempDir::new().unwrap();
    let config = PayrollConfig::default();
    let fetcher = ReqwestPostFetcher::new(FetchSettings::with_api_base(server.uri())).unwrap();
    let run = PayrollRun::new(
        &config,
        PayPeriod::new(2023, 3).unwrap(),
        temp.path().to_path_buf(),
        &fetcher,
        &HtmlTextExtractor,
    )
    .unwrap();

    let summary = run.run_desk(&desk(31, "News")).await.unwrap();

    assert_eq!(summary.posts, 2);
    assert_eq!(summary.sheets, 1);
    assert_eq!(summary.total, Cents::new(50));
    assert_eq!(
        summary.output_path,
        Some(temp.path().join("Pays-March-News.xlsx"))
    );

    let mut workbook: Xlsx<_> = open_workbook(temp.path().join("Pays-March-News.xlsx")).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Writer A".to_string()]);
    let range = workbook.worksheet_range("Writer A").unwrap();
    let rows: Vec<Vec<Data>> = range.rows().map(|row| row.to_vec()).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[2],
        vec![
            Data::String("3/5/2023".to_string()),
            Data::String("Story A".to_string()),
            Data::Float(200.0),
            Data::Float(0.5),
        ]
    );
    assert_eq!(rows[3][3], Data::Float(0.5));
}

#[tokio::test]
async fn desk_with_nothing_owed_writes_no_file() {
    init_logging();
    let server = MockServer::start().await;
    mount_feed(
        &server,
        "31",
        json!([wp_post("2023-03-05T10:00:00", "Editorial", &["Ed"], "Editor-in-chief", 900)]),
    )
    .await;

    let temp = tempfile::TempDir::new().unwrap();
    let config = PayrollConfig::default();
    let fetcher = ReqwestPostFetcher::new(FetchSettings::with_api_base(server.uri())).unwrap();
    let run = PayrollRun::new(
        &config,
        PayPeriod::new(2023, 3).unwrap(),
        temp.path().to_path_buf(),
        &fetcher,
        &HtmlTextExtractor,
    )
    .unwrap();

    let summary = run.run_desk(&desk(31, "News")).await.unwrap();

    assert_eq!(summary.output_path, None);
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn missing_directory_entry_aborts_before_writing() {
    init_logging();
    let server = MockServer::start().await;
    mount_feed(
        &server,
        "31",
        json!([
            wp_post("2023-03-05T10:00:00", "Paid", &["Ann"], "Staff Writer", 400),
            wp_post("2023-03-06T10:00:00", "Staff", &["Nobody Known"], "The Pitt News Staff", 400),
        ]),
    )
    .await;

    let temp = tempfile::TempDir::new().unwrap();
    let config = PayrollConfig::default();
    let fetcher = ReqwestPostFetcher::new(FetchSettings::with_api_base(server.uri())).unwrap();
    let run = PayrollRun::new(
        &config,
        PayPeriod::new(2023, 3).unwrap(),
        temp.path().to_path_buf(),
        &fetcher,
        &HtmlTextExtractor,
    )
    .unwrap();

    let err = run.run_desk(&desk(31, "News")).await.unwrap_err();

    assert!(matches!(err, DeskError::Pay { .. }));
    assert!(err.to_string().contains("Nobody Known"));
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

/// Serves canned posts for one category and fails for every other.
struct OneDeskFetcher {
    category_id: u32,
    posts: Vec<Post>,
}

#[async_trait::async_trait]
impl PostFetcher for OneDeskFetcher {
    async fn fetch_posts(&self, category_id: u32) -> Result<Vec<Post>, FetchError> {
        if category_id == self.category_id {
            Ok(self.posts.clone())
        } else {
            Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "boom".to_string(),
            })
        }
    }
}

#[tokio::test]
async fn failing_desk_does_not_stop_its_siblings() {
    init_logging();
    let posts: Vec<Post> = serde_json::from_value(json!([wp_post(
        "2023-03-10T09:00:00",
        "Game day",
        &["Sam"],
        "Senior Staff Writer",
        1000
    )]))
    .unwrap();
    let fetcher = OneDeskFetcher {
        category_id: 7,
        posts,
    };
    let config = PayrollConfig {
        desks: vec![
            desk(31, "News"),
            desk(7, "Sports"),
            Desk {
                enabled: false,
                ..desk(9, "Opinions")
            },
        ],
        unknown_title: UnknownTitlePolicy::Fail,
        ..PayrollConfig::default()
    };

    let temp = tempfile::TempDir::new().unwrap();
    let run = PayrollRun::new(
        &config,
        PayPeriod::new(2023, 3).unwrap(),
        temp.path().to_path_buf(),
        &fetcher,
        &HtmlTextExtractor,
    )
    .unwrap();

    let results = run.run_all().await;

    assert_eq!(results.len(), 2);
    assert!(matches!(results[0], Err(DeskError::Fetch { .. })));
    let sports = results[1].as_ref().unwrap();
    assert_eq!(sports.total, Cents::new(350));
    assert!(temp.path().join("Pays-March-Sports.xlsx").exists());
}
