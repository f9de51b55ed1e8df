//! End-to-end scenarios for the projects panel
//!
//! Drives the loader against a mock API and feeds the result through the
//! panel controller the same way the desktop page does.

use portfolio_core::content::DEGRADED_MESSAGE;
use portfolio_core::{ApiError, GitHubClient, PanelController, ScrollTracker, Theme};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HANDLE: &str = "JessyTeixeira-QA";
const REPOS_PATH: &str = "/api/users/JessyTeixeira-QA/repos";

fn repo(id: u64, name: &str, fork: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "html_url": format!("https://github.com/{HANDLE}/{name}"),
        "language": "JavaScript",
        "updated_at": "2025-10-20T10:00:00Z",
        "fork": fork,
        "archived": false
    })
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(REPOS_PATH))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

async fn run_page_load(server: &MockServer) -> PanelController {
    let client = GitHubClient::new(format!("{}/api", server.uri())).unwrap();
    let mut controller = PanelController::new();

    let ticket = controller.begin();
    let result = client.load_projects(HANDLE).await;
    assert!(controller.complete(ticket, result));

    controller
}

// ============================================================================
// Project panel
// ============================================================================

#[tokio::test]
async fn scenario_two_repos_load() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([
            repo(1, "cypress-e2e", false),
            repo(2, "postman-collections", false),
        ])),
    )
    .await;

    let controller = run_page_load(&server).await;
    let panel = controller.panel();

    assert!(!panel.is_loading());
    assert!(panel.error().is_none());
    assert_eq!(panel.projects().len(), 2);
    assert_eq!(panel.projects()[0].name, "cypress-e2e");
    assert_eq!(panel.projects()[1].updated_at, "20/10/2025");
}

#[tokio::test]
async fn scenario_error_status_degrades() {
    for status in [404u16, 500] {
        let server = MockServer::start().await;
        mount(&server, ResponseTemplate::new(status)).await;

        let controller = run_page_load(&server).await;
        let panel = controller.panel();

        assert!(!panel.is_loading());
        assert_eq!(panel.error(), Some(DEGRADED_MESSAGE));

        let names: Vec<_> = panel.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["allbooks", "api-alurabooks"]);
    }
}

#[tokio::test]
async fn scenario_fork_is_hidden() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([
            repo(1, "someone-elses-lib", true),
            repo(2, "my-test-suite", false),
        ])),
    )
    .await;

    let controller = run_page_load(&server).await;
    let projects = controller.panel().projects();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "my-test-suite");
}

#[tokio::test]
async fn scenario_malformed_body_degrades() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"),
    )
    .await;

    let controller = run_page_load(&server).await;

    assert_eq!(controller.panel().error(), Some(DEGRADED_MESSAGE));
}

#[tokio::test]
async fn scenario_unreachable_host_degrades() {
    // Nothing listens on port 1.
    let client = GitHubClient::new("http://127.0.0.1:1/api").unwrap();
    let mut controller = PanelController::new();

    let ticket = controller.begin();
    let result = client.load_projects(HANDLE).await;
    assert!(matches!(result, Err(ApiError::Network(_))));

    assert!(controller.complete(ticket, result));
    let panel = controller.panel();

    assert!(!panel.is_loading());
    assert_eq!(panel.error(), Some(DEGRADED_MESSAGE));

    let names: Vec<_> = panel.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["allbooks", "api-alurabooks"]);
}

#[tokio::test]
async fn scenario_late_result_after_teardown_is_dropped() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!([repo(1, "late", false)])),
    )
    .await;

    let client = GitHubClient::new(format!("{}/api", server.uri())).unwrap();
    let mut controller = PanelController::new();

    let ticket = controller.begin();
    controller.teardown();
    let result = client.load_projects(HANDLE).await;

    assert!(!controller.complete(ticket, result));
    assert!(controller.panel().is_loading());
}

// ============================================================================
// Header and theme
// ============================================================================

#[test]
fn scenario_scroll_toggles_header() {
    let mut tracker = ScrollTracker::default();

    tracker.observe(0.0);
    assert!(!tracker.scrolled());

    tracker.observe(80.0);
    assert!(tracker.scrolled());

    tracker.observe(30.0);
    assert!(!tracker.scrolled());
}

#[test]
fn scenario_theme_round_trip() {
    let original = Theme::default();
    let mut theme = original;

    theme.toggle();
    theme.toggle();

    assert_eq!(theme, original);
}
