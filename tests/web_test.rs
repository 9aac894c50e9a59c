//! Integration tests for the HTML routes against a mocked Stats API

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mlb_hitter_lookup::{
    web::{build_router, AppState},
    LookupWorkflow, StatsApiClient,
};
use serde_json::json;
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn app_for(server: &MockServer) -> Router {
    let client = StatsApiClient::new(server.uri(), Duration::from_secs(2)).unwrap();
    build_router(AppState::new(LookupWorkflow::from_client(client)))
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn mount_search(server: &MockServer, name: &str, people: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/people/search"))
        .and(query_param("names", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "people": people })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_home_and_health() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let home = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(home.status(), StatusCode::OK);
    assert!(body_text(home).await.contains("name=\"player_name\""));

    let health = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(body_text(health).await, "ok");
}

#[tokio::test]
async fn test_search_blank_name_shows_error_without_upstream_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(form_post("/player", "player_name=++&scope=career"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Please enter a player name."));
}

#[tokio::test]
async fn test_search_no_match_shows_error() {
    let server = MockServer::start().await;
    mount_search(&server, "Zzyzx", json!([])).await;

    let response = app_for(&server)
        .oneshot(form_post("/player", "player_name=Zzyzx"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No matching players found"));
}

#[tokio::test]
async fn test_search_single_match_redirects_to_player_page() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "Aaron Judge",
        json!([{ "id": 592450, "fullName": "Aaron Judge", "currentTeam": { "name": "New York Yankees" } }]),
    )
    .await;

    let response = app_for(&server)
        .oneshot(form_post(
            "/player",
            "player_name=Aaron+Judge&scope=season&season=2022",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/player/592450?scope=season&season=2022"
    );
}

#[tokio::test]
async fn test_search_multiple_matches_shows_selection() {
    let server = MockServer::start().await;
    mount_search(
        &server,
        "Will Smith",
        json!([
            { "id": 669257, "fullName": "Will Smith", "currentTeam": { "name": "Los Angeles Dodgers" } },
            { "id": 519293, "fullName": "Will Smith", "currentTeam": { "name": "Kansas City Royals" } }
        ]),
    )
    .await;

    let response = app_for(&server)
        .oneshot(form_post("/player", "player_name=Will+Smith&scope=career&season=2020"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("action=\"/player/select\""));
    let dodgers = html.find("Los Angeles Dodgers").unwrap();
    let royals = html.find("Kansas City Royals").unwrap();
    assert!(dodgers < royals);
    // career lookups carry no season forward
    assert!(html.contains("name=\"season\" value=\"\""));
}

#[tokio::test]
async fn test_search_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(form_post("/player", "player_name=Judge"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_text(response).await.contains("Error searching players"));
}

#[tokio::test]
async fn test_select_redirects_with_scope() {
    let server = MockServer::start().await;

    let response = app_for(&server)
        .oneshot(form_post(
            "/player/select",
            "player_id=519293&scope=season&season=2019",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/player/519293?scope=season&season=2019"
    );
}

#[tokio::test]
async fn test_select_without_player_shows_error() {
    let server = MockServer::start().await;

    let response = app_for(&server)
        .oneshot(form_post("/player/select", "scope=career"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No player selected."));
}

#[tokio::test]
async fn test_player_page_renders_stats_and_logo() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/592450/stats"))
        .and(query_param("stats", "season"))
        .and(query_param("season", "2022"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stats": [ { "splits": [ { "stat": { "homeRuns": 62, "avg": ".311", "ops": "1.111" } } ] } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/people/592450"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "people": [ {
                "id": 592450,
                "fullName": "Aaron Judge",
                "primaryPosition": { "abbreviation": "RF" },
                "currentTeam": { "id": 147, "name": "New York Yankees" }
            } ]
        })))
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(get("/player/592450?scope=season&season=2022"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>Aaron Judge</h1>"));
    assert!(html.contains("https://www.mlbstatic.com/team-logos/team-cap-on-dark/147.svg"));
    assert!(html.contains("<tr><td>homeRuns</td><td>62</td></tr>"));
    assert!(html.contains("<tr><td>ops</td><td>1.111</td></tr>"));
}

#[tokio::test]
async fn test_player_page_without_stats_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/people/1/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "stats": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/people/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "people": [] })))
        .mount(&server)
        .await;

    let response = app_for(&server).oneshot(get("/player/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response)
        .await
        .contains("No stats available for this player/scope/season."));
}

#[tokio::test]
async fn test_player_page_upstream_failure_is_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let response = app_for(&server).oneshot(get("/player/1?scope=career")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_text(response).await.contains("Error fetching stats"));
}

#[tokio::test]
async fn test_player_page_unknown_scope_is_bad_request() {
    let server = MockServer::start().await;

    let response = app_for(&server)
        .oneshot(get("/player/1?scope=postseason"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
