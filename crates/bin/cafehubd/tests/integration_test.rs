//! End-to-end smoke tests for the full cafehubd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cafehub_adapter_http_axum::router;
use cafehub_adapter_http_axum::state::AppState;
use cafehub_adapter_storage_sqlite_sqlx::{Config, SqliteCafeRepository};
use cafehub_app::services::cafe_service::CafeService;
use cafehub_domain::auth::ApiKey;
use http_body_util::BodyExt;
use tower::ServiceExt;

const SECRET: &str = "TopSecretAPIKey";
const SAVED: &str = "Successfully added the new cafe";

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteCafeRepository::new(db.pool().clone());
    let state = AppState::new(CafeService::new(repo, ApiKey::new(SECRET)));

    router::build(state)
}

async fn call(app: &axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    call(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn send(app: &axum::Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    call(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn post_form(app: &axum::Router, form: &str) -> (StatusCode, serde_json::Value) {
    call(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/add")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap(),
    )
    .await
}

const BOUNDARY: &str = "cafehub-boundary";

/// Encode text fields as a `multipart/form-data` body, the way `curl -F` does.
fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

async fn post_multipart(app: &axum::Router, body: String) -> (StatusCode, serde_json::Value) {
    call(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/add")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

fn cafe_form(name: &str, loc: &str) -> String {
    format!(
        "name={name}&map_url=https%3A%2F%2Fmaps.example%2F{name}&img_url=https%3A%2F%2Fimg.example%2F{name}.jpg\
         &loc={loc}&sockets=1&toilet=1&wifi=1&calls=&seats=20-30&coffee_price=%C2%A32.40"
    )
}

/// Find the id of the cafe called `name` through the list endpoint.
async fn id_of(app: &axum::Router, name: &str) -> i64 {
    let (_, body) = get(app, "/api/all").await;
    body["cafes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|cafe| cafe["name"] == name)
        .and_then(|cafe| cafe["id"].as_i64())
        .expect("cafe should be listed")
}

// ---------------------------------------------------------------------------
// Reads on an empty directory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_reads_on_empty_directory() {
    let app = app().await;

    for uri in ["/api/random", "/api/all", "/api/search?loc=Peckham"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"]["Not Found"], "No cafes found in the database");
    }
}

// ---------------------------------------------------------------------------
// Add, then list, search and random
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_make_added_cafe_retrievable() {
    let app = app().await;

    let (status, body) = post_form(&app, &cafe_form("Kaffeine", "Fitzrovia")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"]["success"], SAVED);

    let (status, body) = get(&app, "/api/all").await;
    assert_eq!(status, StatusCode::OK);
    let cafe = &body["cafes"][0];
    assert_eq!(cafe["name"], "Kaffeine");
    assert_eq!(cafe["map_url"], "https://maps.example/Kaffeine");
    assert_eq!(cafe["location"], "Fitzrovia");
    assert_eq!(cafe["seats"], "20-30");
    assert_eq!(cafe["has_sockets"], true);
    assert_eq!(cafe["can_take_calls"], false);
    assert_eq!(cafe["coffee_price"], "£2.40");

    let (status, body) = get(&app, "/api/search?loc=Fitzrovia").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cafes"][0]["name"], "Kaffeine");

    let (status, body) = get(&app, "/api/random").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cafe"]["name"], "Kaffeine");
}

#[tokio::test]
async fn should_order_lists_by_name_and_search_exactly() {
    let app = app().await;
    post_form(&app, &cafe_form("Monmouth", "Borough")).await;
    post_form(&app, &cafe_form("Attendant", "Borough")).await;
    post_form(&app, &cafe_form("Elsewhere", "borough")).await;

    let (_, body) = get(&app, "/api/all").await;
    let names: Vec<&str> = body["cafes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cafe| cafe["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Attendant", "Elsewhere", "Monmouth"]);

    let (_, body) = get(&app, "/api/search?loc=Borough").await;
    let names: Vec<&str> = body["cafes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cafe| cafe["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Attendant", "Monmouth"]);

    let (status, _) = get(&app, "/api/search?loc=Boro").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_match_nothing_when_search_has_no_location() {
    let app = app().await;
    post_form(&app, &cafe_form("Kaffeine", "Fitzrovia")).await;

    let (status, _) = get(&app, "/api/search").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_pick_random_cafe_from_existing_set() {
    let app = app().await;
    let names = ["Alpha", "Beta", "Gamma"];
    for name in names {
        post_form(&app, &cafe_form(name, "Soho")).await;
    }

    for _ in 0..5 {
        let (status, body) = get(&app, "/api/random").await;
        assert_eq!(status, StatusCode::OK);
        let picked = body["cafe"]["name"].as_str().unwrap();
        assert!(names.contains(&picked), "unexpected pick {picked}");
    }
}

// ---------------------------------------------------------------------------
// Add failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_duplicate_name_and_keep_original() {
    let app = app().await;
    post_form(&app, &cafe_form("Twin", "Peckham")).await;

    let (status, body) = post_form(&app, &cafe_form("Twin", "Hackney")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["error"], "Duplicate entry");

    let (_, body) = get(&app, "/api/all").await;
    let cafes = body["cafes"].as_array().unwrap();
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0]["location"], "Peckham");
}

#[tokio::test]
async fn should_reject_missing_required_field_without_partial_record() {
    let app = app().await;

    let (status, body) = post_form(&app, "name=Half&loc=Soho&seats=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["error"], "Missing input parameters");

    let (status, body) = send(&app, "POST", "/api/add").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["error"], "Missing input parameters");

    let (status, _) = get(&app, "/api/all").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_add_cafe_from_multipart_body() {
    let app = app().await;
    let mut body = multipart_body(&[
        ("name", "Workshop"),
        ("map_url", "https://maps.example/workshop"),
        ("img_url", "https://img.example/workshop.jpg"),
        ("loc", "Clerkenwell"),
        ("sockets", "1"),
        ("toilet", ""),
        ("wifi", "1"),
        ("calls", "false"),
        ("seats", "30-40"),
        ("coffee_price", "£3.00"),
    ]);
    // An attached file is not a form field.
    body.insert_str(
        0,
        &format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"name\"; filename=\"menu.txt\"\r\n\
             Content-Type: text/plain\r\n\r\nFile Name\r\n"
        ),
    );

    let (status, body) = post_multipart(&app, body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"]["success"], SAVED);

    let (status, body) = get(&app, "/api/search?loc=Clerkenwell").await;
    assert_eq!(status, StatusCode::OK);
    let cafe = &body["cafes"][0];
    assert_eq!(cafe["name"], "Workshop");
    assert_eq!(cafe["seats"], "30-40");
    assert_eq!(cafe["has_sockets"], true);
    assert_eq!(cafe["has_toilet"], false);
    assert_eq!(cafe["can_take_calls"], true);
    assert_eq!(cafe["coffee_price"], "£3.00");
}

#[tokio::test]
async fn should_reject_incomplete_multipart_body_as_missing_input() {
    let app = app().await;
    let body = multipart_body(&[("name", "Half"), ("loc", "Soho")]);

    let (status, body) = post_multipart(&app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["error"], "Missing input parameters");
}

#[tokio::test]
async fn should_use_first_value_of_repeated_form_field() {
    let app = app().await;
    let form = format!("{}&name=Shadow&loc=Elsewhere", cafe_form("Original", "Hoxton"));

    let (status, _) = post_form(&app, &form).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/all").await;
    let cafes = body["cafes"].as_array().unwrap();
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0]["name"], "Original");
    assert_eq!(cafes[0]["location"], "Hoxton");
}

// ---------------------------------------------------------------------------
// Flag derivation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_derive_flags_from_presence_of_text() {
    let app = app().await;
    let form = "name=Flags&map_url=m&img_url=i&loc=Soho&seats=5&sockets=false&toilet=&wifi=no";
    let (status, _) = post_form(&app, form).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/all").await;
    let cafe = &body["cafes"][0];
    assert_eq!(cafe["has_sockets"], true);
    assert_eq!(cafe["has_toilet"], false);
    assert_eq!(cafe["has_wifi"], true);
    assert_eq!(cafe["can_take_calls"], false);
    assert!(cafe["coffee_price"].is_null());
}

#[tokio::test]
async fn should_show_placeholder_for_empty_urls() {
    let app = app().await;
    let (status, _) = post_form(&app, "name=Bare&map_url=&img_url=&loc=Soho&seats=5").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/random").await;
    assert_eq!(body["cafe"]["map_url"], "N/A");
    assert_eq!(body["cafe"]["img_url"], "N/A");
}

// ---------------------------------------------------------------------------
// Price update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_update_price_of_existing_cafe() {
    let app = app().await;
    post_form(&app, &cafe_form("Prufrock", "Farringdon")).await;
    let id = id_of(&app, "Prufrock").await;

    let (status, body) = send(&app, "PATCH", &format!("/api/update-price/{id}?new_price=4.50")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"]["success"], SAVED);

    let (_, body) = get(&app, "/api/search?loc=Farringdon").await;
    assert_eq!(body["cafes"][0]["coffee_price"], "4.50");
}

#[tokio::test]
async fn should_reject_price_update_without_new_price() {
    let app = app().await;
    post_form(&app, &cafe_form("Prufrock", "Farringdon")).await;
    let id = id_of(&app, "Prufrock").await;

    for uri in [
        format!("/api/update-price/{id}"),
        format!("/api/update-price/{id}?new_price="),
    ] {
        let (status, body) = send(&app, "PATCH", &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["error"], "coffee_price cannot be null.");
    }

    let (_, body) = get(&app, "/api/all").await;
    assert_eq!(body["cafes"][0]["coffee_price"], "£2.40");
}

#[tokio::test]
async fn should_use_first_value_of_repeated_new_price() {
    let app = app().await;
    post_form(&app, &cafe_form("Prufrock", "Farringdon")).await;
    let id = id_of(&app, "Prufrock").await;

    let uri = format!("/api/update-price/{id}?new_price=3.20&new_price=9.99");
    let (status, _) = send(&app, "PATCH", &uri).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/api/all").await;
    assert_eq!(body["cafes"][0]["coffee_price"], "3.20");
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_id() {
    let app = app().await;

    let (status, body) = send(&app, "PATCH", "/api/update-price/999?new_price=1.00").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["Not Found"], "This ID Does not Exist.");
}

// ---------------------------------------------------------------------------
// Close report
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_forbid_close_report_with_wrong_or_missing_key() {
    let app = app().await;
    post_form(&app, &cafe_form("Sticky", "Camden")).await;
    let id = id_of(&app, "Sticky").await;

    for uri in [
        format!("/api/report-closed/{id}?api-key=wrong"),
        format!("/api/report-closed/{id}?api-key="),
        format!("/api/report-closed/{id}"),
    ] {
        let (status, body) = send(&app, "DELETE", &uri).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["error"], "Not Authorized to perform this action.");
    }

    let (status, _) = get(&app, "/api/search?loc=Camden").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn should_remove_cafe_when_key_matches() {
    let app = app().await;
    post_form(&app, &cafe_form("Closing", "Camden")).await;
    post_form(&app, &cafe_form("Staying", "Camden")).await;
    let id = id_of(&app, "Closing").await;

    let uri = format!("/api/report-closed/{id}?api-key={SECRET}");
    let (status, body) = send(&app, "DELETE", &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"]["success"], SAVED);

    let (_, body) = get(&app, "/api/search?loc=Camden").await;
    let cafes = body["cafes"].as_array().unwrap();
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0]["name"], "Staying");

    let (status, _) = send(&app, "DELETE", &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_authorize_close_report_by_first_api_key() {
    let app = app().await;
    post_form(&app, &cafe_form("Doubled", "Camden")).await;
    let id = id_of(&app, "Doubled").await;

    let uri = format!("/api/report-closed/{id}?api-key=wrong&api-key={SECRET}");
    let (status, _) = send(&app, "DELETE", &uri).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let uri = format!("/api/report-closed/{id}?api-key={SECRET}&api-key=wrong");
    let (status, body) = send(&app, "DELETE", &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"]["success"], SAVED);

    let (status, _) = get(&app, "/api/all").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_closing_unknown_id() {
    let app = app().await;

    let uri = format!("/api/report-closed/12345?api-key={SECRET}");
    let (status, body) = send(&app, "DELETE", &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["Not Found"], "This ID Does not Exist.");
}
