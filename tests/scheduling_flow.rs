//! End-to-end flow against a live server on an ephemeral port.

#![allow(clippy::panic)]

use availability_board::api::build_app;
use availability_board::app_state::AppState;
use availability_board::config::{BoardConfig, LogFormat};
use availability_board::persistence::{Storage, StorageSettings};
use availability_board::service::ScheduleService;
use reqwest::StatusCode;
use reqwest::redirect::Policy;
use serde_json::Value;

async fn spawn_server() -> String {
    let Ok(storage) = Storage::connect(&StorageSettings::in_memory()).await else {
        panic!("storage failed to open");
    };
    if storage.ensure_schema().await.is_err() {
        panic!("schema creation failed");
    }

    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind failed");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("no local addr");
    };
    let base = format!("http://{addr}");

    let config = BoardConfig {
        listen_addr: addr,
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_connect_timeout_secs: 5,
        public_base_url: base.clone(),
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
    };
    let app = build_app(AppState::new(ScheduleService::new(storage), config));
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    base
}

fn client() -> reqwest::Client {
    let Ok(client) = reqwest::Client::builder().redirect(Policy::none()).build() else {
        panic!("client build failed");
    };
    client
}

async fn json(response: reqwest::Response) -> Value {
    let Ok(value) = response.json::<Value>().await else {
        panic!("body is not JSON");
    };
    value
}

#[tokio::test]
async fn standup_create_invite_view_delete() {
    let base = spawn_server().await;
    let client = client();

    let Ok(created) = client
        .post(format!("{base}/create"))
        .form(&[("title", "Standup"), ("datetime", "2024-01-10T09:00")])
        .send()
        .await
    else {
        panic!("create request failed");
    };
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json(created).await;
    let Some(event_id) = created["event_id"].as_str().map(str::to_string) else {
        panic!("event_id missing");
    };
    assert_eq!(created["invite_url"], format!("{base}/invite/{event_id}"));

    let Ok(invited) = client
        .post(format!("{base}/invite/{event_id}"))
        .form(&[
            ("name", "Ann"),
            ("start", "09:00"),
            ("end", "09:30"),
            ("description", "ok"),
        ])
        .send()
        .await
    else {
        panic!("invite request failed");
    };
    assert_eq!(invited.status(), StatusCode::OK);

    let Ok(detail) = client.get(format!("{base}/event/{event_id}")).send().await else {
        panic!("detail request failed");
    };
    assert_eq!(detail.status(), StatusCode::OK);
    let detail = json(detail).await;
    let Some(responses) = detail["responses"].as_array() else {
        panic!("responses missing");
    };
    assert_eq!(responses.len(), 1);
    assert_eq!(detail["responses"][0]["name"], "Ann");
    assert_eq!(detail["responses"][0]["available_start"], "09:00");
    assert_eq!(detail["responses"][0]["available_end"], "09:30");
    assert_eq!(detail["responses"][0]["description"], "ok");

    let Ok(deleted) = client.post(format!("{base}/delete/{event_id}")).send().await else {
        panic!("delete request failed");
    };
    assert_eq!(deleted.status(), StatusCode::SEE_OTHER);
    let location = deleted
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let Some(location) = location else {
        panic!("redirect location missing");
    };
    assert!(location.starts_with("/?notice="));

    let Ok(listed) = client.get(format!("{base}{location}")).send().await else {
        panic!("list request failed");
    };
    let listed = json(listed).await;
    assert_eq!(listed["notice"], "Event \"Standup\" has been deleted.");
    assert_eq!(listed["events"].as_array().map(Vec::len), Some(0));

    let Ok(gone) = client.get(format!("{base}/event/{event_id}")).send().await else {
        panic!("detail request failed");
    };
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    assert_eq!(gone.text().await.ok().as_deref(), Some("Event not found"));
}

#[tokio::test]
async fn invite_to_unknown_event_stores_nothing() {
    let base = spawn_server().await;
    let client = client();

    let Ok(response) = client
        .post(format!("{base}/invite/no-such-event"))
        .form(&[("name", "Ann"), ("start", "09:00"), ("end", "09:30")])
        .send()
        .await
    else {
        panic!("invite request failed");
    };
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let Ok(detail) = client.get(format!("{base}/event/no-such-event")).send().await else {
        panic!("detail request failed");
    };
    assert_eq!(detail.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let base = spawn_server().await;
    let Ok(response) = client()
        .get(format!("{base}{}", availability_board::api::OPENAPI_PATH))
        .send()
        .await
    else {
        panic!("openapi request failed");
    };
    assert_eq!(response.status(), StatusCode::OK);
    let doc = json(response).await;
    assert!(doc["paths"].get("/invite/{event_id}").is_some());
}
