//! End-to-end smoke tests for the full lumohubd stack.
//!
//! Each test connects the virtual gateway through a real session (with a
//! JSON credential file in a temporary directory), feeds its events into the
//! light cache, and exercises the HTTP layer via `tower::ServiceExt::oneshot`
//! — no TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use lumohub_adapter_credentials_file::JsonFileCredentialStore;
use lumohub_adapter_http_axum::router;
use lumohub_adapter_http_axum::state::AppState;
use lumohub_adapter_virtual::seed::{BEDSIDE, CEILING, FOCUS, READING_LAMP, REMOTE};
use lumohub_adapter_virtual::{VirtualConfig, VirtualConnector, VirtualGateway};
use lumohub_app::cache::LightCache;
use lumohub_app::gateway_handle::GatewayHandle;
use lumohub_app::ports::CredentialStore;
use lumohub_app::services::command_service::CommandService;
use lumohub_app::services::query_service::QueryService;
use lumohub_app::session::GatewaySession;
use lumohub_app::usage::SceneUsage;
use lumohub_domain::event::GatewayEvent;
use tokio::sync::mpsc;
use tower::ServiceExt;

/// A fully-wired router plus the pieces tests inspect.
struct Harness {
    app: axum::Router,
    cache: Arc<LightCache>,
    events: mpsc::Receiver<GatewayEvent>,
    _dir: tempfile::TempDir,
}

impl Harness {
    async fn start(config: VirtualConfig) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(LightCache::new());
        let usage = Arc::new(SceneUsage::new());
        let handle = Arc::new(GatewayHandle::<VirtualGateway>::new());
        let (tx, events) = mpsc::channel(256);

        let session = GatewaySession::new(
            VirtualConnector::new(config),
            JsonFileCredentialStore::new(dir.path().join("gateway_credentials.json")),
            "1234abcd",
        );
        if let Some(connection) = session.establish(tx).await.unwrap() {
            handle.install(connection);
        }

        let state = AppState::new(
            CommandService::new(Arc::clone(&cache), Arc::clone(&usage), handle),
            QueryService::new(Arc::clone(&cache), usage),
        );

        let mut harness = Self {
            app: router::build(state, None),
            cache,
            events,
            _dir: dir,
        };
        harness.sync();
        harness
    }

    async fn connected() -> Self {
        Self::start(VirtualConfig::default()).await
    }

    /// Apply every pending gateway event to the cache.
    fn sync(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.cache.apply(event);
        }
    }

    async fn post(&mut self, uri: &str, body: &'static str) -> StatusCode {
        let response = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        self.sync();
        response.status()
    }

    async fn get_json(&self, uri: &str) -> serde_json::Value {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let harness = Harness::connected().await;
    let response = harness
        .app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_gateway_groups_sorted_by_name() {
    let harness = Harness::connected().await;

    let groups = harness.get_json("/api/groups").await;
    let names: Vec<&str> = groups
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, ["Bedroom", "Hallway", "Living Room"]);
}

#[tokio::test]
async fn should_skip_non_light_members() {
    let harness = Harness::connected().await;

    let groups = harness.get_json("/api/groups").await;
    let living_room = &groups[2];
    let ids: Vec<u64> = living_room["lights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect();

    assert_eq!(
        ids,
        [u64::from(CEILING.get()), u64::from(READING_LAMP.get())]
    );
    assert!(!ids.contains(&u64::from(REMOTE.get())));
    assert_eq!(living_room["lights"][1]["color"], "#f1e0b5");
}

#[tokio::test]
async fn should_list_every_scene() {
    let harness = Harness::connected().await;

    let scenes = harness.get_json("/api/scenes").await;

    assert_eq!(scenes.as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reflect_brightness_change_in_cache() {
    let mut harness = Harness::connected().await;

    let status = harness
        .post(&format!("/api/lights/{CEILING}/brightness"), "0.25")
        .await;

    assert_eq!(status, StatusCode::OK);
    let light = harness.cache.light(CEILING).unwrap();
    assert_eq!(light.dimmer, 25);
    assert!(light.on);
}

#[tokio::test]
async fn should_switch_light_off_at_zero_brightness() {
    let mut harness = Harness::connected().await;

    harness
        .post(&format!("/api/lights/{CEILING}/brightness"), "0")
        .await;

    assert!(!harness.cache.light(CEILING).unwrap().on);
}

#[tokio::test]
async fn should_set_temperature_on_white_light() {
    let mut harness = Harness::connected().await;

    let status = harness
        .post(&format!("/api/lights/{BEDSIDE}/temperature"), "0.4")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(harness.cache.light(BEDSIDE).unwrap().color_temperature, Some(40));
}

#[tokio::test]
async fn should_reject_color_on_white_light() {
    let mut harness = Harness::connected().await;

    let status = harness
        .post(&format!("/api/lights/{CEILING}/color"), "#ff0000")
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn should_store_color_on_rgb_light() {
    let mut harness = Harness::connected().await;

    let status = harness
        .post(&format!("/api/lights/{READING_LAMP}/color"), "#00ff7f")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        harness.cache.light(READING_LAMP).unwrap().color.as_deref(),
        Some("00ff7f")
    );
}

#[tokio::test]
async fn should_surface_gateway_rejection_as_service_unavailable() {
    let mut harness = Harness::connected().await;

    let status = harness
        .post(&format!("/api/lights/{READING_LAMP}/color"), "not-a-color")
        .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_light() {
    let mut harness = Harness::connected().await;

    let status = harness.post("/api/lights/1/brightness", "0.5").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_rank_activated_scene_first() {
    let mut harness = Harness::connected().await;

    let status = harness.post("/api/scenes", "196610").await;
    assert_eq!(status, StatusCode::OK);

    let scenes = harness.get_json("/api/scenes").await;
    assert_eq!(scenes[0]["id"].as_u64(), Some(u64::from(FOCUS.get())));
    assert_eq!(harness.cache.light(CEILING).unwrap().dimmer, 100);
}

#[tokio::test]
async fn should_reboot_gateway() {
    let mut harness = Harness::connected().await;

    let status = harness.post("/admin/gateway/reboot", "").await;

    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_persist_issued_credentials() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway_credentials.json");
    let (tx, _rx) = mpsc::channel(256);

    let session = GatewaySession::new(
        VirtualConnector::default(),
        JsonFileCredentialStore::new(&path),
        "1234abcd",
    );
    session.establish(tx.clone()).await.unwrap().unwrap();

    let stored = JsonFileCredentialStore::new(&path).load().await.unwrap();
    assert!(stored.is_some());

    // the stored credentials are enough, the security code is not needed again
    let session = GatewaySession::new(
        VirtualConnector::default(),
        JsonFileCredentialStore::new(&path),
        "",
    );
    assert!(session.establish(tx).await.unwrap().is_some());
}

#[tokio::test]
async fn should_serve_empty_lists_without_gateway() {
    let mut harness = Harness::start(VirtualConfig {
        discoverable: false,
        ..VirtualConfig::default()
    })
    .await;

    assert_eq!(harness.get_json("/api/groups").await, serde_json::json!([]));
    assert_eq!(harness.get_json("/api/scenes").await, serde_json::json!([]));
    assert_eq!(
        harness.post("/admin/gateway/reboot", "").await,
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        harness.post(&format!("/api/lights/{CEILING}/brightness"), "0.5").await,
        StatusCode::NOT_FOUND
    );
}
